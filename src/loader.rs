use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{PokerError, Result};
use crate::hand::parse_hand;
use crate::models::{HandRecord, TournamentRecord};
use crate::session::{FileError, Session};
use crate::tournament::parse_tournament;
use crate::xml::{decode_document, parse_document, Element};

const XML_EXTENSION: &[u8] = b".xml";

/// What to do with a file that is not well-formed XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Abort the whole load with [`PokerError::Parse`].
    #[default]
    Strict,
    /// Skip the file and record it in [`Session::errors`].
    Lenient,
}

/// Everything one file contributes to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecords {
    pub tournament: TournamentRecord,
    pub hands: Vec<HandRecord>,
}

/// XML files directly inside `dir`, sorted by file name.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.as_encoded_bytes().ends_with(XML_EXTENSION) && entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Records from an already parsed document. A document without a top-level
/// `general` block has no tournament to hang its games on and yields nothing.
pub fn records_from_document(root: &Element) -> Option<FileRecords> {
    let tournament = parse_tournament(root.child("general"))?;
    let hands = root
        .children_named("game")
        .map(|game| parse_hand(game, &tournament.tournament_code))
        .collect();
    Some(FileRecords { tournament, hands })
}

/// Read and parse one file, decoded by its XML declaration. Malformed XML is
/// reported as [`PokerError::Parse`] naming the file.
pub fn load_file(path: &Path) -> Result<Option<FileRecords>> {
    let bytes = std::fs::read(path)?;
    let source = decode_document(&bytes);
    let root = parse_document(&source).map_err(|e| PokerError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(records_from_document(&root))
}

/// Load every XML file in `dir` (no recursion) into one session.
pub fn load_session(dir: &Path, policy: LoadPolicy) -> Result<Session> {
    let files = list_xml_files(dir)?;
    info!(dir = %dir.display(), files = files.len(), "loading hand histories");

    let mut tournaments = Vec::new();
    let mut hands = Vec::new();
    let mut errors = Vec::new();

    for path in files {
        match load_file(&path) {
            Ok(Some(records)) => {
                debug!(
                    file = %path.display(),
                    tournament = %records.tournament.tournament_code,
                    hands = records.hands.len(),
                    "parsed file"
                );
                tournaments.push(records.tournament);
                hands.extend(records.hands);
            }
            Ok(None) => {
                debug!(file = %path.display(), "no general block, games skipped");
            }
            Err(PokerError::Parse { path, message }) if policy == LoadPolicy::Lenient => {
                warn!(file = %path.display(), %message, "skipping malformed file");
                errors.push(FileError { path, message });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Session::new(tournaments, hands, errors))
}
