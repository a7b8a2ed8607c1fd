pub mod config;
pub mod hands;
pub mod show;
pub mod tournaments;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::error::{PokerError, Result};
use crate::loader::{load_session, LoadPolicy};
use crate::session::Session;
use crate::settings::{load_settings, shellexpand_path, Settings};

pub(crate) fn parse_date_opt(date: &Option<String>) -> Result<Option<NaiveDate>> {
    date.as_deref()
        .map(|d| {
            NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .map_err(|_| PokerError::InvalidDate(d.to_string()))
        })
        .transpose()
}

/// Resolve the hand-history directory, load it, and report anything the
/// loader had to skip.
pub(crate) fn open_session(dir: Option<String>, lenient: bool) -> Result<(Settings, Session)> {
    let settings = load_settings();
    let dir = PathBuf::from(shellexpand_path(dir.as_deref().unwrap_or(&settings.hands_dir)));
    if !dir.is_dir() {
        return Err(PokerError::Other(format!(
            "Hand-history directory not found: {}",
            dir.display()
        )));
    }

    let policy = if lenient || settings.lenient {
        LoadPolicy::Lenient
    } else {
        LoadPolicy::Strict
    };
    let session = load_session(&dir, policy)?;

    for err in session.errors() {
        eprintln!("{} {}: {}", "Skipped".yellow(), err.path.display(), err.message);
    }
    for code in session.colliding_codes() {
        eprintln!(
            "{} tournament code {code} appears in more than one file; their hands are listed together",
            "Warning:".yellow()
        );
    }
    Ok((settings, session))
}

#[derive(Parser)]
#[command(name = "pokerhist", about = "Browse poker tournament hand histories exported as XML.")]
pub struct Cli {
    /// Log parser details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tournaments in a hand-history directory.
    Tournaments {
        /// Directory of XML files (default: configured hands_dir)
        dir: Option<String>,
        /// Only tournaments starting on or after: YYYY-MM-DD
        #[arg(long = "from")]
        from_date: Option<String>,
        /// Only tournaments starting on or before: YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Skip malformed files instead of stopping
        #[arg(long)]
        lenient: bool,
    },
    /// List the hands of one tournament.
    Hands {
        dir: Option<String>,
        /// Tournament code
        #[arg(long)]
        tournament: String,
        #[arg(long)]
        lenient: bool,
    },
    /// Show one hand: seats, cards, rounds and the action timeline.
    Show {
        dir: Option<String>,
        /// Game code
        #[arg(long)]
        game: String,
        #[arg(long)]
        lenient: bool,
    },
    /// Show or update saved settings.
    Config {
        /// Default directory of XML files
        #[arg(long = "hands-dir")]
        hands_dir: Option<String>,
        /// Directory holding card images (ace_of_spades.png, ...)
        #[arg(long = "cards-dir")]
        cards_dir: Option<String>,
        /// Your player name
        #[arg(long)]
        hero: Option<String>,
        /// Skip malformed files by default
        #[arg(long)]
        lenient: Option<bool>,
    },
}
