use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed XML in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unknown tournament: {0}")]
    UnknownTournament(String),

    #[error("Unknown hand: {0}")]
    UnknownHand(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PokerError>;
