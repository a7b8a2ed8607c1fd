use std::path::PathBuf;

pub const PLACEHOLDER_IMAGE: &str = "back.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }
}

fn rank_name(rank: &str) -> Option<&'static str> {
    Some(match rank {
        "A" => "ace",
        "K" => "king",
        "Q" => "queen",
        "J" => "jack",
        "10" => "10",
        "9" => "9",
        "8" => "8",
        "7" => "7",
        "6" => "6",
        "5" => "5",
        "4" => "4",
        "3" => "3",
        "2" => "2",
        _ => return None,
    })
}

/// A card code split into rank text and suit. The rank is kept as written so
/// an unusual rank still maps to a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCode<'a> {
    pub rank: &'a str,
    pub suit: Suit,
}

impl<'a> CardCode<'a> {
    /// Split `"10H"` into rank `"10"` and hearts. `None` when the code is too
    /// short or the last character is not a suit.
    pub fn parse(code: &'a str) -> Option<Self> {
        let suit_char = code.chars().last()?;
        let rank = &code[..code.len() - suit_char.len_utf8()];
        if rank.is_empty() {
            return None;
        }
        Some(Self {
            rank,
            suit: Suit::from_code(suit_char)?,
        })
    }

    pub fn file_name(&self) -> String {
        let rank = rank_name(self.rank).unwrap_or(self.rank);
        format!("{rank}_of_{}.png", self.suit.name())
    }
}

/// Where a card's image comes from in a given display context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Face(PathBuf),
    Placeholder(PathBuf),
    Missing,
}

/// Maps card codes to image files in one directory.
#[derive(Debug, Clone)]
pub struct CardImages {
    dir: PathBuf,
}

impl CardImages {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Image path for a code, without checking the file exists.
    pub fn path_for(&self, code: &str) -> Option<PathBuf> {
        CardCode::parse(code).map(|card| self.dir.join(card.file_name()))
    }

    /// Resolve a card for display. Codes that do not map to an existing image
    /// become the placeholder when `allow_placeholder` (an opponent's hidden
    /// cards), otherwise nothing (a garbled board card).
    pub fn resolve(&self, code: &str, allow_placeholder: bool) -> CardImage {
        match self.path_for(code) {
            Some(path) if path.is_file() => CardImage::Face(path),
            _ if allow_placeholder => CardImage::Placeholder(self.dir.join(PLACEHOLDER_IMAGE)),
            _ => CardImage::Missing,
        }
    }
}
