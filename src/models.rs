/// Placeholder for any text field missing from the source document.
pub const UNKNOWN: &str = "Unknown";

/// Summary of one tournament, read from the top-level `general` block of a file.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentRecord {
    pub tournament_code: String,
    pub session_code: String,
    pub tournament_name: String,
    pub game_type: String,
    pub table_name: String,
    pub client_version: String,
    pub nickname: String,
    pub start_date: String,
    pub duration: String,
    pub bets: f64,
    pub wins: f64,
    pub chips_in: f64,
    pub chips_out: f64,
    pub reward_drawn: f64,
    pub total_buy_in: f64,
    pub win: f64,
    pub game_count: i64,
    pub table_size: i64,
    pub place: i64,
    pub currency: String,
    pub tournament_currency: String,
    pub status_points: String,
    pub award_points: String,
    pub i_points: String,
    pub buy_in: String,
}

/// One played hand. Joined to its tournament by `tournament_code`.
#[derive(Debug, Clone, PartialEq)]
pub struct HandRecord {
    pub game_code: String,
    pub tournament_code: String,
    pub start_date: String,
    pub small_blind: f64,
    pub big_blind: f64,
    pub players: Vec<PlayerSeat>,
    pub rounds: Vec<RoundRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeat {
    pub seat: i64,
    pub name: String,
    pub win: f64,
    pub bet: f64,
    pub chips: f64,
    /// 1 when the seat holds the button.
    pub dealer: i64,
    /// Empty unless the hand revealed this player's cards.
    pub hole_cards: Vec<String>,
}

impl PlayerSeat {
    pub fn is_dealer(&self) -> bool {
        self.dealer == 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub number: i64,
    pub community_cards: Vec<CommunityCards>,
    pub actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "Flop" => Some(Self::Flop),
            "Turn" => Some(Self::Turn),
            "River" => Some(Self::River),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityCards {
    pub street: Street,
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    pub player: String,
    /// Action code from the source format (fold, call, raise, ...); not interpreted here.
    pub action_type: i64,
    pub sum: f64,
    pub sequence_no: i64,
}
