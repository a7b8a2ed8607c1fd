use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{HandRecord, PlayerSeat, TournamentRecord};

pub const START_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A file skipped by a lenient load.
#[derive(Debug, Clone, PartialEq)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// The result of one load: read-only tournaments and hands joined by
/// tournament code.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tournaments: Vec<TournamentRecord>,
    hands: Vec<HandRecord>,
    errors: Vec<FileError>,
}

/// One step in a hand's action timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry<'a> {
    pub round: i64,
    pub player: &'a str,
    pub action_type: i64,
    pub sum: f64,
}

impl Session {
    pub fn new(
        tournaments: Vec<TournamentRecord>,
        hands: Vec<HandRecord>,
        errors: Vec<FileError>,
    ) -> Self {
        Self {
            tournaments,
            hands,
            errors,
        }
    }

    pub fn tournaments(&self) -> &[TournamentRecord] {
        &self.tournaments
    }

    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }

    pub fn errors(&self) -> &[FileError] {
        &self.errors
    }

    pub fn hands_for<'a>(
        &'a self,
        tournament_code: &'a str,
    ) -> impl Iterator<Item = &'a HandRecord> + 'a {
        self.hands
            .iter()
            .filter(move |h| h.tournament_code == tournament_code)
    }

    pub fn tournament(&self, code: &str) -> Option<&TournamentRecord> {
        self.tournaments.iter().find(|t| t.tournament_code == code)
    }

    /// First hand with the given game code, with the codes of the hands before
    /// and after it in the same tournament.
    pub fn hand_with_neighbours(
        &self,
        game_code: &str,
    ) -> Option<(&HandRecord, Option<&str>, Option<&str>)> {
        let hand = self.hands.iter().find(|h| h.game_code == game_code)?;
        let siblings: Vec<&HandRecord> = self.hands_for(&hand.tournament_code).collect();
        let idx = siblings.iter().position(|h| std::ptr::eq(*h, hand))?;
        let prev = idx
            .checked_sub(1)
            .map(|i| siblings[i].game_code.as_str());
        let next = siblings.get(idx + 1).map(|h| h.game_code.as_str());
        Some((hand, prev, next))
    }

    /// Tournament codes shared by more than one tournament.
    pub fn colliding_codes(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for t in &self.tournaments {
            *counts.entry(t.tournament_code.as_str()).or_default() += 1;
        }
        let mut codes: Vec<&str> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(code, _)| code)
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Earliest and latest parseable tournament start dates.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates: Vec<NaiveDate> = self
            .tournaments
            .iter()
            .filter_map(|t| parse_start_date(&t.start_date))
            .map(|dt| dt.date())
            .collect();
        let min = dates.iter().min()?;
        let max = dates.iter().max()?;
        Some((*min, *max))
    }

    /// Tournaments starting within `[from, to]` (inclusive, by date). Open
    /// bounds match everything; tournaments with an unreadable start date only
    /// appear when both bounds are open.
    pub fn tournaments_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&TournamentRecord> {
        if from.is_none() && to.is_none() {
            return self.tournaments.iter().collect();
        }
        self.tournaments
            .iter()
            .filter(|t| {
                let Some(date) = parse_start_date(&t.start_date).map(|dt| dt.date()) else {
                    return false;
                };
                from.map_or(true, |start| date >= start) && to.map_or(true, |end| date <= end)
            })
            .collect()
    }
}

pub fn parse_start_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), START_DATE_FORMAT).ok()
}

/// Short listing label: name without the `Twister ` prefix, start date, game count.
pub fn tournament_label(t: &TournamentRecord) -> String {
    format!(
        "{} | {} | {}",
        t.tournament_name.replace("Twister ", ""),
        t.start_date,
        t.game_count
    )
}

/// Short listing label for a hand: the first seat's hole cards.
pub fn hand_label(hand: &HandRecord) -> String {
    hand.players
        .first()
        .map(|p| p.hole_cards.join(", "))
        .unwrap_or_default()
}

/// The seat played by `hero`, if it is in the hand.
pub fn hero_seat<'a>(hand: &'a HandRecord, hero: &str) -> Option<&'a PlayerSeat> {
    hand.players.iter().find(|p| p.name == hero)
}

/// Hole cards of `hero`, when the hand revealed them.
pub fn hero_hole_cards<'a>(hand: &'a HandRecord, hero: &str) -> Option<&'a [String]> {
    hero_seat(hand, hero)
        .map(|p| p.hole_cards.as_slice())
        .filter(|cards| !cards.is_empty())
}

/// Every action in the hand, round by round, in recorded order.
pub fn action_timeline(hand: &HandRecord) -> Vec<TimelineEntry<'_>> {
    hand.rounds
        .iter()
        .flat_map(|round| {
            round.actions.iter().map(move |a| TimelineEntry {
                round: round.number,
                player: &a.player,
                action_type: a.action_type,
                sum: a.sum,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionRecord, RoundRecord};

    fn tournament(code: &str, start: &str) -> TournamentRecord {
        TournamentRecord {
            tournament_code: code.to_string(),
            session_code: "S".to_string(),
            tournament_name: "Twister €5".to_string(),
            game_type: "Holdem NL".to_string(),
            table_name: "t".to_string(),
            client_version: "1".to_string(),
            nickname: "hero".to_string(),
            start_date: start.to_string(),
            duration: "00:10:00".to_string(),
            bets: 0.0,
            wins: 0.0,
            chips_in: 0.0,
            chips_out: 0.0,
            reward_drawn: 0.0,
            total_buy_in: 5.0,
            win: 0.0,
            game_count: 12,
            table_size: 3,
            place: 2,
            currency: "EUR".to_string(),
            tournament_currency: "EUR".to_string(),
            status_points: "0".to_string(),
            award_points: "0".to_string(),
            i_points: "0".to_string(),
            buy_in: "€5".to_string(),
        }
    }

    fn seat(name: &str, cards: &[&str]) -> PlayerSeat {
        PlayerSeat {
            seat: 1,
            name: name.to_string(),
            win: 0.0,
            bet: 0.0,
            chips: 500.0,
            dealer: 0,
            hole_cards: cards.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn hand(game: &str, code: &str) -> HandRecord {
        HandRecord {
            game_code: game.to_string(),
            tournament_code: code.to_string(),
            start_date: "2024-01-01 10:00:00".to_string(),
            small_blind: 10.0,
            big_blind: 20.0,
            players: vec![seat("hero", &["AS", "KS"]), seat("villain", &[])],
            rounds: vec![
                RoundRecord {
                    number: 0,
                    community_cards: vec![],
                    actions: vec![ActionRecord {
                        player: "villain".to_string(),
                        action_type: 1,
                        sum: 10.0,
                        sequence_no: 1,
                    }],
                },
                RoundRecord {
                    number: 1,
                    community_cards: vec![],
                    actions: vec![
                        ActionRecord {
                            player: "hero".to_string(),
                            action_type: 23,
                            sum: 60.0,
                            sequence_no: 2,
                        },
                        ActionRecord {
                            player: "villain".to_string(),
                            action_type: 0,
                            sum: 0.0,
                            sequence_no: 3,
                        },
                    ],
                },
            ],
        }
    }

    fn session() -> Session {
        Session::new(
            vec![
                tournament("A", "2024-01-01 10:00:00"),
                tournament("B", "2024-02-15 22:30:00"),
                tournament("C", "not a date"),
            ],
            vec![hand("1", "A"), hand("2", "B"), hand("3", "A"), hand("4", "A")],
            vec![],
        )
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hands_for_filters_by_code() {
        let s = session();
        let games: Vec<_> = s.hands_for("A").map(|h| h.game_code.as_str()).collect();
        assert_eq!(games, vec!["1", "3", "4"]);
        assert_eq!(s.hands_for("Z").count(), 0);
    }

    #[test]
    fn test_neighbours_stay_within_tournament() {
        let s = session();
        let (h, prev, next) = s.hand_with_neighbours("3").unwrap();
        assert_eq!(h.game_code, "3");
        assert_eq!(prev, Some("1"));
        assert_eq!(next, Some("4"));
        let (_, prev, next) = s.hand_with_neighbours("2").unwrap();
        assert_eq!((prev, next), (None, None));
        assert!(s.hand_with_neighbours("99").is_none());
    }

    #[test]
    fn test_date_span_skips_bad_dates() {
        assert_eq!(session().date_span(), Some((ymd(2024, 1, 1), ymd(2024, 2, 15))));
        assert_eq!(Session::default().date_span(), None);
    }

    #[test]
    fn test_tournaments_between() {
        let s = session();
        assert_eq!(s.tournaments_between(None, None).len(), 3);
        let after_feb = s.tournaments_between(Some(ymd(2024, 2, 1)), None);
        let feb: Vec<_> = after_feb
            .iter()
            .map(|t| t.tournament_code.as_str())
            .collect();
        assert_eq!(feb, vec!["B"]);
        let jan = s.tournaments_between(Some(ymd(2024, 1, 1)), Some(ymd(2024, 1, 1)));
        assert_eq!(jan.len(), 1);
        assert_eq!(jan[0].tournament_code, "A");
    }

    #[test]
    fn test_colliding_codes() {
        let s = Session::new(
            vec![
                tournament("Unknown", "x"),
                tournament("A", "x"),
                tournament("Unknown", "y"),
            ],
            vec![],
            vec![],
        );
        assert_eq!(s.colliding_codes(), vec!["Unknown"]);
        assert!(session().colliding_codes().is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            tournament_label(&tournament("A", "2024-01-01 10:00:00")),
            "€5 | 2024-01-01 10:00:00 | 12"
        );
        assert_eq!(hand_label(&hand("1", "A")), "AS, KS");
    }

    #[test]
    fn test_hero_hole_cards() {
        let h = hand("1", "A");
        assert_eq!(hero_hole_cards(&h, "hero"), Some(&["AS".to_string(), "KS".to_string()][..]));
        assert_eq!(hero_hole_cards(&h, "villain"), None);
        assert_eq!(hero_hole_cards(&h, "nobody"), None);
    }

    #[test]
    fn test_action_timeline_flattens_rounds() {
        let h = hand("1", "A");
        let timeline = action_timeline(&h);
        let steps: Vec<_> = timeline.iter().map(|e| (e.round, e.player, e.action_type)).collect();
        assert_eq!(steps, vec![(0, "villain", 1), (1, "hero", 23), (1, "villain", 0)]);
        assert_eq!(timeline[1].sum, 60.0);
    }
}
