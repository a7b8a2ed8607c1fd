use colored::Colorize;
use comfy_table::{Cell, Table};

use super::open_session;
use crate::error::{PokerError, Result};
use crate::fmt::amount;
use crate::session::{hand_label, tournament_label};

pub fn run(dir: Option<String>, tournament: &str, lenient: bool) -> Result<()> {
    let (_, session) = open_session(dir, lenient)?;
    let t = session
        .tournament(tournament)
        .ok_or_else(|| PokerError::UnknownTournament(tournament.to_string()))?;

    println!("{}", tournament_label(t).bold());
    println!("Total buy-in: {}", amount(t.total_buy_in));

    let hands: Vec<_> = session.hands_for(tournament).collect();
    if hands.is_empty() {
        println!("No hands found for this tournament.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Game", "Started", "Blinds", "Cards"]);
    for (i, hand) in hands.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&hand.game_code),
            Cell::new(&hand.start_date),
            Cell::new(format!("{}/{}", amount(hand.small_blind), amount(hand.big_blind))),
            Cell::new(hand_label(hand)),
        ]);
    }
    println!("{table}");
    Ok(())
}
