use colored::Colorize;
use comfy_table::{Cell, Table};

use super::{open_session, parse_date_opt};
use crate::error::Result;
use crate::fmt::amount;
use crate::session::tournament_label;

pub fn run(
    dir: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    lenient: bool,
) -> Result<()> {
    let from = parse_date_opt(&from_date)?;
    let to = parse_date_opt(&to_date)?;
    let (_, session) = open_session(dir, lenient)?;

    println!(
        "Loaded {} tournaments and {} hands.",
        session.tournaments().len(),
        session.hands().len()
    );
    if let Some((first, last)) = session.date_span() {
        println!("Played between {first} and {last}.");
    }

    let selected = session.tournaments_between(from, to);
    if selected.is_empty() {
        println!("No tournaments found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Code", "Tournament", "Buy-in", "Place", "Win", "Hands"]);
    for t in selected {
        table.add_row(vec![
            Cell::new(&t.tournament_code),
            Cell::new(tournament_label(t)),
            Cell::new(amount(t.total_buy_in)),
            Cell::new(t.place),
            Cell::new(amount(t.win)),
            Cell::new(session.hands_for(&t.tournament_code).count()),
        ]);
    }
    println!("{}\n{table}", "Tournaments".bold());
    Ok(())
}
