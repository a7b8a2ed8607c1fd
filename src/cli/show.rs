use colored::Colorize;
use comfy_table::{Cell, Table};

use super::open_session;
use crate::cards::{CardImage, CardImages};
use crate::error::{PokerError, Result};
use crate::fmt::{amount, cards};
use crate::models::HandRecord;
use crate::session::{action_timeline, hero_hole_cards};

fn image_line(images: &CardImages, codes: &[String], allow_placeholder: bool) -> String {
    codes
        .iter()
        .map(|code| match images.resolve(code, allow_placeholder) {
            CardImage::Face(path) | CardImage::Placeholder(path) => path.display().to_string(),
            CardImage::Missing => format!("(no image for {code})"),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_players(hand: &HandRecord, hero: &str, images: &CardImages) {
    let mut table = Table::new();
    table.set_header(vec!["Seat", "Player", "", "Chips", "Bet", "Win", "Cards"]);
    for p in &hand.players {
        let name = if p.name == hero {
            p.name.bold().to_string()
        } else {
            p.name.clone()
        };
        table.add_row(vec![
            Cell::new(p.seat),
            Cell::new(name),
            Cell::new(if p.is_dealer() { "D" } else { "" }),
            Cell::new(amount(p.chips)),
            Cell::new(amount(p.bet)),
            Cell::new(amount(p.win)),
            Cell::new(cards(&p.hole_cards)),
        ]);
    }
    println!("{table}");

    for p in hand.players.iter().filter(|p| !p.hole_cards.is_empty()) {
        println!("  {}: {}", p.name, image_line(images, &p.hole_cards, true));
    }
}

pub fn run(dir: Option<String>, game: &str, lenient: bool) -> Result<()> {
    let (settings, session) = open_session(dir, lenient)?;
    let (hand, prev, next) = session
        .hand_with_neighbours(game)
        .ok_or_else(|| PokerError::UnknownHand(game.to_string()))?;

    let hero = if settings.hero.is_empty() {
        session
            .tournament(&hand.tournament_code)
            .map(|t| t.nickname.clone())
            .unwrap_or_default()
    } else {
        settings.hero.clone()
    };
    let images = CardImages::new(&settings.cards_dir);

    println!("{} {}", "Game".bold(), hand.game_code);
    println!("Start date:  {}", hand.start_date);
    println!("Blinds:      {} / {}", amount(hand.small_blind), amount(hand.big_blind));
    match hero_hole_cards(hand, &hero) {
        Some(hole) => println!("Your cards:  {}", cards(hole)),
        None => println!("Your cards:  not available"),
    }
    println!();

    println!("{}", "Players".bold());
    print_players(hand, &hero, &images);
    println!();

    println!("{}", "Rounds".bold());
    for round in &hand.rounds {
        println!("--- Round {} ---", round.number);
        for board in &round.community_cards {
            println!(
                "  {}: {}  [{}]",
                board.street.label(),
                cards(&board.cards),
                image_line(&images, &board.cards, false)
            );
        }
        for action in &round.actions {
            println!(
                "  #{} {}: action {}, sum {}",
                action.sequence_no,
                action.player,
                action.action_type,
                amount(action.sum)
            );
        }
    }
    println!();

    let timeline = action_timeline(hand);
    if timeline.is_empty() {
        println!("No actions recorded for this hand.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Round", "Player", "Action", "Sum"]);
        for step in timeline {
            table.add_row(vec![
                Cell::new(step.round),
                Cell::new(step.player),
                Cell::new(step.action_type),
                Cell::new(amount(step.sum)),
            ]);
        }
        println!("{}\n{table}", "Timeline".bold());
    }

    println!(
        "Previous: {}  Next: {}",
        prev.unwrap_or("-"),
        next.unwrap_or("-")
    );
    Ok(())
}
