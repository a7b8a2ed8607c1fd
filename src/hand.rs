use std::collections::HashMap;

use tracing::debug;

use crate::currency::normalize;
use crate::fields::{safe_float, safe_int, split_cards, text_or_unknown};
use crate::models::{
    ActionRecord, CommunityCards, HandRecord, PlayerSeat, RoundRecord, Street, UNKNOWN,
};
use crate::xml::Element;

const POCKET: &str = "Pocket";

/// Parse one `game` block into a hand tagged with `tournament_code`.
///
/// Runs in two stages: [`build_hand`] collects seats, rounds, community cards
/// and actions; [`attach_hole_cards`] then matches `Pocket` entries to seats,
/// which needs the finished seat list.
pub fn parse_hand(game: &Element, tournament_code: &str) -> HandRecord {
    let mut hand = build_hand(game, tournament_code);
    attach_hole_cards(&mut hand, game);
    hand
}

pub fn build_hand(game: &Element, tournament_code: &str) -> HandRecord {
    let general = game.child("general");
    let general_text = |tag: &str| general.and_then(|g| g.child_text(tag));

    let players = game
        .find("general/players")
        .map(|list| list.children_named("player").map(parse_player).collect())
        .unwrap_or_default();

    HandRecord {
        game_code: text_or_unknown(game.attr("gamecode")),
        tournament_code: tournament_code.to_string(),
        start_date: text_or_unknown(general_text("startdate")),
        small_blind: safe_float(general_text("smallblind"), 0.0),
        big_blind: safe_float(general_text("bigblind"), 0.0),
        players,
        rounds: game.children_named("round").map(parse_round).collect(),
    }
}

fn parse_player(player: &Element) -> PlayerSeat {
    PlayerSeat {
        seat: safe_int(player.attr("seat"), 0),
        name: text_or_unknown(player.attr("name")),
        win: normalize(player.attr("win")),
        bet: normalize(player.attr("bet")),
        chips: normalize(player.attr("chips")),
        dealer: safe_int(player.attr("dealer"), 0),
        hole_cards: Vec::new(),
    }
}

fn parse_round(round: &Element) -> RoundRecord {
    let community_cards = round
        .children_named("cards")
        .filter_map(|cards| {
            let street = Street::from_attr(cards.attr("type")?)?;
            Some(CommunityCards {
                street,
                cards: split_cards(cards.text()),
            })
        })
        .collect();

    let actions = round
        .children_named("action")
        .map(|action| ActionRecord {
            player: text_or_unknown(action.attr("player")),
            action_type: safe_int(action.attr("type"), 0),
            sum: normalize(action.attr("sum")),
            sequence_no: safe_int(action.attr("no"), 0),
        })
        .collect();

    RoundRecord {
        number: safe_int(round.attr("no"), 0),
        community_cards,
        actions,
    }
}

/// Give each seat the cards from the `Pocket` entries naming it.
///
/// Seats are matched by name. With duplicate names the first declared seat
/// wins; entries naming nobody are dropped. A later entry for the same seat
/// replaces an earlier one.
pub fn attach_hole_cards(hand: &mut HandRecord, game: &Element) {
    let mut seat_by_name: HashMap<String, usize> = HashMap::new();
    for (idx, player) in hand.players.iter().enumerate() {
        seat_by_name.entry(player.name.clone()).or_insert(idx);
    }

    let pockets = game
        .children_named("round")
        .flat_map(|round| round.children_named("cards"))
        .filter(|cards| cards.attr("type") == Some(POCKET));

    for cards in pockets {
        let name = cards.attr("player").unwrap_or(UNKNOWN);
        match seat_by_name.get(name) {
            Some(&idx) => hand.players[idx].hole_cards = split_cards(cards.text()),
            None => debug!(
                game = %hand.game_code,
                player = name,
                "hole cards for unseated player dropped"
            ),
        }
    }
}
