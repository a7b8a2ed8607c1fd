use crate::currency::normalize;
use crate::fields::{safe_int, text_or_unknown};
use crate::models::TournamentRecord;
use crate::xml::Element;

/// Build the tournament summary from a file's top-level `general` block.
/// Every field has a default, so a sparse block still yields a full record.
pub fn parse_tournament(general: Option<&Element>) -> Option<TournamentRecord> {
    let general = general?;
    let text = |tag: &str| text_or_unknown(general.child_text(tag));
    let money = |tag: &str| normalize(general.child_text(tag));
    let count = |tag: &str| safe_int(general.child_text(tag), 0);

    Some(TournamentRecord {
        tournament_code: text("tournamentcode"),
        session_code: text_or_unknown(general.attr("sessioncode")),
        tournament_name: text("tournamentname"),
        game_type: text("gametype"),
        table_name: text("tablename"),
        client_version: text("client_version"),
        nickname: text("nickname"),
        start_date: text("startdate"),
        duration: text("duration"),
        bets: money("bets"),
        wins: money("wins"),
        chips_in: money("chipsin"),
        chips_out: money("chipsout"),
        reward_drawn: money("rewarddrawn"),
        total_buy_in: money("totalbuyin"),
        win: money("win"),
        game_count: count("gamecount"),
        table_size: count("tablesize"),
        place: count("place"),
        currency: text("currency"),
        tournament_currency: text("tournamentcurrency"),
        status_points: text("statuspoints"),
        award_points: text("awardpoints"),
        i_points: text("ipoints"),
        buy_in: text("buyin"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    const FULL: &str = r#"<general sessioncode="S-99">
  <client_version>23.5.1</client_version>
  <gametype>Holdem NL</gametype>
  <tablename>Twister 1,234</tablename>
  <tournamentcurrency>T$</tournamentcurrency>
  <duration>00:12:31</duration>
  <gamecount>27</gamecount>
  <startdate>2024-03-02 21:14:05</startdate>
  <currency>EUR</currency>
  <nickname>hero77</nickname>
  <bets>€1.250,50</bets>
  <wins>€2.000,00</wins>
  <chipsin>500</chipsin>
  <chipsout>1500</chipsout>
  <statuspoints>12</statuspoints>
  <awardpoints>3</awardpoints>
  <ipoints>0,5</ipoints>
  <tablesize>3</tablesize>
  <tournamentcode>T1</tournamentcode>
  <tournamentname>Twister €5</tournamentname>
  <rewarddrawn>€10</rewarddrawn>
  <place>1</place>
  <buyin>€4.65 + €0.35</buyin>
  <totalbuyin>€5</totalbuyin>
  <win>€10,00</win>
</general>"#;

    #[test]
    fn test_parse_full_block() {
        let el = parse_document(FULL).unwrap();
        let t = parse_tournament(Some(&el)).unwrap();
        assert_eq!(t.tournament_code, "T1");
        assert_eq!(t.session_code, "S-99");
        assert_eq!(t.tournament_name, "Twister €5");
        assert_eq!(t.start_date, "2024-03-02 21:14:05");
        assert_eq!(t.game_count, 27);
        assert_eq!(t.table_size, 3);
        assert_eq!(t.place, 1);
        assert_eq!(t.bets, 1250.5);
        assert_eq!(t.wins, 2000.0);
        assert_eq!(t.chips_out, 1500.0);
        assert_eq!(t.reward_drawn, 10.0);
        assert_eq!(t.win, 10.0);
        assert_eq!(t.i_points, "0,5");
        assert_eq!(t.buy_in, "€4.65 + €0.35");
    }

    #[test]
    fn test_parse_none_is_none() {
        assert!(parse_tournament(None).is_none());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let el = parse_document("<general><tournamentcode>T2</tournamentcode></general>").unwrap();
        let t = parse_tournament(Some(&el)).unwrap();
        assert_eq!(t.tournament_code, "T2");
        assert_eq!(t.session_code, "Unknown");
        assert_eq!(t.tournament_name, "Unknown");
        assert_eq!(t.start_date, "Unknown");
        assert_eq!(t.buy_in, "Unknown");
        assert_eq!(t.game_count, 0);
        assert_eq!(t.place, 0);
        assert_eq!(t.total_buy_in, 0.0);
        assert_eq!(t.chips_in, 0.0);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let el = parse_document(
            "<general><gamecount>many</gamecount><place/><bets>n/a</bets><nickname></nickname></general>",
        )
        .unwrap();
        let t = parse_tournament(Some(&el)).unwrap();
        assert_eq!(t.game_count, 0);
        assert_eq!(t.place, 0);
        assert_eq!(t.bets, 0.0);
        assert_eq!(t.nickname, "Unknown");
        assert_eq!(t.tournament_code, "Unknown");
    }
}
