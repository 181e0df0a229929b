//! Integration tests: run each analyzer through the unified dispatcher on
//! hand-checked positions and hands.

mod common;

use board_analyzers::analyzers::go::{Color, Territory};
use board_analyzers::analyzers::guandan::BombKind;
use board_analyzers::analyzers::mahjong::{is_hu, FanPattern};
use board_analyzers::analyzers::poker::{PokerAction, PokerAnalysis};
use board_analyzers::analyzers::xiangqi::XiangqiVerdict;
use board_analyzers::{analyze_snapshot, Report, Snapshot, ANALYZER_TAGS};
use board_core::cards::Card;
use board_core::go::{GoBoard, Point};
use board_core::tiles::{parse_tiles, tile_counts, MahjongRule};
use common::{analyze_twice, go, guandan, mahjong, poker, xiangqi};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.code()).collect()
}

fn go_report(snapshot: &Snapshot) -> board_analyzers::analyzers::go::GoAnalysis {
    match analyze_twice(snapshot) {
        Report::Go(a) => a,
        other => panic!("expected a Go report, got {other:?}"),
    }
}

fn guandan_report(snapshot: &Snapshot) -> board_analyzers::analyzers::guandan::GuandanAnalysis {
    match analyze_twice(snapshot) {
        Report::Guandan(a) => a,
        other => panic!("expected a Guandan report, got {other:?}"),
    }
}

fn mahjong_report(snapshot: &Snapshot) -> board_analyzers::analyzers::mahjong::MahjongAnalysis {
    match analyze_twice(snapshot) {
        Report::Mahjong(a) => a,
        other => panic!("expected a Mahjong report, got {other:?}"),
    }
}

fn poker_report(snapshot: &Snapshot) -> PokerAnalysis {
    match analyze_twice(snapshot) {
        Report::Poker(a) => a,
        other => panic!("expected a poker report, got {other:?}"),
    }
}

fn xiangqi_report(snapshot: &Snapshot) -> XiangqiVerdict {
    match analyze_twice(snapshot) {
        Report::Xiangqi(v) => v,
        other => panic!("expected a Xiangqi report, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Go
// ---------------------------------------------------------------------------

#[test]
fn test_go_empty_board() {
    let a = go_report(&Snapshot::Go {
        board: GoBoard::new(19),
    });
    assert!(a.groups.is_empty());
    assert_eq!(a.black_territory, 0);
    assert_eq!(a.white_territory, 0);
    assert_eq!(a.territory.len(), 19);
}

#[test]
fn test_go_corner_stone() {
    let mut board = GoBoard::new(19);
    board.set(Point::new(0, 0), board_core::go::Stone::Black);
    let a = go_report(&Snapshot::Go { board });
    assert_eq!(a.groups.len(), 1);
    assert_eq!(a.groups[0].color, Color::Black);
    assert_eq!(a.groups[0].liberties, 2);
    // The rest of the board is one region bordered by black alone.
    assert_eq!(a.black_territory, 360);
    assert_eq!(a.territory[0][0], Territory::Neutral);
}

#[test]
fn test_go_lone_white_stone_in_far_corner() {
    let mut board = GoBoard::new(19);
    board.set(Point::new(18, 18), board_core::go::Stone::White);
    let a = go_report(&Snapshot::Go { board });
    assert_eq!(a.white_stones, 1);
    assert_eq!(a.white_territory, 360);
    assert_eq!(a.black_territory, 0);
}

#[test]
fn test_go_enclosed_point() {
    let a = go_report(&go("XXX\nX.X\nXXX"));
    assert_eq!(a.groups.len(), 1);
    assert_eq!(a.groups[0].stones.len(), 8);
    assert_eq!(a.groups[0].liberties, 1);
    assert_eq!(a.black_territory, 1);
    assert_eq!(a.territory[1][1], Territory::Black);
    assert_eq!(a.groups_in_atari().count(), 1);
}

#[test]
fn test_go_shared_region_is_neutral() {
    let a = go_report(&go("X.O\nX.O\nX.O"));
    assert_eq!(a.groups.len(), 2);
    assert_eq!(a.black_territory, 0);
    assert_eq!(a.white_territory, 0);
    assert!(a
        .territory
        .iter()
        .flatten()
        .all(|t| *t == Territory::Neutral));
}

// ---------------------------------------------------------------------------
// Guandan
// ---------------------------------------------------------------------------

#[test]
fn test_guandan_four_of_a_kind() {
    let a = guandan_report(&guandan("7S 2H 7H 7C 7D"));
    assert_eq!(a.bombs.len(), 1);
    assert_eq!(a.bombs[0].kind, BombKind::FourOfAKind);
    assert_eq!(codes(&a.bombs[0].cards), vec!["7H", "7D", "7C", "7S"]);
    assert_eq!(codes(&a.sorted_hand), vec!["7H", "7D", "7C", "7S", "2H"]);
}

#[test]
fn test_guandan_straight_flush_windows() {
    let five = guandan_report(&guandan("3H 4H 5H 6H 7H"));
    assert_eq!(five.bombs.len(), 1);
    assert_eq!(five.bombs[0].kind, BombKind::StraightFlush);

    let six = guandan_report(&guandan("8H 3H 4H 5H 6H 7H"));
    assert_eq!(six.bombs.len(), 2);
    assert_eq!(codes(&six.bombs[0].cards), vec!["3H", "4H", "5H", "6H", "7H"]);
    assert_eq!(codes(&six.bombs[1].cards), vec!["4H", "5H", "6H", "7H", "8H"]);
    assert_eq!(
        codes(&six.sorted_hand),
        vec!["3H", "4H", "5H", "6H", "7H", "8H"]
    );
}

#[test]
fn test_guandan_shared_card_emitted_once() {
    let a = guandan_report(&guandan("5H 5D 5C 5S 3H 4H 6H 7H"));
    assert_eq!(a.bombs.len(), 2);
    assert_eq!(a.bombs[1].kind, BombKind::StraightFlush);
    assert_eq!(
        codes(&a.sorted_hand),
        vec!["5H", "5D", "5C", "5S", "3H", "4H", "6H", "7H"]
    );
}

#[test]
fn test_guandan_four_kings_reported_once() {
    let a = guandan_report(&guandan("BJ SJ 9C BJ SJ"));
    assert_eq!(a.bombs.len(), 1);
    assert_eq!(a.bombs[0].kind, BombKind::FourKings);
    assert_eq!(codes(&a.sorted_hand), vec!["SJ", "SJ", "BJ", "BJ", "9C"]);
}

// ---------------------------------------------------------------------------
// Mahjong
// ---------------------------------------------------------------------------

#[test]
fn test_mahjong_complete_hand_decomposes() {
    let hand = parse_tiles("1m 2m 3m 4m 5m 6m 7m 8m 9m 1p 1p 1p 5s 5s").unwrap();
    assert!(is_hu(&tile_counts(&hand)));

    let broken = parse_tiles("1m 2m 3m 4m 5m 6m 7m 8m 9m 1p 1p 2p 5s 5s").unwrap();
    assert!(!is_hu(&tile_counts(&broken)));
}

#[test]
fn test_mahjong_missing_tile_is_a_wait() {
    let a = mahjong_report(&mahjong(
        "5s 1m 2m 3m 4m 5m 6m 7m 8m 1p 1p 1p 5s",
        MahjongRule::National,
    ));
    let waits: Vec<&str> = a.waiting_results.iter().map(|w| w.tile.code()).collect();
    assert_eq!(waits, vec!["3m", "6m", "9m"]);
    assert!(a.waiting_results.iter().all(|w| w.label == "Ping Hu" && w.fan == 1));
    assert_eq!(a.sorted_hand[0].code(), "1m");
    assert_eq!(a.sorted_hand[12].code(), "5s");
}

#[test]
fn test_mahjong_seven_pairs() {
    let hand = parse_tiles("1m 1m 3m 3m 5m 5m 7p 7p 9s 9s E E N N").unwrap();
    assert!(is_hu(&tile_counts(&hand)));

    let a = mahjong_report(&mahjong(
        "1m 1m 3m 3m 5m 5m 7p 7p 9s 9s E E N",
        MahjongRule::National,
    ));
    assert_eq!(a.waiting_results.len(), 1);
    assert_eq!(a.waiting_results[0].tile.code(), "N");
}

#[test]
fn test_mahjong_tianjin_dragon_and_half_flush() {
    let a = mahjong_report(&mahjong(
        "1m 2m 3m 4m 5m 6m 7m 8m 9m P P P C",
        MahjongRule::Tianjin,
    ));
    assert_eq!(a.waiting_results.len(), 1);
    let wait = &a.waiting_results[0];
    assert_eq!(wait.tile.code(), "C");
    assert_eq!(wait.patterns, vec![FanPattern::DragonPung, FanPattern::HunYiSe]);
    assert_eq!(wait.fan, 4);
    assert_eq!(wait.label, "Dragon Pung Hun Yi Se");

    // Same hand under the national rule only keeps the dragon triplet.
    let national = mahjong_report(&mahjong(
        "1m 2m 3m 4m 5m 6m 7m 8m 9m P P P C",
        MahjongRule::National,
    ));
    assert_eq!(national.waiting_results[0].fan, 1);
    assert_eq!(national.waiting_results[0].label, "Dragon Pung");
}

#[test]
fn test_mahjong_unready_hand_has_no_waits() {
    let a = mahjong_report(&mahjong("1m 2m 3m", MahjongRule::Riichi));
    assert!(a.waiting_results.is_empty());
    assert_eq!(a.sorted_hand.len(), 3);
}

// ---------------------------------------------------------------------------
// Poker
// ---------------------------------------------------------------------------

#[test]
fn test_poker_waits_for_hole_cards() {
    let a = poker_report(&poker("QS", "2C 7D 9H", ""));
    assert_eq!(a, PokerAnalysis::default());
}

#[test]
fn test_poker_pocket_aces_clamp_high() {
    let a = poker_report(&poker("AS AH", "AD 7C 2H", ""));
    assert_eq!(a.win, 100);
    assert_eq!((a.raise, a.call, a.fold), (80, 20, 0));
    assert_eq!(a.action, Some(PokerAction::Raise));
}

#[test]
fn test_poker_seen_pair_clamps_low() {
    // 7 + 2 against 13 * 2 + 20 for the paired kings and 15 for the board king.
    let a = poker_report(&poker("7S 2H", "KC", "KD KH"));
    assert_eq!(a.win, 0);
    assert_eq!(a.action, Some(PokerAction::Fold));
}

#[test]
fn test_poker_call_band_upper_edge() {
    // 13 + 10 + 5 suited against 18 lands exactly on 70.
    let a = poker_report(&poker("KH TH", "", ""));
    assert_eq!(a.win, 70);
    assert_eq!(a.action, Some(PokerAction::Call));
}

#[test]
fn test_poker_snapshot_json() {
    let json = r#"{"game":"poker","table":{"hole":["KH","AH"]}}"#;
    let parsed: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, poker("KH AH", "", ""));
    assert_eq!(poker_report(&parsed).win, 78);
}

// ---------------------------------------------------------------------------
// Xiangqi
// ---------------------------------------------------------------------------

#[test]
fn test_xiangqi_rook_takes_neighbour() {
    let verdict = xiangqi_report(&xiangqi("9/9/9/9/9/9/9/9/9/Rr7"));
    match &verdict {
        XiangqiVerdict::Move {
            score,
            reasoning,
            future_steps,
            ..
        } => {
            assert_eq!(*score, 81);
            assert_eq!(reasoning, "Captures value 81.");
            assert_eq!(future_steps, &vec!["車九进一", "車九进二", "車九进三"]);
        }
        XiangqiVerdict::Resign { .. } => panic!("expected a capture"),
    }
    assert_eq!(verdict.best_move(), "車九平八");
}

#[test]
fn test_xiangqi_no_moves_resigns() {
    let verdict = xiangqi_report(&xiangqi("3k5/9/9/9/9/9/9/9/9/3AB4"));
    assert_eq!(verdict, XiangqiVerdict::resign());
    assert!(verdict.future_steps().is_empty());
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

#[test]
fn test_every_game_has_a_tag() {
    let snapshots = [
        go("."),
        guandan(""),
        mahjong("", MahjongRule::National),
        poker("", "", ""),
        xiangqi("9/9/9/9/9/9/9/9/9/9"),
    ];
    for snapshot in &snapshots {
        assert!(ANALYZER_TAGS.iter().any(|(name, _)| *name == snapshot.game()));
    }
}

#[test]
fn test_snapshot_json_round_trip() {
    let snapshot = xiangqi("rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR");
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(
        json,
        r#"{"game":"xiangqi","board":"rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR"}"#
    );
    let parsed: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(analyze_snapshot(&parsed), analyze_snapshot(&snapshot));

    let go_json = r#"{"game":"go","board":[[1,0],[0,2]]}"#;
    let parsed: Snapshot = serde_json::from_str(go_json).unwrap();
    assert_eq!(parsed, go("X.\n.O"));
}
