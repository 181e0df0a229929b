#![allow(dead_code)]

use board_analyzers::{analyze_snapshot, Report, Snapshot};
use board_core::cards::parse_cards;
use board_core::poker::PokerTable;
use board_core::tiles::{parse_tiles, MahjongRule};

/// Go board from text rows.
pub fn go(rows: &str) -> Snapshot {
    Snapshot::Go {
        board: rows.parse().expect("invalid Go board"),
    }
}

pub fn guandan(codes: &str) -> Snapshot {
    Snapshot::Guandan {
        hand: parse_cards(codes).expect("invalid card code"),
    }
}

pub fn mahjong(codes: &str, rule: MahjongRule) -> Snapshot {
    Snapshot::Mahjong {
        hand: parse_tiles(codes).expect("invalid tile code"),
        rule,
    }
}

/// Hold'em table from space-separated hole, community and opponent codes.
pub fn poker(hole: &str, community: &str, opponent: &str) -> Snapshot {
    let cards = |codes: &str| parse_cards(codes).expect("invalid card code");
    Snapshot::Poker {
        table: PokerTable::new(cards(hole), cards(community), cards(opponent))
            .expect("invalid table"),
    }
}

pub fn xiangqi(fen: &str) -> Snapshot {
    Snapshot::Xiangqi {
        board: fen.parse().expect("invalid FEN"),
    }
}

/// Analyze and check that a second run gives the same report.
pub fn analyze_twice(snapshot: &Snapshot) -> Report {
    let first = analyze_snapshot(snapshot);
    assert_eq!(first, analyze_snapshot(snapshot), "analysis is not repeatable");
    first
}
