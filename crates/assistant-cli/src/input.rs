//! Turning raw caller input into validated snapshots.
//!
//! Every limit the analyzers assume (deck copies, tile copies, the 13-tile
//! hand, poker zones, piece counts) is checked here, before anything reaches them.

use board_analyzers::Snapshot;
use board_core::cards::{parse_cards, validate_deck_limit};
use board_core::go::GoBoard;
use board_core::poker::PokerTable;
use board_core::tiles::{parse_tiles, validate_tiles, MahjongRule};
use board_core::xiangqi::XiangqiBoard;

use crate::error::AssistantError;

/// Go input is either text rows of `.`/`X`/`O` or a JSON array of 0/1/2 rows.
/// Blank input yields an empty board of `default_size`.
pub fn go_snapshot(text: &str, default_size: usize) -> Result<Snapshot, AssistantError> {
    let trimmed = text.trim();
    let board = if trimmed.is_empty() {
        GoBoard::new(default_size)
    } else if trimmed.starts_with('[') {
        let rows: Vec<Vec<u8>> = serde_json::from_str(trimmed)?;
        if rows.is_empty() {
            GoBoard::new(default_size)
        } else {
            GoBoard::from_codes(&rows)?
        }
    } else {
        trimmed.parse()?
    };
    Ok(Snapshot::Go { board })
}

pub fn guandan_snapshot(text: &str, played: Option<&str>) -> Result<Snapshot, AssistantError> {
    let hand = parse_cards(text)?;
    let played = played.map(parse_cards).transpose()?.unwrap_or_default();
    validate_deck_limit(&hand, &played)?;
    Ok(Snapshot::Guandan { hand })
}

pub fn mahjong_snapshot(
    text: &str,
    discards: Option<&str>,
    rule: MahjongRule,
) -> Result<Snapshot, AssistantError> {
    let hand = parse_tiles(text)?;
    let discards = discards.map(parse_tiles).transpose()?.unwrap_or_default();
    validate_tiles(&hand, &discards)?;
    Ok(Snapshot::Mahjong { hand, rule })
}

/// Hole cards come from the main input; the board and opponent cards from flags.
pub fn poker_snapshot(
    hole: &str,
    community: Option<&str>,
    opponent: Option<&str>,
) -> Result<Snapshot, AssistantError> {
    let community = community.map(parse_cards).transpose()?.unwrap_or_default();
    let opponent = opponent.map(parse_cards).transpose()?.unwrap_or_default();
    let table = PokerTable::new(parse_cards(hole)?, community, opponent)?;
    Ok(Snapshot::Poker { table })
}

pub fn xiangqi_snapshot(text: &str) -> Result<Snapshot, AssistantError> {
    let board = XiangqiBoard::from_fen(text.trim())?;
    board.validate_piece_counts()?;
    Ok(Snapshot::Xiangqi { board })
}
