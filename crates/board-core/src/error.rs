//! Errors raised while decoding snapshot codes at the caller boundary

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Unknown stone code: {0}")]
    UnknownStone(String),

    #[error("Unknown card code: {0}")]
    UnknownCard(String),

    #[error("Unknown tile code: {0}")]
    UnknownTile(String),

    #[error("Unknown piece code: {0}")]
    UnknownPiece(char),

    #[error("Unknown Mahjong rule: {0}")]
    UnknownRule(String),

    #[error("Board is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("Invalid FEN: {0}")]
    Fen(String),

    #[error("Too many copies of {code}: {count} exceeds the limit of {limit}")]
    LimitExceeded {
        code: String,
        count: usize,
        limit: usize,
    },

    #[error("Hand holds {0} tiles, at most 13 are allowed")]
    HandTooLarge(usize),

    #[error("Too many {zone} cards: {count} exceeds the limit of {limit}")]
    TooManyCards {
        zone: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("Jokers are not part of a poker deck: {0}")]
    JokerNotAllowed(String),
}
