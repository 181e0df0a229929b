//! Shared snapshot encodings for the game assistant.
//!
//! Each analyzer consumes one of these snapshots: Go stones on an N×N grid,
//! Guandan and poker card codes, Mahjong tiles over the 34-symbol alphabet, and a
//! 90-cell Xiangqi board. Parsing and the caller-side limit checks live here
//! so the analyzers can assume well-formed input.

pub mod cards;
pub mod error;
pub mod go;
pub mod poker;
pub mod tiles;
pub mod xiangqi;

pub use error::CodeError;
