//! Board and hand analyzers for the game assistant.
//!
//! Five independent analyzers, one per game: Go groups and territory,
//! Guandan bombs, Mahjong winning tiles, poker win odds and Xiangqi
//! single-ply move suggestions. Each is a pure function over a `board_core` snapshot.
//! The main entry point is `analyze_snapshot()`, which routes a tagged
//! snapshot to the matching analyzer.

pub mod analyzer_trait;
pub mod analyzers;
pub mod unified;

pub use unified::{Report, Snapshot};

/// Tag names for each analyzer.
pub const ANALYZER_TAGS: &[(&str, &str)] = &[
    ("go", "Go Groups & Territory"),
    ("guandan", "Guandan Bombs"),
    ("mahjong", "Mahjong Waiting Tiles"),
    ("poker", "Poker Odds"),
    ("xiangqi", "Xiangqi Best Move"),
];

/// Display title for an analyzer name, falling back to the name itself.
pub fn display_tag(name: &str) -> &str {
    ANALYZER_TAGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, tag)| *tag)
        .unwrap_or(name)
}

/// Analyze one snapshot. This is the main entry point used by callers.
pub fn analyze_snapshot(snapshot: &Snapshot) -> Report {
    unified::analyze(snapshot)
}
