use board_core::tiles::{
    tile_counts, MahjongRule, Tile, TileSuit, MAX_COPIES, READY_HAND_SIZE, TILE_KINDS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analyzer_trait::Analyzer;

type Counts = [u8; TILE_KINDS];

const WINNING_SIZE: u32 = 14;
const SEVEN_PAIRS: usize = 7;
const SETS_IN_HAND: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanPattern {
    /// Triplet of any dragon.
    DragonPung,
    /// Tianjin: winning on the five of characters.
    ZhuoWu,
    /// Tianjin: one numeric suit plus honors.
    HunYiSe,
    /// Tianjin: one numeric suit, no honors.
    QingYiSe,
    /// Nothing else matched.
    PingHu,
}

impl FanPattern {
    pub fn points(self) -> u32 {
        match self {
            FanPattern::DragonPung => 1,
            FanPattern::ZhuoWu => 1,
            FanPattern::HunYiSe => 3,
            FanPattern::QingYiSe => 6,
            FanPattern::PingHu => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FanPattern::DragonPung => "Dragon Pung",
            FanPattern::ZhuoWu => "Zhuo Wu (5 Wan)",
            FanPattern::HunYiSe => "Hun Yi Se",
            FanPattern::QingYiSe => "Qing Yi Se",
            FanPattern::PingHu => "Ping Hu",
        }
    }
}

impl fmt::Display for FanPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanScore {
    pub points: u32,
    pub patterns: Vec<FanPattern>,
}

impl FanScore {
    pub fn label(&self) -> String {
        self.patterns
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A tile that completes the hand, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingTile {
    pub tile: Tile,
    pub fan: u32,
    pub label: String,
    pub patterns: Vec<FanPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MahjongAnalysis {
    pub sorted_hand: Vec<Tile>,
    /// Empty unless the hand holds exactly 13 tiles.
    pub waiting_results: Vec<WaitingTile>,
}

/// Winning-tile search for a ready hand, scored under one rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MahjongAnalyzer {
    pub rule: MahjongRule,
}

impl MahjongAnalyzer {
    pub fn new(rule: MahjongRule) -> Self {
        Self { rule }
    }
}

impl Analyzer for MahjongAnalyzer {
    type Snapshot = [Tile];
    type Report = MahjongAnalysis;

    fn name(&self) -> &'static str {
        "mahjong"
    }

    fn analyze(&self, hand: &[Tile]) -> MahjongAnalysis {
        analyze_hand(hand, self.rule)
    }
}

pub fn analyze_hand(hand: &[Tile], rule: MahjongRule) -> MahjongAnalysis {
    let mut sorted_hand = hand.to_vec();
    sorted_hand.sort();

    let mut waiting_results = Vec::new();
    if hand.len() == READY_HAND_SIZE {
        let mut counts = tile_counts(hand);
        for tile in Tile::all() {
            let i = tile.index();
            if counts[i] as usize >= MAX_COPIES {
                continue;
            }
            counts[i] += 1;
            if is_hu(&counts) {
                let score = calculate_fan(&counts, tile, rule);
                waiting_results.push(WaitingTile {
                    tile,
                    fan: score.points,
                    label: score.label(),
                    patterns: score.patterns,
                });
            }
            counts[i] -= 1;
        }
    }

    MahjongAnalysis {
        sorted_hand,
        waiting_results,
    }
}

/// Complete 14-tile shape: seven pairs, or one pair plus four sets.
///
/// The seven-pairs branch only checks that at least seven kinds hold two or
/// more tiles in a 14-tile hand. A kind held four times counts as one pair.
pub fn is_hu(counts: &Counts) -> bool {
    let pairs = counts.iter().filter(|&&c| c >= 2).count();
    let total: u32 = counts.iter().map(|&c| c as u32).sum();
    if total == WINNING_SIZE && pairs >= SEVEN_PAIRS {
        return true;
    }

    (0..TILE_KINDS).filter(|&i| counts[i] >= 2).any(|i| {
        let mut rest = *counts;
        rest[i] -= 2;
        remove_sets(&mut rest, 0)
    })
}

/// Strip triplets and runs from the lowest remaining kind until four sets are gone.
fn remove_sets(counts: &mut Counts, depth: usize) -> bool {
    if depth == SETS_IN_HAND {
        return true;
    }
    let Some(first) = counts.iter().position(|&c| c > 0) else {
        return true;
    };

    if counts[first] >= 3 {
        counts[first] -= 3;
        if remove_sets(counts, depth + 1) {
            return true;
        }
        counts[first] += 3;
    }

    // Runs stay inside one numeric suit; honors never form runs.
    let starts_run = Tile::from_index(first)
        .and_then(Tile::number)
        .is_some_and(|n| n <= 7);
    if starts_run && counts[first + 1] > 0 && counts[first + 2] > 0 {
        counts[first] -= 1;
        counts[first + 1] -= 1;
        counts[first + 2] -= 1;
        if remove_sets(counts, depth + 1) {
            return true;
        }
        counts[first] += 1;
        counts[first + 1] += 1;
        counts[first + 2] += 1;
    }

    false
}

/// Score a completed hand. `counts` already includes the winning tile.
pub fn calculate_fan(counts: &Counts, win_tile: Tile, rule: MahjongRule) -> FanScore {
    let mut patterns = Vec::new();

    let held = || Tile::all().filter(|t| counts[t.index()] > 0);

    if held().any(|t| t.is_dragon() && counts[t.index()] >= 3) {
        patterns.push(FanPattern::DragonPung);
    }

    if rule == MahjongRule::Tianjin {
        if win_tile.suit() == Some(TileSuit::Characters) && win_tile.number() == Some(5) {
            patterns.push(FanPattern::ZhuoWu);
        }

        // Tiles come in index order, so one suit forms one run.
        let mut suits: Vec<TileSuit> = held().filter_map(Tile::suit).collect();
        suits.dedup();
        let has_honors = held().any(Tile::is_honor);
        if suits.len() == 1 {
            patterns.push(if has_honors {
                FanPattern::HunYiSe
            } else {
                FanPattern::QingYiSe
            });
        }
    }

    // Sichuan, Riichi and Taiwan have no rule-specific patterns yet.
    if patterns.is_empty() {
        patterns.push(FanPattern::PingHu);
    }

    FanScore {
        points: patterns.iter().map(|p| p.points()).sum(),
        patterns,
    }
}
