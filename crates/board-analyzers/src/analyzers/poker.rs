//! Hold'em decision heuristic: a rough win estimate and a fold/call/raise mix.
//!
//! Each side gets a score from card ranks alone. The score difference is
//! mapped to a win percentage, and the percentage picks one of four fixed
//! action mixes. There is no hand evaluation or simulation.

use board_core::cards::Card;
use board_core::poker::{rank_power, PokerTable};
use serde::{Deserialize, Serialize};

use crate::analyzer_trait::Analyzer;

const POCKET_PAIR_BONUS: f64 = 20.0;
const SUITED_BONUS: f64 = 5.0;
/// Per community card matching a rank the player holds.
const BOARD_HIT_BONUS: f64 = 15.0;
/// Opponent score when none of their cards are known.
const UNKNOWN_OPPONENT_SCORE: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokerAction {
    Fold,
    Call,
    Raise,
}

/// Percentages; all zero until both hole cards are known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokerAnalysis {
    pub win: u8,
    pub fold: u8,
    pub call: u8,
    pub raise: u8,
    /// The most weighted action.
    pub action: Option<PokerAction>,
}

pub struct PokerAnalyzer;

impl Analyzer for PokerAnalyzer {
    type Snapshot = PokerTable;
    type Report = PokerAnalysis;

    fn name(&self) -> &'static str {
        "poker"
    }

    fn analyze(&self, table: &PokerTable) -> PokerAnalysis {
        analyze_table(table)
    }
}

pub fn analyze_table(table: &PokerTable) -> PokerAnalysis {
    let [first, second, ..] = table.hole.as_slice() else {
        return PokerAnalysis::default();
    };
    let win = win_probability(table, *first, *second);
    let (raise, call, fold) = action_mix(win);
    let action = [
        (PokerAction::Raise, raise),
        (PokerAction::Call, call),
        (PokerAction::Fold, fold),
    ]
    .into_iter()
    .max_by_key(|(_, weight)| *weight)
    .map(|(action, _)| action);

    PokerAnalysis {
        win: win.round() as u8,
        fold,
        call,
        raise,
        action,
    }
}

fn power(card: Card) -> u8 {
    rank_power(card).unwrap_or(0)
}

/// Win chance in percent, clamped to 0..=100.
fn win_probability(table: &PokerTable, first: Card, second: Card) -> f64 {
    let (h1, h2) = (power(first), power(second));
    let mut mine = f64::from(h1) + f64::from(h2);
    if h1 == h2 {
        mine += POCKET_PAIR_BONUS;
    }
    if first.suit() == second.suit() {
        mine += SUITED_BONUS;
    }

    let seen: Vec<u8> = table.opponent.iter().map(|&c| power(c)).collect();
    let mut theirs = if seen.is_empty() {
        UNKNOWN_OPPONENT_SCORE
    } else {
        // The average card counts twice, like a two-card hand.
        let sum: f64 = seen.iter().map(|&p| f64::from(p)).sum();
        let mut score = sum / seen.len() as f64 * 2.0;
        let mut ranks = seen.clone();
        ranks.sort_unstable();
        ranks.dedup();
        if ranks.len() < seen.len() {
            score += POCKET_PAIR_BONUS;
        }
        score
    };

    for &card in &table.community {
        let r = power(card);
        if r == h1 || r == h2 {
            mine += BOARD_HIT_BONUS;
        }
        if seen.contains(&r) {
            theirs += BOARD_HIT_BONUS;
        }
    }

    (50.0 + (mine - theirs) * 2.0).clamp(0.0, 100.0)
}

/// (raise, call, fold) for a win chance. Band edges are exclusive.
fn action_mix(win: f64) -> (u8, u8, u8) {
    if win > 70.0 {
        (80, 20, 0)
    } else if win > 50.0 {
        (40, 55, 5)
    } else if win > 30.0 {
        (10, 60, 30)
    } else {
        (0, 10, 90)
    }
}
