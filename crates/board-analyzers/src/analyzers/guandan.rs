use board_core::cards::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analyzer_trait::Analyzer;

const BOMB_SIZE: usize = 4;
const FOUR_KINGS: usize = 4;
const STRAIGHT_FLUSH_LEN: usize = 5;

/// Suit scan order for straight flushes.
const FLUSH_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BombKind {
    /// Four or more cards of one rank (or of one joker code).
    FourOfAKind,
    /// Both small and both big jokers.
    FourKings,
    /// Five same-suit cards with consecutive ranks.
    StraightFlush,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    pub kind: BombKind,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuandanAnalysis {
    /// Bomb cards first, grouped by bomb, then the rest in canonical order.
    pub sorted_hand: Vec<Card>,
    pub bombs: Vec<Bomb>,
}

pub struct GuandanAnalyzer;

impl Analyzer for GuandanAnalyzer {
    type Snapshot = [Card];
    type Report = GuandanAnalysis;

    fn name(&self) -> &'static str {
        "guandan"
    }

    fn analyze(&self, hand: &[Card]) -> GuandanAnalysis {
        analyze_hand(hand)
    }
}

/// Rank first, then H, D, C, S. Stable.
pub fn canonical_sort(hand: &[Card]) -> Vec<Card> {
    let mut sorted = hand.to_vec();
    sorted.sort();
    sorted
}

pub fn analyze_hand(hand: &[Card]) -> GuandanAnalysis {
    let canonical = canonical_sort(hand);
    let found = find_bombs(&canonical);
    let sorted_hand = structured_order(&canonical, &found);

    let bombs = found
        .into_iter()
        .map(|(kind, members)| Bomb {
            kind,
            cards: members.iter().map(|&i| canonical[i]).collect(),
        })
        .collect();

    GuandanAnalysis { sorted_hand, bombs }
}

/// Bombs as (kind, positions in the canonically sorted hand). A card position
/// may appear in several bombs.
fn find_bombs(canonical: &[Card]) -> Vec<(BombKind, Vec<usize>)> {
    let mut bombs = Vec::new();

    // N of a kind. Each joker code is its own bucket, so four kings are
    // reported once, by the rule below.
    let mut by_value: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for (i, card) in canonical.iter().enumerate() {
        by_value.entry(card.value()).or_default().push(i);
    }
    for members in by_value.into_values() {
        if members.len() >= BOMB_SIZE {
            bombs.push((BombKind::FourOfAKind, members));
        }
    }

    let jokers: Vec<usize> = (0..canonical.len())
        .filter(|&i| canonical[i].is_joker())
        .collect();
    if jokers.len() == FOUR_KINGS {
        bombs.push((BombKind::FourKings, jokers));
    }

    for suit in FLUSH_SUITS {
        let suited: Vec<usize> = (0..canonical.len())
            .filter(|&i| canonical[i].suit() == Some(suit))
            .collect();
        for window in suited.windows(STRAIGHT_FLUSH_LEN) {
            let sequential = window
                .windows(2)
                .all(|pair| canonical[pair[0]].value() + 1 == canonical[pair[1]].value());
            if sequential {
                bombs.push((BombKind::StraightFlush, window.to_vec()));
            }
        }
    }

    bombs
}

/// Each card instance is emitted once: the first bomb that lists it claims it.
fn structured_order(canonical: &[Card], bombs: &[(BombKind, Vec<usize>)]) -> Vec<Card> {
    let mut emitted = vec![false; canonical.len()];
    let mut out = Vec::with_capacity(canonical.len());

    for (_, members) in bombs {
        for &i in members {
            if !emitted[i] {
                emitted[i] = true;
                out.push(canonical[i]);
            }
        }
    }
    for (i, card) in canonical.iter().enumerate() {
        if !emitted[i] {
            out.push(*card);
        }
    }
    out
}
