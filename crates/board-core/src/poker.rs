//! Hold'em table snapshot: own hole cards, the board and any opponent cards seen.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::CodeError;

pub const HOLE_CARDS: usize = 2;
pub const COMMUNITY_CARDS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokerTable {
    pub hole: Vec<Card>,
    #[serde(default)]
    pub community: Vec<Card>,
    /// Opponent cards revealed so far. Any number may be tracked.
    #[serde(default)]
    pub opponent: Vec<Card>,
}

impl PokerTable {
    /// Build a validated table.
    pub fn new(hole: Vec<Card>, community: Vec<Card>, opponent: Vec<Card>) -> Result<Self, CodeError> {
        let table = Self {
            hole,
            community,
            opponent,
        };
        table.validate()?;
        Ok(table)
    }

    /// One 52-card deck: no jokers, no card seen twice, at most two hole
    /// cards and five community cards.
    pub fn validate(&self) -> Result<(), CodeError> {
        check_zone("hole", &self.hole, HOLE_CARDS)?;
        check_zone("community", &self.community, COMMUNITY_CARDS)?;

        let mut seen = HashSet::new();
        for card in self.cards() {
            if card.is_joker() {
                return Err(CodeError::JokerNotAllowed(card.code()));
            }
            if !seen.insert(card) {
                return Err(CodeError::LimitExceeded {
                    code: card.code(),
                    count: 2,
                    limit: 1,
                });
            }
        }
        Ok(())
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hole
            .iter()
            .chain(&self.community)
            .chain(&self.opponent)
            .copied()
    }
}

fn check_zone(zone: &'static str, cards: &[Card], limit: usize) -> Result<(), CodeError> {
    if cards.len() > limit {
        return Err(CodeError::TooManyCards {
            zone,
            count: cards.len(),
            limit,
        });
    }
    Ok(())
}

/// Rank strength with the ace high: 2 for a deuce up to 14 for an ace.
pub fn rank_power(card: Card) -> Option<u8> {
    card.rank().map(|r| r.index() + 2)
}
