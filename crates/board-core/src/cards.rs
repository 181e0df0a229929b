//! Guandan card codes: `7H`, `TS`, `AD`, plus the jokers `SJ` and `BJ`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

/// Two decks are in play, so any code appears at most twice.
pub const DECK_COPIES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    pub fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Tie-break among equal ranks: H, D, C, S.
    pub fn precedence(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// 0 for Two through 12 for Ace.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn code(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.code() == c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    SmallJoker,
    BigJoker,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    /// Ordering value: rank index, then small joker, then big joker.
    pub fn value(self) -> u8 {
        match self {
            Card::Standard { rank, .. } => rank.index(),
            Card::SmallJoker => 13,
            Card::BigJoker => 14,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(rank),
            _ => None,
        }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(suit),
            _ => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::SmallJoker | Card::BigJoker)
    }

    pub fn code(self) -> String {
        self.to_string()
    }
}

/// Canonical hand order: rank value, then suit precedence. Jokers carry no suit.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        let suit_key = |c: &Card| c.suit().map(Suit::precedence).unwrap_or(0);
        self.value()
            .cmp(&other.value())
            .then_with(|| suit_key(self).cmp(&suit_key(other)))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{}{}", rank.code(), suit.code()),
            Card::SmallJoker => f.write_str("SJ"),
            Card::BigJoker => f.write_str("BJ"),
        }
    }
}

impl FromStr for Card {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        match code.as_str() {
            "SJ" => return Ok(Card::SmallJoker),
            "BJ" => return Ok(Card::BigJoker),
            _ => {}
        }
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => match (Rank::from_code(r), Suit::from_code(su)) {
                (Some(rank), Some(suit)) => Ok(Card::Standard { rank, suit }),
                _ => Err(CodeError::UnknownCard(s.to_string())),
            },
            _ => Err(CodeError::UnknownCard(s.to_string())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = CodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parse a list of card codes separated by whitespace or commas.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CodeError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Enforce the two-deck limit across the hand and the cards already played.
pub fn validate_deck_limit(hand: &[Card], played: &[Card]) -> Result<(), CodeError> {
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in hand.iter().chain(played) {
        let count = counts.entry(*card).or_default();
        *count += 1;
        if *count > DECK_COPIES {
            return Err(CodeError::LimitExceeded {
                code: card.code(),
                count: *count,
                limit: DECK_COPIES,
            });
        }
    }
    Ok(())
}
