//! Mahjong tiles over the fixed 34-symbol alphabet, and the scoring rule sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

pub const TILE_KINDS: usize = 34;
pub const MAX_COPIES: usize = 4;
pub const READY_HAND_SIZE: usize = 13;

/// Suits first (characters, dots, bamboo), then winds E S W N and dragons P F C.
#[rustfmt::skip]
pub const TILE_CODES: [&str; TILE_KINDS] = [
    "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m",
    "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p",
    "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s",
    "E", "S", "W", "N", "P", "F", "C",
];

/// Index of the first honor tile.
pub const HONOR_START: usize = 27;
/// Index of the first dragon tile (white, green, red).
pub const DRAGON_START: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSuit {
    Characters,
    Dots,
    Bamboo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tile(u8);

impl Tile {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TILE_KINDS).then_some(Tile(index as u8))
    }

    pub fn all() -> impl Iterator<Item = Tile> {
        (0..TILE_KINDS as u8).map(Tile)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn code(self) -> &'static str {
        TILE_CODES[self.index()]
    }

    pub fn suit(self) -> Option<TileSuit> {
        match self.index() / 9 {
            0 => Some(TileSuit::Characters),
            1 => Some(TileSuit::Dots),
            2 => Some(TileSuit::Bamboo),
            _ => None,
        }
    }

    /// Face value 1..=9 for suited tiles.
    pub fn number(self) -> Option<u8> {
        self.suit().map(|_| self.0 % 9 + 1)
    }

    pub fn is_honor(self) -> bool {
        self.index() >= HONOR_START
    }

    pub fn is_dragon(self) -> bool {
        self.index() >= DRAGON_START
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Tile {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        TILE_CODES
            .iter()
            .position(|&c| c == code)
            .map(|i| Tile(i as u8))
            .ok_or_else(|| CodeError::UnknownTile(s.to_string()))
    }
}

impl TryFrom<String> for Tile {
    type Error = CodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.code().to_string()
    }
}

/// Regional rule set used when scoring a winning hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MahjongRule {
    #[default]
    National,
    Tianjin,
    Sichuan,
    Riichi,
    Taiwan,
}

impl MahjongRule {
    pub const ALL: [MahjongRule; 5] = [
        MahjongRule::National,
        MahjongRule::Tianjin,
        MahjongRule::Sichuan,
        MahjongRule::Riichi,
        MahjongRule::Taiwan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MahjongRule::National => "National",
            MahjongRule::Tianjin => "Tianjin",
            MahjongRule::Sichuan => "Sichuan",
            MahjongRule::Riichi => "Riichi",
            MahjongRule::Taiwan => "Taiwan",
        }
    }
}

impl fmt::Display for MahjongRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MahjongRule {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MahjongRule::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodeError::UnknownRule(s.to_string()))
    }
}

/// Occupancy vector indexed by tile alphabet position.
pub fn tile_counts(tiles: &[Tile]) -> [u8; TILE_KINDS] {
    let mut counts = [0u8; TILE_KINDS];
    for tile in tiles {
        counts[tile.index()] += 1;
    }
    counts
}

/// Parse a list of tile codes separated by whitespace or commas.
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>, CodeError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Hand size cap plus the four-copy limit across hand and discards.
pub fn validate_tiles(hand: &[Tile], discards: &[Tile]) -> Result<(), CodeError> {
    if hand.len() > READY_HAND_SIZE {
        return Err(CodeError::HandTooLarge(hand.len()));
    }
    let mut counts = [0usize; TILE_KINDS];
    for tile in hand.iter().chain(discards) {
        counts[tile.index()] += 1;
        if counts[tile.index()] > MAX_COPIES {
            return Err(CodeError::LimitExceeded {
                code: tile.code().to_string(),
                count: counts[tile.index()],
                limit: MAX_COPIES,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_layout() {
        let five_wan: Tile = "5m".parse().unwrap();
        assert_eq!(five_wan.index(), 4);
        assert_eq!(five_wan.number(), Some(5));
        assert_eq!("1p".parse::<Tile>().unwrap().suit(), Some(TileSuit::Dots));
        assert_eq!("9s".parse::<Tile>().unwrap().index(), 26);

        let east: Tile = "E".parse().unwrap();
        assert!(east.is_honor());
        assert!(!east.is_dragon());
        assert_eq!(east.suit(), None);
        assert!("C".parse::<Tile>().unwrap().is_dragon());
        assert!("0m".parse::<Tile>().is_err());
    }

    #[test]
    fn test_rule_parse_is_case_insensitive() {
        assert_eq!("tianjin".parse::<MahjongRule>().unwrap(), MahjongRule::Tianjin);
        assert_eq!(" RIICHI ".parse::<MahjongRule>().unwrap(), MahjongRule::Riichi);
        assert!("hongkong".parse::<MahjongRule>().is_err());
    }

    #[test]
    fn test_validate_tiles() {
        let hand = parse_tiles("1m 1m 1m 1m").unwrap();
        assert!(validate_tiles(&hand, &[]).is_ok());
        let discards = parse_tiles("1m").unwrap();
        assert!(matches!(
            validate_tiles(&hand, &discards),
            Err(CodeError::LimitExceeded { count: 5, .. })
        ));

        let big = parse_tiles("1m 2m 3m 4m 5m 6m 7m 8m 9m 1p 2p 3p 4p 5p").unwrap();
        assert_eq!(validate_tiles(&big, &[]), Err(CodeError::HandTooLarge(14)));
    }
}
