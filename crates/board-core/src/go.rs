//! Go board snapshot: stones, points and an N×N grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

pub const DEFAULT_BOARD_SIZE: usize = 19;

// Go coordinates skip the letter I.
const COLUMN_LABELS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Serialized as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Numeric snapshot code: 0 empty, 1 black, 2 white.
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CodeError> {
        match code {
            0 => Ok(Stone::Empty),
            1 => Ok(Stone::Black),
            2 => Ok(Stone::White),
            other => Err(CodeError::UnknownStone(other.to_string())),
        }
    }

    /// Text symbol: `.`/`+` empty, `X`/`B` black, `O`/`W` white.
    pub fn from_symbol(c: char) -> Result<Self, CodeError> {
        match c {
            '.' | '+' => Ok(Stone::Empty),
            'X' | 'x' | 'B' | 'b' => Ok(Stone::Black),
            'O' | 'o' | 'W' | 'w' => Ok(Stone::White),
            other => Err(CodeError::UnknownStone(other.to_string())),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Human coordinate such as `D4`, with rows counted from the bottom edge.
    /// Boards wider than the label alphabet fall back to `(row,col)`.
    pub fn label(&self, size: usize) -> String {
        match COLUMN_LABELS.get(self.col) {
            Some(&letter) if self.row < size => {
                format!("{}{}", letter as char, size - self.row)
            }
            _ => format!("({},{})", self.row, self.col),
        }
    }
}

/// Square grid of stones, row-major. Always N×N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Stone>>", into = "Vec<Vec<Stone>>")]
pub struct GoBoard {
    size: usize,
    cells: Vec<Vec<Stone>>,
}

impl GoBoard {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Stone::Empty; size]; size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Stone>>) -> Result<Self, CodeError> {
        let size = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(CodeError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
        }
        Ok(Self { size, cells: rows })
    }

    /// Build from the numeric encoding used by snapshot JSON (0/1/2 per cell).
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, CodeError> {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&c| Stone::from_code(c)).collect())
            .collect::<Result<Vec<Vec<Stone>>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, p: Point) -> Stone {
        self.cells[p.row][p.col]
    }

    pub fn set(&mut self, p: Point, stone: Stone) {
        self.cells[p.row][p.col] = stone;
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|s| s.is_empty())
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Point::new(row, col)))
    }

    /// On-board 4-neighbours, in the order below, above, right, left.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> {
        let size = self.size;
        let mut out = Vec::with_capacity(4);
        if p.row + 1 < size {
            out.push(Point::new(p.row + 1, p.col));
        }
        if p.row > 0 {
            out.push(Point::new(p.row - 1, p.col));
        }
        if p.col + 1 < size {
            out.push(Point::new(p.row, p.col + 1));
        }
        if p.col > 0 {
            out.push(Point::new(p.row, p.col - 1));
        }
        out.into_iter()
    }
}

impl TryFrom<u8> for Stone {
    type Error = CodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Stone> for u8 {
    fn from(stone: Stone) -> Self {
        stone.code()
    }
}

impl TryFrom<Vec<Vec<Stone>>> for GoBoard {
    type Error = CodeError;

    fn try_from(rows: Vec<Vec<Stone>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<GoBoard> for Vec<Vec<Stone>> {
    fn from(board: GoBoard) -> Self {
        board.cells
    }
}

/// Parses one row per line; blank lines and spaces inside a row are ignored.
impl FromStr for GoBoard {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Stone::from_symbol)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl fmt::Display for GoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|s| s.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_board() {
        let board: GoBoard = "X.O\n...\n.X.\n".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(Point::new(0, 0)), Stone::Black);
        assert_eq!(board.get(Point::new(0, 2)), Stone::White);
        assert_eq!(board.get(Point::new(2, 1)), Stone::Black);
        assert_eq!(board.to_string(), "X.O\n...\n.X.\n");
    }

    #[test]
    fn test_rejects_non_square() {
        let err = "X.O\n..\n...".parse::<GoBoard>().unwrap_err();
        assert_eq!(err, CodeError::NotSquare { row: 1, len: 2, size: 3 });
    }

    #[test]
    fn test_from_codes_rejects_unknown_stone() {
        let err = GoBoard::from_codes(&[vec![0, 3], vec![0, 0]]).unwrap_err();
        assert_eq!(err, CodeError::UnknownStone("3".into()));
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let board = GoBoard::new(19);
        let n: Vec<Point> = board.neighbors(Point::new(0, 0)).collect();
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(board.neighbors(Point::new(9, 9)).count(), 4);
    }

    #[test]
    fn test_point_label_skips_i() {
        assert_eq!(Point::new(0, 0).label(19), "A19");
        assert_eq!(Point::new(18, 8).label(19), "J1");
        assert_eq!(Point::new(15, 3).label(19), "D4");
    }

    #[test]
    fn test_serde_round_trip_keeps_square_invariant() {
        let board: GoBoard = serde_json::from_str("[[1,0],[0,2]]").unwrap();
        assert_eq!(board.get(Point::new(1, 1)), Stone::White);
        assert_eq!(serde_json::to_string(&board).unwrap(), "[[1,0],[0,2]]");
        assert!(serde_json::from_str::<GoBoard>("[[1],[0,2]]").is_err());
        assert!(serde_json::from_str::<GoBoard>("[[3]]").is_err());
    }
}
