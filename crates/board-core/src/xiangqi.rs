//! Xiangqi board: 90 cells, 9 files by 10 ranks, row 0 is black's back rank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

pub const FILES: usize = 9;
pub const RANKS: usize = 10;
pub const CELLS: usize = FILES * RANKS;

/// Board field of the standard opening position.
pub const INITIAL_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Advisor,
    Elephant,
    Knight,
    Rook,
    Cannon,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::King,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Cannon,
        PieceKind::Pawn,
    ];

    /// Uppercase letter code. Lowercase marks a black piece.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Advisor => 'A',
            PieceKind::Elephant => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Cannon => 'C',
            PieceKind::Pawn => 'P',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'A' => Some(PieceKind::Advisor),
            'B' | 'E' => Some(PieceKind::Elephant),
            'N' | 'H' => Some(PieceKind::Knight),
            'R' => Some(PieceKind::Rook),
            'C' => Some(PieceKind::Cannon),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Material value used for capture scoring.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::King => 10_000,
            PieceKind::Advisor => 20,
            PieceKind::Elephant => 20,
            PieceKind::Knight => 40,
            PieceKind::Rook => 90,
            PieceKind::Cannon => 45,
            PieceKind::Pawn => 10,
        }
    }

    /// Number of pieces of this kind each side starts with.
    pub fn max_per_side(self) -> usize {
        match self {
            PieceKind::King => 1,
            PieceKind::Pawn => 5,
            _ => 2,
        }
    }

    /// Knights, elephants and advisors are notated by destination file.
    pub fn moves_diagonally(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Elephant | PieceKind::Advisor
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub fn code(self) -> char {
        match self.side {
            Side::Red => self.kind.letter(),
            Side::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_code(c: char) -> Result<Self, CodeError> {
        let kind = PieceKind::from_letter(c).ok_or(CodeError::UnknownPiece(c))?;
        let side = if c.is_ascii_uppercase() {
            Side::Red
        } else {
            Side::Black
        };
        Ok(Self { side, kind })
    }

    /// Traditional character for this piece.
    pub fn glyph(self) -> &'static str {
        match (self.side, self.kind) {
            (_, PieceKind::Rook) => "車",
            (_, PieceKind::Knight) => "馬",
            (_, PieceKind::Cannon) => "炮",
            (Side::Red, PieceKind::King) => "帥",
            (Side::Red, PieceKind::Advisor) => "仕",
            (Side::Red, PieceKind::Elephant) => "相",
            (Side::Red, PieceKind::Pawn) => "兵",
            (Side::Black, PieceKind::King) => "將",
            (Side::Black, PieceKind::Advisor) => "士",
            (Side::Black, PieceKind::Elephant) => "象",
            (Side::Black, PieceKind::Pawn) => "卒",
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = CodeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Piece::from_code(c)
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.code()
    }
}

pub fn index(row: usize, col: usize) -> usize {
    row * FILES + col
}

pub fn row_col(idx: usize) -> (usize, usize) {
    (idx / FILES, idx % FILES)
}

/// Flat row-major board. Serialized as its FEN board field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct XiangqiBoard {
    cells: [Option<Piece>; CELLS],
}

impl XiangqiBoard {
    pub fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    pub fn initial() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; FILES] = [
            Rook, Knight, Elephant, Advisor, King, Advisor, Elephant, Knight, Rook,
        ];

        let mut board = Self::empty();
        for (side, back, cannons, pawns) in [(Side::Black, 0, 2, 3), (Side::Red, 9, 7, 6)] {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.cells[index(back, col)] = Some(Piece::new(side, kind));
            }
            for col in [1, 7] {
                board.cells[index(cannons, col)] = Some(Piece::new(side, Cannon));
            }
            for col in (0..FILES).step_by(2) {
                board.cells[index(pawns, col)] = Some(Piece::new(side, Pawn));
            }
        }
        board
    }

    pub fn get(&self, idx: usize) -> Option<Piece> {
        self.cells[idx]
    }

    pub fn at(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[index(row, col)]
    }

    pub fn set(&mut self, idx: usize, piece: Option<Piece>) {
        self.cells[idx] = piece;
    }

    /// Occupied cells in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i, p)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == Some(piece)).count()
    }

    /// Place a piece the way the board editor does: refuse once the side
    /// already has its full complement of that kind.
    pub fn place(&mut self, idx: usize, piece: Piece) -> Result<(), CodeError> {
        let count = self.count(piece) + 1;
        let limit = piece.kind.max_per_side();
        if self.cells[idx] != Some(piece) && count > limit {
            return Err(CodeError::LimitExceeded {
                code: piece.code().to_string(),
                count,
                limit,
            });
        }
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Check every kind against its per-side limit.
    pub fn validate_piece_counts(&self) -> Result<(), CodeError> {
        for side in [Side::Red, Side::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(side, kind);
                let count = self.count(piece);
                if count > kind.max_per_side() {
                    return Err(CodeError::LimitExceeded {
                        code: piece.code().to_string(),
                        count,
                        limit: kind.max_per_side(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn from_fen(fen: &str) -> Result<Self, CodeError> {
        // Only the board field matters; side to move and counters are ignored.
        let field = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| CodeError::Fen("empty".into()))?;
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != RANKS {
            return Err(CodeError::Fen(format!(
                "expected {RANKS} ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    if col >= FILES {
                        return Err(CodeError::Fen(format!("rank {row} overflows")));
                    }
                    board.cells[index(row, col)] = Some(Piece::from_code(c)?);
                    col += 1;
                }
            }
            if col != FILES {
                return Err(CodeError::Fen(format!(
                    "rank {row} covers {col} files, expected {FILES}"
                )));
            }
        }
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in 0..RANKS {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for col in 0..FILES {
                match self.at(row, col) {
                    Some(piece) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(piece.code());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }
}

impl Default for XiangqiBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for XiangqiBoard {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl TryFrom<String> for XiangqiBoard {
    type Error = CodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_fen(&s)
    }
}

impl From<XiangqiBoard> for String {
    fn from(board: XiangqiBoard) -> Self {
        board.to_fen()
    }
}

impl fmt::Display for XiangqiBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl fmt::Debug for XiangqiBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XiangqiBoard({})", self.to_fen())
    }
}
