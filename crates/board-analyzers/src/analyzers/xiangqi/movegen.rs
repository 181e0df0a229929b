//! Pseudo-legal move generation with 1-ply capture scores.
//!
//! Checks, pins and the flying-general rule are not considered. Advisors and
//! elephants have no generator, so they never move.

use board_core::xiangqi::{index, row_col, Piece, PieceKind, Side, XiangqiBoard, FILES, RANKS};
use serde::{Deserialize, Serialize};

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Rows 0-4 are black's half; red has crossed the river once below row 5.
const RIVER_ROW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub piece: Piece,
    pub from: usize,
    pub to: usize,
    pub captured: Option<Piece>,
    pub score: i32,
}

/// All moves for `side`, best score first. Ties keep generation order
/// (board index, then direction).
pub fn generate_moves(board: &XiangqiBoard, side: Side) -> Vec<ScoredMove> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.side != side {
            continue;
        }
        match piece.kind {
            PieceKind::Rook => rook_moves(board, piece, from, &mut moves),
            PieceKind::Cannon => cannon_moves(board, piece, from, &mut moves),
            PieceKind::Knight => knight_moves(board, piece, from, &mut moves),
            PieceKind::Pawn => pawn_moves(board, piece, from, &mut moves),
            PieceKind::King => king_moves(board, piece, from, &mut moves),
            PieceKind::Advisor | PieceKind::Elephant => {}
        }
    }
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}

/// Value of the captured piece; a rook gives back a tenth of its own value.
fn capture_score(mover: Piece, target: Piece) -> i32 {
    match mover.kind {
        PieceKind::Rook => target.kind.value() - mover.kind.value() / 10,
        _ => target.kind.value(),
    }
}

fn step(from: usize, dr: i32, dc: i32) -> Option<(usize, usize)> {
    let (r, c) = row_col(from);
    let nr = r as i32 + dr;
    let nc = c as i32 + dc;
    let on_board = (0..RANKS as i32).contains(&nr) && (0..FILES as i32).contains(&nc);
    on_board.then_some((nr as usize, nc as usize))
}

/// Quiet move onto an empty cell or capture of an enemy piece; own pieces block.
fn push_if_open(
    board: &XiangqiBoard,
    piece: Piece,
    from: usize,
    to: usize,
    moves: &mut Vec<ScoredMove>,
) {
    match board.get(to) {
        None => moves.push(ScoredMove {
            piece,
            from,
            to,
            captured: None,
            score: 0,
        }),
        Some(target) if target.side != piece.side => moves.push(ScoredMove {
            piece,
            from,
            to,
            captured: Some(target),
            score: capture_score(piece, target),
        }),
        Some(_) => {}
    }
}

fn rook_moves(board: &XiangqiBoard, piece: Piece, from: usize, moves: &mut Vec<ScoredMove>) {
    for (dr, dc) in ORTHOGONAL {
        let mut distance = 1;
        while let Some((r, c)) = step(from, dr * distance, dc * distance) {
            let to = index(r, c);
            push_if_open(board, piece, from, to, moves);
            if board.get(to).is_some() {
                break;
            }
            distance += 1;
        }
    }
}

/// Slides like a rook when quiet; captures only by jumping exactly one screen.
fn cannon_moves(board: &XiangqiBoard, piece: Piece, from: usize, moves: &mut Vec<ScoredMove>) {
    for (dr, dc) in ORTHOGONAL {
        let mut distance = 1;
        let mut screened = false;
        while let Some((r, c)) = step(from, dr * distance, dc * distance) {
            let to = index(r, c);
            match (screened, board.get(to)) {
                (false, None) => push_if_open(board, piece, from, to, moves),
                (false, Some(_)) => screened = true,
                (true, None) => {}
                (true, Some(target)) => {
                    if target.side != piece.side {
                        push_if_open(board, piece, from, to, moves);
                    }
                    break;
                }
            }
            distance += 1;
        }
    }
}

fn knight_moves(board: &XiangqiBoard, piece: Piece, from: usize, moves: &mut Vec<ScoredMove>) {
    for (dr, dc) in KNIGHT_JUMPS {
        let Some((r, c)) = step(from, dr, dc) else {
            continue;
        };
        // The leg is the orthogonal cell next to the knight along the long axis.
        let (leg_dr, leg_dc) = if dr.abs() == 2 {
            (dr.signum(), 0)
        } else {
            (0, dc.signum())
        };
        let leg_blocked = step(from, leg_dr, leg_dc)
            .map(|(lr, lc)| board.at(lr, lc).is_some())
            .unwrap_or(true);
        if !leg_blocked {
            push_if_open(board, piece, from, index(r, c), moves);
        }
    }
}

/// One step forward; sideways steps too once across the river.
fn pawn_moves(board: &XiangqiBoard, piece: Piece, from: usize, moves: &mut Vec<ScoredMove>) {
    let (row, _) = row_col(from);
    let (forward, crossed) = match piece.side {
        Side::Red => (-1, row < RIVER_ROW),
        Side::Black => (1, row >= RIVER_ROW),
    };
    if let Some((r, c)) = step(from, forward, 0) {
        push_if_open(board, piece, from, index(r, c), moves);
    }
    if crossed {
        for dc in [-1, 1] {
            if let Some((r, c)) = step(from, 0, dc) {
                push_if_open(board, piece, from, index(r, c), moves);
            }
        }
    }
}

fn in_palace(side: Side, row: usize, col: usize) -> bool {
    let rows = match side {
        Side::Red => 7..=9,
        Side::Black => 0..=2,
    };
    rows.contains(&row) && (3..=5).contains(&col)
}

fn king_moves(board: &XiangqiBoard, piece: Piece, from: usize, moves: &mut Vec<ScoredMove>) {
    for (dr, dc) in ORTHOGONAL {
        if let Some((r, c)) = step(from, dr, dc) {
            if in_palace(piece.side, r, c) {
                push_if_open(board, piece, from, index(r, c), moves);
            }
        }
    }
}
