//! Single-ply best-move suggestion for red.

pub mod movegen;
pub mod notation;

use board_core::xiangqi::{Side, XiangqiBoard};
use serde::{Deserialize, Serialize};

use crate::analyzer_trait::Analyzer;

pub use movegen::{generate_moves, ScoredMove};

/// Runner-up candidates reported after the chosen move.
const FUTURE_STEPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum XiangqiVerdict {
    Move {
        best_move: String,
        from: usize,
        to: usize,
        score: i32,
        reasoning: String,
        /// Next-ranked candidates in notation.
        future_steps: Vec<String>,
    },
    /// Red has no move at all. `future_steps` is always empty.
    Resign { future_steps: Vec<String> },
}

impl XiangqiVerdict {
    pub fn resign() -> Self {
        XiangqiVerdict::Resign {
            future_steps: Vec::new(),
        }
    }

    pub fn best_move(&self) -> &str {
        match self {
            XiangqiVerdict::Move { best_move, .. } => best_move,
            XiangqiVerdict::Resign { .. } => "Resign",
        }
    }

    pub fn future_steps(&self) -> &[String] {
        match self {
            XiangqiVerdict::Move { future_steps, .. } | XiangqiVerdict::Resign { future_steps } => {
                future_steps
            }
        }
    }
}

pub struct XiangqiAnalyzer;

impl Analyzer for XiangqiAnalyzer {
    type Snapshot = XiangqiBoard;
    type Report = XiangqiVerdict;

    fn name(&self) -> &'static str {
        "xiangqi"
    }

    fn analyze(&self, board: &XiangqiBoard) -> XiangqiVerdict {
        best_move(board)
    }
}

/// Highest-scoring red move. No reply search is done.
pub fn best_move(board: &XiangqiBoard) -> XiangqiVerdict {
    let moves = generate_moves(board, Side::Red);
    let Some((best, rest)) = moves.split_first() else {
        return XiangqiVerdict::resign();
    };

    let reasoning = if best.score > 0 {
        format!("Captures value {}.", best.score)
    } else {
        "Positional.".to_string()
    };

    XiangqiVerdict::Move {
        best_move: notation::render(best.piece, best.from, best.to),
        from: best.from,
        to: best.to,
        score: best.score,
        reasoning,
        future_steps: rest
            .iter()
            .take(FUTURE_STEPS)
            .map(|m| notation::render(m.piece, m.from, m.to))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::xiangqi::index;

    #[test]
    fn test_rook_takes_adjacent_piece() {
        let board = XiangqiBoard::from_fen("9/9/9/9/9/R2n5/9/9/9/9").unwrap();
        let verdict = best_move(&board);
        match &verdict {
            XiangqiVerdict::Move { from, to, score, reasoning, .. } => {
                assert_eq!(*from, index(5, 0));
                assert_eq!(*to, index(5, 3));
                assert_eq!(*score, 31);
                assert_eq!(reasoning, "Captures value 31.");
            }
            XiangqiVerdict::Resign { .. } => panic!("expected a move"),
        }
        assert_eq!(verdict.best_move(), "車九平六");
    }

    #[test]
    fn test_no_moves_resigns() {
        let board = XiangqiBoard::from_fen("4k4/9/9/9/9/9/9/9/9/2B6").unwrap();
        let verdict = best_move(&board);
        assert_eq!(verdict, XiangqiVerdict::resign());
        assert_eq!(verdict.best_move(), "Resign");
        assert!(verdict.future_steps().is_empty());
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"verdict":"resign","future_steps":[]}"#
        );
    }

    #[test]
    fn test_opening_position() {
        // Both cannons can take a knight; the left one is generated first.
        let verdict = best_move(&XiangqiBoard::initial());
        assert_eq!(verdict.best_move(), "炮八进七");
        assert_eq!(
            verdict.future_steps(),
            &["炮二进七".to_string(), "兵九进一".to_string(), "兵七进一".to_string()]
        );
    }

    #[test]
    fn test_quiet_position_is_positional() {
        let board = XiangqiBoard::from_fen("4k4/9/9/9/9/9/9/9/9/4K4").unwrap();
        match best_move(&board) {
            XiangqiVerdict::Move { reasoning, score, future_steps, .. } => {
                assert_eq!(score, 0);
                assert_eq!(reasoning, "Positional.");
                assert!(future_steps.len() <= FUTURE_STEPS);
            }
            XiangqiVerdict::Resign { .. } => panic!("king can step forward"),
        }
    }

    #[test]
    fn test_repeatable() {
        let board = XiangqiBoard::initial();
        assert_eq!(best_move(&board), best_move(&board));
    }
}
