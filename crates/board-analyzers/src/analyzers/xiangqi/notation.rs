//! Traditional move notation, e.g. `炮二平五` or `馬2进3`.
//!
//! Red counts files 1-9 from its own right (board column 8 is file 1) and
//! writes numbers in Chinese; black counts from column 0 and uses digits.

use board_core::xiangqi::{row_col, Piece, Side};

const RED_NUMERALS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const BLACK_NUMERALS: [&str; 10] = ["", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const ADVANCE: &str = "进";
const RETREAT: &str = "退";
const TRAVERSE: &str = "平";

fn file_number(side: Side, col: usize) -> usize {
    match side {
        Side::Red => 9 - col,
        Side::Black => col + 1,
    }
}

fn numeral(side: Side, n: usize) -> &'static str {
    let table = match side {
        Side::Red => &RED_NUMERALS,
        Side::Black => &BLACK_NUMERALS,
    };
    table.get(n).copied().unwrap_or("")
}

pub fn render(piece: Piece, from: usize, to: usize) -> String {
    let side = piece.side;
    let (r1, c1) = row_col(from);
    let (r2, c2) = row_col(to);
    let src = numeral(side, file_number(side, c1));
    let dst = numeral(side, file_number(side, c2));

    if r1 == r2 {
        return format!("{}{src}{TRAVERSE}{dst}", piece.glyph());
    }

    let advancing = match side {
        Side::Red => r1 > r2,
        Side::Black => r1 < r2,
    };
    let direction = if advancing { ADVANCE } else { RETREAT };

    // Diagonal movers name the destination file, straight movers the distance.
    let target = if piece.kind.moves_diagonally() {
        dst
    } else {
        numeral(side, r1.abs_diff(r2))
    };
    format!("{}{src}{direction}{target}", piece.glyph())
}
