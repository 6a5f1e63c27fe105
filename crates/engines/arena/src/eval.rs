//! Static position evaluation, white-positive.

use chess_core::{Board, CheckStatus, Color, PieceKind, Pos};

/// Material values indexed by kind: pawn, knight, bishop, rook, queen,
/// king. The king carries no material weight; losing it is expressed
/// through the mate sentinels instead.
const PIECE_VALUES: [i32; 6] = [2, 6, 7, 10, 18, 0];

/// Sentinel values for decided positions. These override material
/// entirely, so no arithmetic is ever done on them.
pub const WHITE_MATED: i32 = i32::MIN;
pub const BLACK_MATED: i32 = i32::MAX;

/// Evaluate a board: signed material plus a small bonus for pawn
/// advancement, or a sentinel when the attached status already decides
/// the game. Pure function of the board; repeated calls agree.
pub fn evaluate(board: &Board) -> i32 {
    match board.check {
        CheckStatus::WhiteMated => WHITE_MATED,
        CheckStatus::BlackMated => BLACK_MATED,
        CheckStatus::Stalemate => 0,
        CheckStatus::NoCheck | CheckStatus::WhiteChecked | CheckStatus::BlackChecked => {
            material(board)
        }
    }
}

fn material(board: &Board) -> i32 {
    let mut score = 0i32;
    for idx in 0..64 {
        let at = Pos::from_idx(idx);
        let piece = match board.get(at) {
            Some(p) => p,
            None => continue,
        };
        let mut value = PIECE_VALUES[kind_idx(piece.kind)];
        if piece.kind == PieceKind::Pawn {
            value += advancement(piece.color, at.rank);
        }
        score += match piece.color {
            Color::White => value,
            Color::Black => -value,
        };
    }
    score
}

/// Ranks walked toward the enemy back rank, 0 for a pawn still at home.
fn advancement(color: Color, rank: u8) -> i32 {
    match color {
        Color::White => rank as i32 - 1,
        Color::Black => 6 - rank as i32,
    }
}

fn kind_idx(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Pawn => 0,
        PieceKind::Knight => 1,
        PieceKind::Bishop => 2,
        PieceKind::Rook => 3,
        PieceKind::Queen => 4,
        PieceKind::King => 5,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
