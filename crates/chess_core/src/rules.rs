//! Geometric and rule legality for single moves.
//!
//! Everything here ignores self-check; the check detector layers that on
//! top with copy-and-try probes.

use crate::board::Board;
use crate::check;
use crate::types::*;

/// Is the move from `from` to `to` legal, ignoring self-check?
///
/// Rejects zero-length moves, moving an empty square, and landing on a
/// same-color piece before dispatching on the piece kind.
pub fn is_legal_move(board: &Board, from: Pos, to: Pos) -> bool {
    legal_move(board, from, to, true)
}

/// `is_legal_move` with castling excluded. The attack scan must use this
/// variant: castling never captures, and treating it as an attacking move
/// would recurse through its own not-in-check precondition whenever two
/// unmoved kings share a rank at castling distance.
pub(crate) fn is_legal_move_no_castle(board: &Board, from: Pos, to: Pos) -> bool {
    legal_move(board, from, to, false)
}

fn legal_move(board: &Board, from: Pos, to: Pos, allow_castle: bool) -> bool {
    if from == to {
        return false;
    }
    let piece = match board.get(from) {
        Some(p) => p,
        None => return false,
    };
    if let Some(target) = board.get(to) {
        if target.color == piece.color {
            return false;
        }
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move_ok(board, piece, from, to),
        PieceKind::Rook => straight_line(from, to) && ray_clear(board, from, to),
        PieceKind::Bishop => diagonal_line(from, to) && ray_clear(board, from, to),
        PieceKind::Queen => {
            (straight_line(from, to) || diagonal_line(from, to)) && ray_clear(board, from, to)
        }
        PieceKind::Knight => knight_shape(from, to),
        PieceKind::King => {
            if from.file.abs_diff(to.file) <= 1 && from.rank.abs_diff(to.rank) <= 1 {
                true
            } else {
                allow_castle && castle_ok(board, piece, from, to)
            }
        }
    }
}

fn straight_line(from: Pos, to: Pos) -> bool {
    from.file == to.file || from.rank == to.rank
}

fn diagonal_line(from: Pos, to: Pos) -> bool {
    from.file.abs_diff(to.file) == from.rank.abs_diff(to.rank)
}

fn knight_shape(from: Pos, to: Pos) -> bool {
    let df = from.file.abs_diff(to.file);
    let dr = from.rank.abs_diff(to.rank);
    (df == 1 && dr == 2) || (df == 2 && dr == 1)
}

/// Walk the ray from `from` towards `to` and fail on the first occupied
/// square strictly between them. Callers guarantee the squares share a
/// rank, file, or diagonal.
fn ray_clear(board: &Board, from: Pos, to: Pos) -> bool {
    let df = (to.file as i8 - from.file as i8).signum();
    let dr = (to.rank as i8 - from.rank as i8).signum();
    let mut at = from.offset(df, dr).expect("ray walk left the board");
    while at != to {
        if board.get(at).is_some() {
            return false;
        }
        at = at.offset(df, dr).expect("ray walk left the board");
    }
    true
}

fn pawn_move_ok(board: &Board, piece: Piece, from: Pos, to: Pos) -> bool {
    let dir = piece.color.pawn_dir();
    let start_rank = match piece.color {
        Color::White => 1,
        Color::Black => 6,
    };
    let df = to.file as i8 - from.file as i8;
    let dr = to.rank as i8 - from.rank as i8;

    if df == 0 {
        // Forward moves never capture.
        if board.get(to).is_some() {
            return false;
        }
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && from.rank == start_rank {
            let mid = from.offset(0, dir).expect("double step from edge rank");
            return board.get(mid).is_none();
        }
        false
    } else if df.abs() == 1 && dr == dir {
        // Diagonal only captures: either an enemy piece or the en-passant
        // target square (the same-color case was rejected above).
        board.get(to).is_some() || board.en_passant == Some(to)
    } else {
        false
    }
}

/// Castling preconditions: king and rook unmoved, standard destination
/// file on the home rank, clear squares between king and rook, king not
/// currently in check, and the square the king passes through not
/// attacked. Destination safety is covered by the ordinary self-check
/// filter on top of this test.
fn castle_ok(board: &Board, king: Piece, from: Pos, to: Pos) -> bool {
    if king.moved {
        return false;
    }
    let home = king.color.home_rank();
    if from.rank != home || to.rank != home {
        return false;
    }
    if to.file != 2 && to.file != 6 {
        return false;
    }
    if check::attacked_player(board, king.color).is_check_on(king.color) {
        return false;
    }

    let rook_file = if to.file == 6 { 7 } else { 0 };
    match board.get(Pos::new(rook_file, home)) {
        Some(r) if r.kind == PieceKind::Rook && r.color == king.color && !r.moved => {}
        _ => return false,
    }

    let (lo, hi) = if rook_file > from.file {
        (from.file + 1, rook_file - 1)
    } else {
        (rook_file + 1, from.file - 1)
    };
    for f in lo..=hi {
        if board.get(Pos::new(f, home)).is_some() {
            return false;
        }
    }

    // Probe the single-step move the king passes through.
    let transit = Pos::new(if to.file == 6 { 5 } else { 3 }, home);
    let mut probe = board.clone();
    probe.apply_move(from, transit);
    !check::attacked_player(&probe, king.color).is_check_on(king.color)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
