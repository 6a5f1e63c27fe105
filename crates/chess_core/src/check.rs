//! Check, checkmate, and stalemate detection.
//!
//! Deliberately brute force: every question is answered by trying moves on
//! a scratch copy of the board and scanning for attacks on the kings. This
//! is the dominant cost of the whole engine, and it is kept simple on
//! purpose; incremental attack maps would only be worth it if profiling
//! ever demands them.

use crate::board::{AutoQueen, Board};
use crate::rules::{is_legal_move, is_legal_move_no_castle};
use crate::types::*;

/// Scan every occupied square for a piece with a legal move onto the enemy
/// king. `acting` picks which side's peril we care about first: as soon as
/// a check against `acting` is found the scan short-circuits, which lets
/// move validation bail out early.
///
/// The scan uses the castle-free legality variant: castling never lands on
/// an occupied square, so it can never deliver an attack, and probing it
/// here would re-enter this function through its own check precondition.
pub fn attacked_player(board: &Board, acting: Color) -> CheckStatus {
    let mut found = CheckStatus::NoCheck;
    for idx in 0..64 {
        let at = Pos::from_idx(idx);
        let piece = match board.get(at) {
            Some(p) => p,
            None => continue,
        };
        let defender = piece.color.other();
        if is_legal_move_no_castle(board, at, board.king(defender)) {
            if defender == acting {
                return CheckStatus::check_on(defender);
            }
            found = CheckStatus::check_on(defender);
        }
    }
    found
}

/// Would playing `from -> to` leave the mover's own king attacked?
/// Tried on a scratch copy; promotions auto-queen.
pub fn leaves_king_in_check(board: &Board, from: Pos, to: Pos) -> bool {
    let mover = board
        .get(from)
        .expect("self-check probe on empty square")
        .color;
    let mut probe = board.clone();
    probe.apply_move_and_promote(from, to, &mut AutoQueen);
    attacked_player(&probe, mover).is_check_on(mover)
}

/// Does `player` have no legal move at all? The caller distinguishes
/// checkmate from stalemate by whether `player` was in check beforehand.
///
/// Tries every piece against every target square and returns false on the
/// first move that does not leave `player` in check.
pub fn in_checkmate_or_stalemate(board: &Board, player: Color) -> bool {
    for from_idx in 0..64 {
        let from = Pos::from_idx(from_idx);
        match board.get(from) {
            Some(p) if p.color == player => {}
            _ => continue,
        }
        for to_idx in 0..64 {
            let to = Pos::from_idx(to_idx);
            if is_legal_move(board, from, to) && !leaves_king_in_check(board, from, to) {
                return false;
            }
        }
    }
    true
}

/// All fully legal moves for `player`, into a reusable buffer.
pub fn legal_moves_into(board: &Board, player: Color, out: &mut Vec<Move>) {
    out.clear();
    for from_idx in 0..64 {
        let from = Pos::from_idx(from_idx);
        match board.get(from) {
            Some(p) if p.color == player => {}
            _ => continue,
        }
        for to_idx in 0..64 {
            let to = Pos::from_idx(to_idx);
            if is_legal_move(board, from, to) && !leaves_king_in_check(board, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// All fully legal moves for `player`, freshly allocated.
pub fn legal_moves(board: &Board, player: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, player, &mut out);
    out
}

/// Status of a board on which `mover` has just completed a move: check on
/// the opponent, upgraded to checkmate when no reply escapes, stalemate
/// when there is no reply and no check, and stalemate unconditionally once
/// the half-move clock reaches 50.
pub fn position_status(board: &Board, mover: Color) -> CheckStatus {
    if board.halfmove_clock >= 50 {
        return CheckStatus::Stalemate;
    }
    let opponent = mover.other();
    let status = attacked_player(board, opponent);
    if in_checkmate_or_stalemate(board, opponent) {
        if status.is_check_on(opponent) {
            return CheckStatus::mate_on(opponent);
        }
        return CheckStatus::Stalemate;
    }
    status
}

/// Status the board would have after `from -> to`, computed on a scratch
/// copy (promotions auto-queen). The move must be legal.
pub fn update_check_status(board: &Board, from: Pos, to: Pos) -> CheckStatus {
    let mover = board
        .get(from)
        .expect("status probe on empty square")
        .color;
    let mut probe = board.clone();
    probe.apply_move_and_promote(from, to, &mut AutoQueen);
    position_status(&probe, mover)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
