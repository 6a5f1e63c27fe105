use super::*;
use crate::board::{AutoQueen, Board};

fn mv(stack: &mut HistoryStack, text: &str) {
    let m = Move::parse(text).unwrap();
    stack.push(m.from, m.to, &mut AutoQueen);
}

#[test]
fn push_applies_the_move_to_a_fresh_snapshot() {
    let mut stack = HistoryStack::new(Board::startpos());
    mv(&mut stack, "e2e4");
    assert_eq!(stack.ply(), 1);
    assert_eq!(stack.top().mv, Move::parse("e2e4"));
    assert!(stack.top().board.get(Pos::parse("e4").unwrap()).is_some());
    // The initial frame is untouched.
    assert!(stack.line()[0]
        .board
        .get(Pos::parse("e2").unwrap())
        .is_some());
}

#[test]
fn knight_shuffle_counts_repetitions() {
    let mut stack = HistoryStack::new(Board::startpos());
    for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        mv(&mut stack, text);
    }
    // Back to the initial layout with white to move again.
    assert_eq!(stack.top().repetitions, 2);

    for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        mv(&mut stack, text);
    }
    assert_eq!(stack.top().repetitions, 3);
}

#[test]
fn pawn_moves_cut_the_repetition_scan() {
    let mut stack = HistoryStack::new(Board::startpos());
    for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        mv(&mut stack, text);
    }
    assert_eq!(stack.top().repetitions, 2);
    // An irreversible move resets the count for everything after it.
    mv(&mut stack, "e2e4");
    assert_eq!(stack.top().repetitions, 1);
    mv(&mut stack, "e7e5");
    assert_eq!(stack.top().repetitions, 1);
}

#[test]
fn undo_and_redo_move_the_cursor() {
    let mut stack = HistoryStack::new(Board::startpos());
    mv(&mut stack, "e2e4");
    mv(&mut stack, "e7e5");
    assert_eq!(stack.ply(), 2);

    assert!(stack.undo());
    assert_eq!(stack.ply(), 1);
    assert!(stack.redo());
    assert_eq!(stack.ply(), 2);
    assert!(!stack.redo());

    assert!(stack.undo());
    assert!(stack.undo());
    assert!(!stack.undo(), "cannot undo past the initial frame");
}

#[test]
fn a_new_move_discards_the_redo_tail() {
    let mut stack = HistoryStack::new(Board::startpos());
    mv(&mut stack, "e2e4");
    assert!(stack.undo());
    mv(&mut stack, "d2d4");
    assert_eq!(stack.ply(), 1);
    assert!(!stack.redo());
    assert_eq!(stack.top().mv, Move::parse("d2d4"));
}
