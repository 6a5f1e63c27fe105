//! Game history: board snapshots, undo/redo, and repetition counting.

use crate::board::{Board, PromotionChooser};
use crate::types::*;

/// Hard cap on stored frames. Games this long are an implementation limit,
/// not a chess rule; exceeding it panics.
pub const HISTORY_CAPACITY: usize = 6_000;

/// One snapshot in the game line: the board after the move, the move that
/// produced it, and how many times this piece layout has occurred with the
/// same side to move since the last irreversible move.
#[derive(Clone, Debug)]
pub struct HistoryFrame {
    pub board: Board,
    /// `None` only for the initial frame.
    pub mv: Option<Move>,
    pub repetitions: u32,
}

/// Snapshot stack with an undo/redo cursor. Frames before the cursor are
/// the played line; frames after it are redoable until a new move diverges
/// and discards them.
#[derive(Debug)]
pub struct HistoryStack {
    frames: Vec<HistoryFrame>,
    top: usize,
}

impl HistoryStack {
    pub fn new(initial: Board) -> HistoryStack {
        HistoryStack {
            frames: vec![HistoryFrame {
                board: initial,
                mv: None,
                repetitions: 1,
            }],
            top: 0,
        }
    }

    pub fn top(&self) -> &HistoryFrame {
        &self.frames[self.top]
    }

    pub fn top_board_mut(&mut self) -> &mut Board {
        &mut self.frames[self.top].board
    }

    /// Number of half-moves played up to the cursor.
    pub fn ply(&self) -> usize {
        self.top
    }

    /// The played line, initial frame first, up to the cursor.
    pub fn line(&self) -> &[HistoryFrame] {
        &self.frames[..=self.top]
    }

    /// Clone the current top board, apply the move on it, and append the
    /// resulting frame. Any redoable tail is discarded first.
    pub fn push(&mut self, from: Pos, to: Pos, chooser: &mut dyn PromotionChooser) {
        assert!(
            self.top + 1 < HISTORY_CAPACITY,
            "history capacity exceeded"
        );
        self.frames.truncate(self.top + 1);
        let mut board = self.top().board.clone();
        board.apply_move_and_promote(from, to, chooser);
        let repetitions = self.count_repetitions(&board);
        self.frames.push(HistoryFrame {
            board,
            mv: Some(Move::new(from, to)),
            repetitions,
        });
        self.top = self.frames.len() - 1;
    }

    /// How many frames in the played line share the new board's piece
    /// layout with the same side to move, plus one for the new frame.
    ///
    /// Walks backward and stops at the first irreversible frame (half-move
    /// clock reset marks a pawn move, capture, or en-passant capture);
    /// positions on the far side of one of those can never recur. Layouts
    /// are compared ignoring moved flags and en-passant windows, a known
    /// approximation of the strict repetition rule.
    fn count_repetitions(&self, new_board: &Board) -> u32 {
        let mut count = 1;
        if new_board.halfmove_clock == 0 {
            return count;
        }
        let new_index = self.top + 1;
        let mut k = self.top;
        loop {
            let frame = &self.frames[k];
            if (new_index - k) % 2 == 0 && frame.board.same_layout(new_board) {
                count += 1;
            }
            if k == 0 || frame.board.halfmove_clock == 0 {
                break;
            }
            k -= 1;
        }
        count
    }

    /// Step the cursor back one half-move. False at the initial frame.
    pub fn undo(&mut self) -> bool {
        if self.top > 0 {
            self.top -= 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor forward again. False when nothing is redoable.
    pub fn redo(&mut self) -> bool {
        if self.top + 1 < self.frames.len() {
            self.top += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
