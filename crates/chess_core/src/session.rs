//! A running game: side to move, who controls each side, and the history.

use std::error::Error;
use std::fmt;

use crate::board::{Board, PromotionChooser};
use crate::check;
use crate::history::HistoryStack;
use crate::rules;
use crate::types::*;

/// Who supplies moves for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

/// Why a submitted move was rejected. Nothing on the board changes when
/// one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Text was not four coordinate characters inside `a1`..`h8`.
    Malformed,
    /// The from-square holds the opponent's piece.
    WrongTurn,
    /// The move breaks the movement rules for that piece (or the
    /// from-square is empty).
    Illegal,
    /// Legal shape, but the mover's own king would be left in check.
    SelfCheck,
    /// The game already ended in mate or stalemate.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::Malformed => "malformed move, expected four characters like e2e4",
            MoveError::WrongTurn => "that piece belongs to the other side",
            MoveError::Illegal => "that piece cannot move there",
            MoveError::SelfCheck => "that move would leave your king in check",
            MoveError::GameOver => "the game is already over",
        };
        f.write_str(msg)
    }
}

impl Error for MoveError {}

/// All mutable state of one game, threaded explicitly through every call.
#[derive(Debug)]
pub struct GameSession {
    history: HistoryStack,
    to_move: Color,
    controllers: [Controller; 2],
}

impl GameSession {
    /// Fresh game from the standard start position.
    pub fn new(controllers: [Controller; 2]) -> GameSession {
        GameSession::from_board(Board::startpos(), Color::White, controllers)
    }

    /// Game from an arbitrary position (FEN setups, tests).
    pub fn from_board(board: Board, to_move: Color, controllers: [Controller; 2]) -> GameSession {
        GameSession {
            history: HistoryStack::new(board),
            to_move,
            controllers,
        }
    }

    pub fn board(&self) -> &Board {
        &self.history.top().board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn controller(&self, color: Color) -> Controller {
        self.controllers[color.idx()]
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn game_over(&self) -> bool {
        self.board().check.game_over()
    }

    /// Validate and play a move given as coordinate text.
    pub fn try_move_text(
        &mut self,
        text: &str,
        chooser: &mut dyn PromotionChooser,
    ) -> Result<CheckStatus, MoveError> {
        let mv = Move::parse(text.trim()).ok_or(MoveError::Malformed)?;
        self.try_move(mv, chooser)
    }

    /// Validate and play a move for the side to move.
    ///
    /// On success the move is applied and recorded, the resulting status is
    /// stored on the new board, and the turn passes to the other side.
    pub fn try_move(
        &mut self,
        mv: Move,
        chooser: &mut dyn PromotionChooser,
    ) -> Result<CheckStatus, MoveError> {
        if self.game_over() {
            return Err(MoveError::GameOver);
        }
        let board = self.board();
        let piece = board.get(mv.from).ok_or(MoveError::Illegal)?;
        if piece.color != self.to_move {
            return Err(MoveError::WrongTurn);
        }
        if !rules::is_legal_move(board, mv.from, mv.to) {
            return Err(MoveError::Illegal);
        }
        if check::leaves_king_in_check(board, mv.from, mv.to) {
            return Err(MoveError::SelfCheck);
        }

        self.history.push(mv.from, mv.to, chooser);
        let status = check::position_status(&self.history.top().board, self.to_move);
        self.history.top_board_mut().check = status;
        self.to_move = self.to_move.other();
        Ok(status)
    }

    /// Take back the last half-move. Returns false at the start of the game.
    pub fn undo(&mut self) -> bool {
        if self.history.undo() {
            self.to_move = self.to_move.other();
            true
        } else {
            false
        }
    }

    /// Replay a half-move taken back with `undo`.
    pub fn redo(&mut self) -> bool {
        if self.history.redo() {
            self.to_move = self.to_move.other();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
