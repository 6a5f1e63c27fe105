use crate::board::{AutoQueen, Board};
use crate::check::legal_moves_into;
use crate::types::Color;

/// Pure perft node count over the legality engine, used as a correctness
/// oracle against published reference values.
///
/// Promotions count once per from/to pair (the board model defers the
/// piece choice to the caller), so reference depths must stay shallow
/// enough that no pawn reaches the back rank.
pub fn perft(board: &Board, player: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, player, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move_and_promote(mv.from, mv.to, &mut AutoQueen);
        nodes += perft(&child, player.other(), depth - 1);
    }
    nodes
}
