//! Alpha-beta minimax over the search arena.
//!
//! White maximizes and walks children in their sorted (descending) order;
//! Black minimizes and walks the same order from the tail. The driver
//! deepens one ply at a time so that values backed up from shallow passes
//! order the children for the deeper ones; there is no clock, deepening
//! exists purely to warm the move ordering.

use chess_core::{Board, Color, Move};

use crate::arena::SearchArena;

/// What a top-level move decision produced.
pub struct SearchOutcome {
    /// Best move with its backed-up value, `None` when there are no legal
    /// moves.
    pub best_move: Option<(Move, i32)>,
    /// True when the arena filled up and at least one node's expansion was
    /// abandoned.
    pub arena_exhausted: bool,
}

struct SearchStats {
    nodes: u64,
    exhausted: bool,
}

/// Decide a move for `player` on `board`, searching `depth` plies.
///
/// The arena is reset for this decision; passes at depth 1..=depth reuse
/// the growing tree. The root's children are sorted once more at the end
/// and the best immediate child is reported, head of the order for White,
/// tail for Black.
pub fn pick_best_move(
    arena: &mut SearchArena,
    board: &Board,
    player: Color,
    depth: u8,
    nodes: &mut u64,
) -> SearchOutcome {
    let root = arena.reset(board);
    let mut stats = SearchStats {
        nodes: 0,
        exhausted: false,
    };

    for d in 1..=depth.max(1) {
        alpha_beta(arena, root, d, i32::MIN, i32::MAX, player, &mut stats);
    }
    arena.sort_children(root);
    *nodes += stats.nodes;

    let children = arena.children(root);
    let best = match player {
        Color::White => children.first().copied(),
        Color::Black => children.last().copied(),
    };
    SearchOutcome {
        best_move: best.map(|child| {
            let node = arena.node(child);
            (node.mv.expect("root child without a move"), node.value)
        }),
        arena_exhausted: stats.exhausted,
    }
}

/// One minimax visit. `player` is the side to move at `node`; the value
/// returned (and cached on the node) is white-positive.
fn alpha_beta(
    arena: &mut SearchArena,
    node: u32,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    player: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        let eval = arena.node(node).eval;
        arena.set_value(node, eval);
        return eval;
    }

    match arena.node(node).child_count {
        None => {
            if arena.generate_children(node, player).is_err() {
                stats.exhausted = true;
            }
        }
        // Deeper passes have overwritten child values since the last sort.
        Some(_) => arena.sort_children(node),
    }

    let kids = arena.children(node).to_vec();
    if kids.is_empty() {
        // Mate, stalemate, or abandoned expansion: the static evaluation
        // already encodes the outcome.
        let eval = arena.node(node).eval;
        arena.set_value(node, eval);
        return eval;
    }

    let mut best;
    match player {
        Color::White => {
            best = i32::MIN;
            for &child in kids.iter() {
                let v = alpha_beta(arena, child, depth - 1, alpha, beta, player.other(), stats);
                if v > best {
                    best = v;
                }
                if best > alpha {
                    alpha = best;
                }
                if alpha >= beta {
                    break;
                }
            }
        }
        Color::Black => {
            best = i32::MAX;
            for &child in kids.iter().rev() {
                let v = alpha_beta(arena, child, depth - 1, alpha, beta, player.other(), stats);
                if v < best {
                    best = v;
                }
                if best < beta {
                    beta = best;
                }
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    arena.set_value(node, best);
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
