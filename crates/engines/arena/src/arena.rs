//! Bump-allocated search tree storage.
//!
//! Three index-aligned arrays back the tree: nodes, their board snapshots,
//! and a per-parent permutation of child indices kept sorted by cached
//! value. Indices are handed out sequentially and never reused; the whole
//! arena is reset between top-level move decisions.

use std::error::Error;
use std::fmt;

use chess_core::{check, AutoQueen, Board, Color, Move};

use crate::eval::evaluate;

/// Default node cap. Memory grows on demand up to this bound; at roughly
/// 300 bytes per node the cap corresponds to a few hundred megabytes.
pub const DEFAULT_NODE_CAPACITY: usize = 2_000_000;

/// The arena hit its node cap while expanding. Expansion of that node is
/// abandoned and the search treats it as terminal; this is a degraded
/// result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaFull;

impl fmt::Display for ArenaFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("search arena node capacity reached")
    }
}

impl Error for ArenaFull {}

/// One tree node. The board snapshot lives at the same index in the
/// parallel board array.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    /// Move that led here; `None` only for the root.
    pub mv: Option<Move>,
    /// Start of this node's children in the flat node array.
    pub first_child: u32,
    /// `None` until the node has been expanded. `Some(0)` marks a terminal
    /// node: mate, stalemate, or abandoned expansion.
    pub child_count: Option<u32>,
    /// Static evaluation, fixed at creation.
    pub eval: i32,
    /// Search-backed value; starts at `eval` and is overwritten by every
    /// deeper visit.
    pub value: i32,
}

pub struct SearchArena {
    nodes: Vec<Node>,
    boards: Vec<Board>,
    order: Vec<u32>,
    capacity: usize,
}

impl SearchArena {
    pub fn new(capacity: usize) -> SearchArena {
        SearchArena {
            nodes: Vec::new(),
            boards: Vec::new(),
            order: Vec::new(),
            capacity,
        }
    }

    /// Drop the previous tree and seed a fresh root. Returns the root index
    /// (always 0).
    pub fn reset(&mut self, root: &Board) -> u32 {
        self.nodes.clear();
        self.boards.clear();
        self.order.clear();
        let eval = evaluate(root);
        self.alloc(
            Node {
                mv: None,
                first_child: 0,
                child_count: None,
                eval,
                value: eval,
            },
            root.clone(),
        )
        .expect("arena capacity of zero");
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: u32) -> &Node {
        &self.nodes[idx as usize]
    }

    pub fn board(&self, idx: u32) -> &Board {
        &self.boards[idx as usize]
    }

    pub fn set_value(&mut self, idx: u32, value: i32) {
        self.nodes[idx as usize].value = value;
    }

    /// Children of `parent` in sorted order, best-for-white first. Empty
    /// for unexpanded and terminal nodes alike.
    pub fn children(&self, parent: u32) -> &[u32] {
        let node = &self.nodes[parent as usize];
        match node.child_count {
            Some(count) => {
                let first = node.first_child as usize;
                &self.order[first..first + count as usize]
            }
            None => &[],
        }
    }

    fn alloc(&mut self, node: Node, board: Board) -> Result<u32, ArenaFull> {
        if self.nodes.len() >= self.capacity {
            return Err(ArenaFull);
        }
        let idx = self.nodes.len() as u32;
        self.nodes.push(node);
        self.boards.push(board);
        // Identity permutation entry; the parent's sort rearranges it.
        self.order.push(idx);
        Ok(idx)
    }

    /// Expand `parent` with every legal move of `player`, snapshotting and
    /// statically evaluating each child, then sort the new children.
    ///
    /// On `ArenaFull` the partial batch is abandoned: the parent records
    /// zero children and reads as terminal from then on. The burned
    /// indices stay allocated; the arena never reuses them.
    pub fn generate_children(&mut self, parent: u32, player: Color) -> Result<u32, ArenaFull> {
        debug_assert!(
            self.nodes[parent as usize].child_count.is_none(),
            "node expanded twice"
        );
        let parent_board = self.boards[parent as usize].clone();
        let first = self.nodes.len() as u32;

        // A finished game expands to nothing even when the stalemated side
        // would still have moves (the 50-move case).
        if parent_board.check.game_over() {
            self.nodes[parent as usize].first_child = first;
            self.nodes[parent as usize].child_count = Some(0);
            return Ok(0);
        }

        let mut moves = Vec::with_capacity(64);
        check::legal_moves_into(&parent_board, player, &mut moves);

        let mut count = 0u32;
        for mv in moves {
            let mut board = parent_board.clone();
            board.apply_move_and_promote(mv.from, mv.to, &mut AutoQueen);
            board.check = check::position_status(&board, player);
            let eval = evaluate(&board);
            let node = Node {
                mv: Some(mv),
                first_child: 0,
                child_count: None,
                eval,
                value: eval,
            };
            if self.alloc(node, board).is_err() {
                self.nodes[parent as usize].first_child = first;
                self.nodes[parent as usize].child_count = Some(0);
                return Err(ArenaFull);
            }
            count += 1;
        }

        self.nodes[parent as usize].first_child = first;
        self.nodes[parent as usize].child_count = Some(count);
        self.sort_children(parent);
        Ok(count)
    }

    /// Re-sort `parent`'s order slice by cached value, highest first, with
    /// an in-place binary heap sort. Needed on every revisit: deeper
    /// passes overwrite child values, so the stored order goes stale.
    pub fn sort_children(&mut self, parent: u32) {
        let node = self.nodes[parent as usize];
        let (first, count) = match node.child_count {
            Some(c) => (node.first_child as usize, c as usize),
            None => return,
        };
        if count < 2 {
            return;
        }
        let nodes = &self.nodes;
        let slice = &mut self.order[first..first + count];

        // Min-heap selection: the smallest value bubbles to the back each
        // round, leaving the slice in descending order.
        for root in (0..count / 2).rev() {
            sift_down(slice, nodes, root, count);
        }
        for end in (1..count).rev() {
            slice.swap(0, end);
            sift_down(slice, nodes, 0, end);
        }
    }
}

fn sift_down(order: &mut [u32], nodes: &[Node], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            break;
        }
        let mut smallest = root;
        if nodes[order[left] as usize].value < nodes[order[smallest] as usize].value {
            smallest = left;
        }
        let right = left + 1;
        if right < end && nodes[order[right] as usize].value < nodes[order[smallest] as usize].value
        {
            smallest = right;
        }
        if smallest == root {
            break;
        }
        order.swap(root, smallest);
        root = smallest;
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod arena_tests;
