use super::*;
use chess_core::CheckStatus;

#[test]
fn reset_seeds_a_single_root() {
    let mut arena = SearchArena::new(100);
    let root = arena.reset(&Board::startpos());
    assert_eq!(root, 0);
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.node(root).mv, None);
    assert_eq!(arena.node(root).child_count, None);
    assert!(arena.children(root).is_empty());

    // A second reset starts over at index zero.
    arena.generate_children(root, Color::White).unwrap();
    let root = arena.reset(&Board::startpos());
    assert_eq!(arena.len(), 1);
    assert!(arena.children(root).is_empty());
}

#[test]
fn expansion_allocates_one_child_per_legal_move() {
    let mut arena = SearchArena::new(100);
    let root = arena.reset(&Board::startpos());
    let count = arena.generate_children(root, Color::White).unwrap();
    assert_eq!(count, 20);
    assert_eq!(arena.len(), 21);
    assert_eq!(arena.node(root).child_count, Some(20));

    for &child in arena.children(root) {
        let node = arena.node(child);
        let mv = node.mv.expect("child without a move");
        // Board array stays index-aligned with the node array.
        assert!(arena.board(child).get(mv.to).is_some());
        assert_eq!(node.value, node.eval);
    }
}

#[test]
fn children_come_out_sorted_descending() {
    let mut arena = SearchArena::new(100);
    let root = arena.reset(&Board::startpos());
    arena.generate_children(root, Color::White).unwrap();

    let kids: Vec<u32> = arena.children(root).to_vec();
    for pair in kids.windows(2) {
        assert!(arena.node(pair[0]).value >= arena.node(pair[1]).value);
    }
}

#[test]
fn resort_follows_updated_values() {
    let mut arena = SearchArena::new(100);
    let root = arena.reset(&Board::startpos());
    arena.generate_children(root, Color::White).unwrap();

    // Fake a deeper pass overwriting the cached values.
    let kids: Vec<u32> = arena.children(root).to_vec();
    for (i, &child) in kids.iter().enumerate() {
        arena.set_value(child, i as i32);
    }
    arena.sort_children(root);

    let resorted: Vec<u32> = arena.children(root).to_vec();
    for pair in resorted.windows(2) {
        assert!(arena.node(pair[0]).value >= arena.node(pair[1]).value);
    }
    assert_eq!(arena.node(resorted[0]).value, kids.len() as i32 - 1);
}

#[test]
fn mated_node_expands_to_zero_children() {
    let (mut board, _) = Board::from_fen("7k/7Q/6K1/8/8/8/8/8 b - - 0 1");
    board.check = CheckStatus::BlackMated;
    let mut arena = SearchArena::new(100);
    let root = arena.reset(&board);
    assert_eq!(arena.generate_children(root, Color::Black), Ok(0));
    assert!(arena.children(root).is_empty());
}

#[test]
fn capacity_exhaustion_degrades_to_a_terminal_node() {
    let mut arena = SearchArena::new(5);
    let root = arena.reset(&Board::startpos());
    assert_eq!(arena.generate_children(root, Color::White), Err(ArenaFull));
    // The partial batch is abandoned; the node reads as terminal.
    assert_eq!(arena.node(root).child_count, Some(0));
    assert!(arena.children(root).is_empty());
    assert_eq!(arena.len(), 5);
}
