use super::*;

#[test]
fn random_engine_returns_a_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();

    let result = engine.search(&board, Color::White, SearchLimits::depth(1));

    let mv = result.best_move.expect("start position has moves");
    assert!(legal_moves(&board, Color::White).contains(&mv));
    assert_eq!(result.nodes, 20);
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    // Scholar's mate delivered; black to move with no options.
    let (board, to_move) =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");

    let result = engine.search(&board, to_move, SearchLimits::depth(1));
    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let (board, to_move) = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");

    let result = engine.search(&board, to_move, SearchLimits::depth(1));
    assert!(result.best_move.is_none());
}
