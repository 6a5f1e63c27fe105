use super::*;
use crate::arena::SearchArena;
use crate::eval::{evaluate, BLACK_MATED, WHITE_MATED};
use crate::ArenaEngine;
use chess_core::{check, AutoQueen, CheckStatus};

fn decide(fen: &str, depth: u8) -> SearchOutcome {
    let (board, player) = chess_core::Board::from_fen(fen);
    let mut arena = SearchArena::new(200_000);
    let mut nodes = 0u64;
    pick_best_move(&mut arena, &board, player, depth, &mut nodes)
}

#[test]
fn depth_one_equals_the_best_immediate_evaluation() {
    let fen = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1";
    let (board, player) = chess_core::Board::from_fen(fen);

    // Reference: statically evaluate every legal reply by hand.
    let mut expected = i32::MIN;
    for mv in check::legal_moves(&board, player) {
        let mut child = board.clone();
        child.apply_move_and_promote(mv.from, mv.to, &mut AutoQueen);
        child.check = check::position_status(&child, player);
        expected = expected.max(evaluate(&child));
    }

    let outcome = decide(fen, 1);
    let (mv, value) = outcome.best_move.expect("a legal move exists");
    assert_eq!(value, expected);
    // Taking the queen is the only move worth 5 here.
    assert_eq!(mv, Move::parse("e4d5").unwrap());
}

#[test]
fn white_finds_mate_in_one() {
    let outcome = decide("7k/3Q4/6K1/8/8/8/8/8 w - - 0 1", 2);
    let (mv, value) = outcome.best_move.unwrap();
    assert_eq!(value, BLACK_MATED);

    let (board, _) = chess_core::Board::from_fen("7k/3Q4/6K1/8/8/8/8/8 w - - 0 1");
    assert_eq!(
        check::update_check_status(&board, mv.from, mv.to),
        CheckStatus::BlackMated
    );
}

#[test]
fn black_finds_mate_in_one() {
    // Mirror of the corner mate: Black minimizes toward WHITE_MATED.
    let outcome = decide("8/8/8/8/8/6k1/3q4/7K b - - 0 1", 2);
    let (mv, value) = outcome.best_move.unwrap();
    assert_eq!(value, WHITE_MATED);

    let (board, _) = chess_core::Board::from_fen("8/8/8/8/8/6k1/3q4/7K b - - 0 1");
    assert_eq!(
        check::update_check_status(&board, mv.from, mv.to),
        CheckStatus::WhiteMated
    );
}

#[test]
fn no_legal_moves_yields_no_move() {
    // Stalemated side to move.
    let outcome = decide("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1", 3);
    assert!(outcome.best_move.is_none());
}

#[test]
fn chosen_moves_are_always_legal() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1",
    ];
    for fen in fens {
        let (board, player) = chess_core::Board::from_fen(fen);
        let outcome = decide(fen, 2);
        let (mv, _) = outcome.best_move.expect("position has legal moves");
        assert!(
            check::legal_moves(&board, player).contains(&mv),
            "illegal choice {} in {}",
            mv,
            fen
        );
    }
}

#[test]
fn exhausted_arena_still_produces_a_move() {
    let (board, player) = chess_core::Board::from_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    );
    // Room for the root and its children, but not for any reply batch.
    let mut arena = SearchArena::new(30);
    let mut nodes = 0u64;
    let outcome = pick_best_move(&mut arena, &board, player, 2, &mut nodes);
    assert!(outcome.arena_exhausted);
    assert!(outcome.best_move.is_some());
}

#[test]
fn boxed_engines_move_across_threads() {
    use chess_core::{Engine, SearchLimits};

    let mut engine: Box<dyn Engine> = Box::new(ArenaEngine::with_capacity(10_000));
    let handle = std::thread::spawn(move || {
        let board = chess_core::Board::startpos();
        engine
            .search(&board, Color::White, SearchLimits::depth(1))
            .best_move
            .is_some()
    });
    assert!(handle.join().unwrap());
}

#[test]
fn engine_trait_reports_nodes_and_moves() {
    use chess_core::{Engine, SearchLimits};

    let mut engine = ArenaEngine::with_capacity(200_000);
    let board = chess_core::Board::startpos();
    let result = engine.search(&board, Color::White, SearchLimits::depth(2));
    assert!(result.best_move.is_some());
    assert!(result.nodes > 0);
    assert!(!result.arena_exhausted);

    // Stalemated position through the trait surface.
    let (board, player) = chess_core::Board::from_fen("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1");
    let result = engine.search(&board, player, SearchLimits::depth(2));
    assert!(result.best_move.is_none());
}
