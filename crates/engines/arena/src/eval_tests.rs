use super::*;

#[test]
fn startpos_is_balanced() {
    assert_eq!(evaluate(&Board::startpos()), 0);
}

#[test]
fn advanced_pawns_outweigh_home_pawns() {
    // White pawn on e4 (two ranks walked) against a black pawn at home.
    let (board, _) = Board::from_fen("4k3/p7/8/8/4P3/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&board), 2);
}

#[test]
fn material_count_uses_the_fixed_values() {
    // Queen + rook vs knight + bishop: (18 + 10) - (6 + 7) = 15.
    let (board, _) = Board::from_fen("1nb1k3/8/8/8/8/8/8/QR2K3 w - - 0 1");
    assert_eq!(evaluate(&board), 15);
}

#[test]
fn decided_statuses_override_material() {
    let (mut board, _) = Board::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    board.check = CheckStatus::BlackMated;
    assert_eq!(evaluate(&board), BLACK_MATED);
    board.check = CheckStatus::WhiteMated;
    assert_eq!(evaluate(&board), WHITE_MATED);
    board.check = CheckStatus::Stalemate;
    assert_eq!(evaluate(&board), 0, "stalemate is exactly zero");
}

#[test]
fn evaluation_is_idempotent() {
    let (board, _) = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let first = evaluate(&board);
    for _ in 0..10 {
        assert_eq!(evaluate(&board), first);
    }
}
