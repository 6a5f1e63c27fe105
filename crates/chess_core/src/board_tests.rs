use super::*;

fn pos(s: &str) -> Pos {
    Pos::parse(s).unwrap()
}

#[test]
fn startpos_layout_and_kings() {
    let b = Board::startpos();
    assert_eq!(
        b.get(pos("e1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        b.get(pos("d8")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(b.get(pos("e4")), None);
    assert_eq!(b.king(Color::White), pos("e1"));
    assert_eq!(b.king(Color::Black), pos("e8"));
    assert_eq!(b.en_passant, None);
    assert_eq!(b.halfmove_clock, 0);
}

#[test]
fn double_step_opens_en_passant_window() {
    let mut b = Board::startpos();
    b.apply_move(pos("e2"), pos("e4"));
    assert_eq!(b.en_passant, Some(pos("e3")));
    assert_eq!(b.halfmove_clock, 0);
    assert!(b.get(pos("e4")).unwrap().moved);

    // Any following move closes the window.
    b.apply_move(pos("g8"), pos("f6"));
    assert_eq!(b.en_passant, None);
    assert_eq!(b.halfmove_clock, 1);
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let (mut b, _) = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    b.apply_move(pos("d7"), pos("d5"));
    assert_eq!(b.en_passant, Some(pos("d6")));
    b.apply_move(pos("e5"), pos("d6"));
    assert_eq!(b.get(pos("d5")), None, "captured pawn must be removed");
    assert_eq!(b.get(pos("d6")).unwrap().kind, PieceKind::Pawn);
}

#[test]
fn castling_moves_the_rook_in_the_same_call() {
    let (mut b, _) = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    b.apply_move(pos("e1"), pos("g1"));
    let king = b.get(pos("g1")).unwrap();
    let rook = b.get(pos("f1")).unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(king.moved && rook.moved);
    assert_eq!(b.get(pos("e1")), None);
    assert_eq!(b.get(pos("h1")), None);
    assert_eq!(b.king(Color::White), pos("g1"));
}

#[test]
fn king_cache_follows_only_the_moved_king() {
    let mut b = Board::startpos();
    b.apply_move(pos("e2"), pos("e4"));
    assert_eq!(b.king(Color::White), pos("e1"));
    assert_eq!(b.king(Color::Black), pos("e8"));
}

#[test]
fn promotion_is_a_separate_overwrite() {
    let (mut b, _) = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    b.apply_move(pos("a7"), pos("a8"));
    // apply_move leaves the pawn; the caller promotes.
    assert_eq!(b.get(pos("a8")).unwrap().kind, PieceKind::Pawn);

    let (mut b, _) = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    b.apply_move_and_promote(pos("a7"), pos("a8"), &mut AutoQueen);
    assert_eq!(b.get(pos("a8")).unwrap().kind, PieceKind::Queen);
}

#[test]
fn halfmove_clock_resets_on_pawn_moves_and_captures() {
    let mut b = Board::startpos();
    b.apply_move(pos("g1"), pos("f3"));
    assert_eq!(b.halfmove_clock, 1);
    b.apply_move(pos("b8"), pos("c6"));
    assert_eq!(b.halfmove_clock, 2);
    b.apply_move(pos("d2"), pos("d4"));
    assert_eq!(b.halfmove_clock, 0);
}

#[test]
fn fen_castling_rights_become_moved_flags() {
    let (b, side) = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
    assert_eq!(side, Color::White);
    assert!(!b.get(pos("e1")).unwrap().moved);
    assert!(!b.get(pos("h1")).unwrap().moved);
    assert!(b.get(pos("a1")).unwrap().moved);
    assert!(!b.get(pos("e8")).unwrap().moved);
    assert!(!b.get(pos("a8")).unwrap().moved);
    assert!(b.get(pos("h8")).unwrap().moved);
}

#[test]
fn same_layout_ignores_moved_flags() {
    let a = Board::startpos();
    let mut b = Board::startpos();
    // Knight out and back: layout identical, flags differ.
    b.apply_move(pos("g1"), pos("f3"));
    b.apply_move(pos("f3"), pos("g1"));
    assert!(a.same_layout(&b));

    let mut c = Board::startpos();
    c.apply_move(pos("e2"), pos("e4"));
    assert!(!a.same_layout(&c));
}
