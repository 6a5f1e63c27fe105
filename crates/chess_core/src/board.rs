use crate::types::*;

/// Capability for choosing the piece a pawn promotes to. The interactive
/// front end prompts the player; every hypothetical application (self-check
/// probes, search expansion) uses [`AutoQueen`].
pub trait PromotionChooser {
    fn choose(&mut self, color: Color, at: Pos) -> PieceKind;
}

/// Always promotes to a queen without asking anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoQueen;

impl PromotionChooser for AutoQueen {
    fn choose(&mut self, _color: Color, _at: Pos) -> PieceKind {
        PieceKind::Queen
    }
}

/// The 8x8 board plus the state needed to answer legality questions:
/// cached king squares, the en-passant target window, the status of the
/// last completed move, and the half-move clock for the 50-move draw.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [Option<Piece>; 64],
    kings: [Pos; 2],
    pub en_passant: Option<Pos>,
    pub check: CheckStatus,
    pub halfmove_clock: u32,
}

impl Board {
    /// Standard initial layout, white to move.
    pub fn startpos() -> Board {
        let mut board = Board {
            grid: [None; 64],
            kings: [Pos::new(4, 0), Pos::new(4, 7)],
            en_passant: None,
            check: CheckStatus::NoCheck,
            halfmove_clock: 0,
        };

        for f in 0..8 {
            board.set(Pos::new(f, 1), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Pos::new(f, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            board.set(Pos::new(f as u8, 0), Some(Piece::new(Color::White, kind)));
            board.set(Pos::new(f as u8, 7), Some(Piece::new(Color::Black, kind)));
        }
        board
    }

    /// Build a board from a FEN string, returning the side to move as well.
    /// Castling rights are translated into `moved` flags on the kings and
    /// rooks. Panics on malformed input; this is a test and setup aid, not
    /// a user-facing parser.
    pub fn from_fen(fen: &str) -> (Board, Color) {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 4, "Invalid FEN: expected at least 4 fields");

        let mut board = Board {
            grid: [None; 64],
            kings: [Pos::new(0, 0), Pos::new(0, 0)],
            en_passant: None,
            check: CheckStatus::NoCheck,
            halfmove_clock: parts.get(4).copied().unwrap_or("0").parse().expect("Invalid halfmove clock in FEN"),
        };

        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");
        let mut kings_seen = [0u8; 2];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8; // FEN lists rank 8 .. 1
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as u8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    assert!(file < 8, "Too many files in FEN rank");
                    // Kings and rooks start "moved"; castling rights below
                    // clear the flag where the FEN grants them.
                    let moved = matches!(kind, PieceKind::King | PieceKind::Rook);
                    if kind == PieceKind::King {
                        kings_seen[color.idx()] += 1;
                    }
                    board.set(Pos::new(file, rank), Some(Piece { color, kind, moved }));
                    file += 1;
                }
            }
            assert!(file == 8, "Not enough files in FEN rank");
        }
        assert!(
            kings_seen == [1, 1],
            "FEN must contain exactly one king per side"
        );

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("Invalid side to move in FEN: {}", other),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, rook_file) = match c {
                    'K' => (Color::White, 7),
                    'Q' => (Color::White, 0),
                    'k' => (Color::Black, 7),
                    'q' => (Color::Black, 0),
                    _ => panic!("Invalid castling char in FEN: {}", c),
                };
                let home = color.home_rank();
                board.clear_moved(Pos::new(4, home));
                board.clear_moved(Pos::new(rook_file, home));
            }
        }

        if parts[3] != "-" {
            board.en_passant = Some(Pos::parse(parts[3]).expect("Invalid en-passant square in FEN"));
        }

        (board, side_to_move)
    }

    fn clear_moved(&mut self, at: Pos) {
        if let Some(p) = self.grid[at.idx()].as_mut() {
            p.moved = false;
        }
    }

    pub fn get(&self, at: Pos) -> Option<Piece> {
        self.grid[at.idx()]
    }

    /// Raw square write. Keeps the king-position cache in sync when a king
    /// is placed; all other bookkeeping belongs to `apply_move`.
    pub fn set(&mut self, at: Pos, piece: Option<Piece>) {
        if let Some(p) = piece {
            if p.kind == PieceKind::King {
                self.kings[p.color.idx()] = at;
            }
        }
        self.grid[at.idx()] = piece;
    }

    /// Cached king square; never scans the grid.
    pub fn king(&self, color: Color) -> Pos {
        self.kings[color.idx()]
    }

    /// Full grid snapshot for rendering. No other internal state is exposed
    /// this way.
    pub fn grid(&self) -> &[Option<Piece>; 64] {
        &self.grid
    }

    /// Execute a move unconditionally; legality is the caller's problem.
    ///
    /// Handles the whole-move side effects: marks the piece moved, drags the
    /// rook along on castling, opens/consumes the en-passant window, and
    /// maintains the half-move clock. A pawn reaching the back rank is left
    /// as a pawn; promotion is a separate overwrite by the caller.
    pub fn apply_move(&mut self, from: Pos, to: Pos) {
        let mut piece = self.get(from).expect("apply_move: no piece on from-square");
        let captured = self.get(to).is_some();
        piece.moved = true;

        // Castling: a king stepping two files drags the matching rook across.
        if piece.kind == PieceKind::King && from.file.abs_diff(to.file) == 2 {
            let (rook_from, rook_to) = if to.file == 6 {
                (Pos::new(7, from.rank), Pos::new(5, from.rank))
            } else {
                (Pos::new(0, from.rank), Pos::new(3, from.rank))
            };
            let mut rook = self.get(rook_from).expect("castling without a rook");
            rook.moved = true;
            self.set(rook_from, None);
            self.set(rook_to, Some(rook));
        }

        // En-passant capture: the captured pawn is not on the destination
        // square but beside it, on the mover's starting rank.
        let mut ep_capture = false;
        if piece.kind == PieceKind::Pawn && self.en_passant == Some(to) {
            self.set(Pos::new(to.file, from.rank), None);
            ep_capture = true;
        }

        // The double-step window lasts exactly one ply.
        self.en_passant = None;
        if piece.kind == PieceKind::Pawn && from.rank.abs_diff(to.rank) == 2 {
            self.en_passant = Some(Pos::new(from.file, (from.rank + to.rank) / 2));
        }

        self.set(from, None);
        self.set(to, Some(piece));

        if captured || ep_capture || piece.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
    }

    /// `apply_move` plus the promotion overwrite when a pawn reaches the
    /// back rank. The chooser decides the piece; automated play passes
    /// [`AutoQueen`].
    pub fn apply_move_and_promote(
        &mut self,
        from: Pos,
        to: Pos,
        chooser: &mut dyn PromotionChooser,
    ) {
        self.apply_move(from, to);
        if let Some(p) = self.get(to) {
            if p.kind == PieceKind::Pawn && (to.rank == 0 || to.rank == 7) {
                let kind = chooser.choose(p.color, to);
                debug_assert!(
                    !matches!(kind, PieceKind::Pawn | PieceKind::King),
                    "promotion to pawn or king"
                );
                self.set(
                    to,
                    Some(Piece {
                        color: p.color,
                        kind,
                        moved: true,
                    }),
                );
            }
        }
    }

    /// Piece-layout equality ignoring moved flags, en-passant windows, and
    /// clocks. This is the (deliberately approximate) comparison used by
    /// repetition counting.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.grid
            .iter()
            .zip(other.grid.iter())
            .all(|(a, b)| match (a, b) {
                (None, None) => true,
                (Some(x), Some(y)) => x.kind == y.kind && x.color == y.color,
                _ => false,
            })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
