use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Rank this color's back-rank pieces start on.
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
    /// Direction this color's pawns advance in (rank delta).
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a promotion choice letter as entered at the prompt.
    pub fn from_promotion_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            _ => None,
        }
    }
}

/// A piece on the board. `moved` feeds castling legality and nothing else;
/// pawn double-step rights are derived from the rank instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece {
            color,
            kind,
            moved: false,
        }
    }
}

/// A square as a (file, rank) pair, both in 0..8. `a1` is (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub file: u8,
    pub rank: u8,
}

impl Pos {
    pub fn new(file: u8, rank: u8) -> Pos {
        debug_assert!(file < 8 && rank < 8);
        Pos { file, rank }
    }

    pub fn idx(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    pub fn from_idx(idx: usize) -> Pos {
        debug_assert!(idx < 64);
        Pos {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    /// Offset by (file, rank) deltas, `None` when off the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Pos> {
        let f = self.file as i8 + df;
        let r = self.rank as i8 + dr;
        if (0..8).contains(&f) && (0..8).contains(&r) {
            Some(Pos::new(f as u8, r as u8))
        } else {
            None
        }
    }

    /// Parse two-character coordinate text like `e2`.
    pub fn parse(s: &str) -> Option<Pos> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Some(Pos::new(b[0] - b'a', b[1] - b'1'))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'1' + self.rank) as char
        )
    }
}

/// A from/to square pair. Promotion choice is not part of the move; it is a
/// follow-up overwrite of the destination square
/// (see `Board::apply_move_and_promote`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    pub fn new(from: Pos, to: Pos) -> Move {
        Move { from, to }
    }

    /// Parse four-character coordinate text like `e2e4`.
    pub fn parse(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Pos::parse(&s[0..2])?;
        let to = Pos::parse(&s[2..4])?;
        Some(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Classification of a completed move, attached to the resulting board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    NoCheck,
    WhiteChecked,
    BlackChecked,
    WhiteMated,
    BlackMated,
    Stalemate,
}

impl CheckStatus {
    pub fn check_on(color: Color) -> CheckStatus {
        match color {
            Color::White => CheckStatus::WhiteChecked,
            Color::Black => CheckStatus::BlackChecked,
        }
    }

    pub fn mate_on(color: Color) -> CheckStatus {
        match color {
            Color::White => CheckStatus::WhiteMated,
            Color::Black => CheckStatus::BlackMated,
        }
    }

    /// True when `color`'s king is attacked (checked or mated).
    pub fn is_check_on(self, color: Color) -> bool {
        matches!(
            (self, color),
            (CheckStatus::WhiteChecked, Color::White)
                | (CheckStatus::WhiteMated, Color::White)
                | (CheckStatus::BlackChecked, Color::Black)
                | (CheckStatus::BlackMated, Color::Black)
        )
    }

    pub fn game_over(self) -> bool {
        matches!(
            self,
            CheckStatus::WhiteMated | CheckStatus::BlackMated | CheckStatus::Stalemate
        )
    }
}
