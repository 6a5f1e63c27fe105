//! ASCII board rendering and status text.

use chess_core::{Board, CheckStatus, Color, Piece, PieceKind, Pos};

/// Letter for a piece: uppercase white, lowercase black.
fn piece_char(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

/// Render the board from white's point of view, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  +-----------------+\n");
    for rank in (0..8u8).rev() {
        out.push((b'1' + rank) as char);
        out.push_str(" | ");
        for file in 0..8u8 {
            match board.get(Pos::new(file, rank)) {
                Some(p) => out.push(piece_char(p)),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str("  +-----------------+\n");
    out.push_str("    a b c d e f g h\n");
    out
}

pub fn status_line(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::NoCheck => "no check",
        CheckStatus::WhiteChecked => "check on white",
        CheckStatus::BlackChecked => "check on black",
        CheckStatus::WhiteMated => "checkmate, black wins",
        CheckStatus::BlackMated => "checkmate, white wins",
        CheckStatus::Stalemate => "stalemate, draw",
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
