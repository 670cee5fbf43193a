//! Human-readable move history lines and clock text.

use crate::board::chess_types::*;
use crate::moves::move_record::Move;

pub fn piece_symbol(piece: Piece) -> char {
    piece_kind_symbol(piece.color, piece.kind)
}

pub fn piece_kind_symbol(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

/// One history line, e.g. `♙ e7 → e8 x♜ =♕`.
pub fn describe_move(mv: &Move) -> String {
    let mut out = format!("{} {} → {}", piece_symbol(mv.piece), mv.from, mv.to);

    if let Some(captured) = mv.captured_piece {
        out.push_str(" x");
        out.push(piece_symbol(captured));
    }
    if mv.is_castling {
        out.push_str(" (Castling)");
    }
    if mv.is_en_passant {
        out.push_str(" (En Passant)");
    }
    if let Some(promotion) = mv.promotion_piece {
        out.push_str(" =");
        out.push(piece_kind_symbol(mv.color(), promotion));
    }

    out
}

/// Numbered history lines starting at `1.`.
pub fn describe_history(history: &[Move]) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .map(|(index, mv)| format!("{}. {}", index + 1, describe_move(mv)))
        .collect()
}

/// `m:ss`, minutes unpadded.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
