//! Recorded move: one immutable entry of a match's history.

use serde::{Deserialize, Serialize};

use crate::board::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promotion_piece: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    /// True for a pawn that advanced two rows, the only move that opens
    /// an en passant reply.
    #[inline]
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
