//! Pseudo-legal destination generation, dispatched on piece kind.
//!
//! Geometry only: king safety is enforced one layer up by the legal-move
//! filter.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_record::Move;

/// Destinations for the piece on `square`; empty when the square is empty.
pub fn pseudo_legal_moves(board: &Board, square: Square, history: &[Move]) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let Some(piece) = board.piece_at(square) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, piece, history, &mut out),
        PieceKind::Knight => generate_knight_moves(board, square, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, square, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, square, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, square, piece, &mut out),
        PieceKind::King => generate_king_moves(board, square, piece, &mut out),
    }

    out
}
