//! Legal-move filter.
//!
//! Simulates every pseudo-legal candidate and drops those that leave the
//! mover's own king attacked. This single rule covers pins, king steps into
//! attacked squares, and en passant captures that uncover a rank attack.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::move_generation::legal_move_apply::resolve_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal_generator::pseudo_legal_moves;
use crate::moves::move_record::Move;

pub fn legal_moves(board: &Board, square: Square, history: &[Move]) -> SquareSet {
    let Some(piece) = board.piece_at(square) else {
        return SquareSet::EMPTY;
    };

    let mut legal = SquareSet::EMPTY;
    for to in pseudo_legal_moves(board, square, history).iter() {
        if !leaves_king_in_check(board, square, to, piece.color) {
            legal.insert(to);
        }
    }
    legal
}

/// True if any `color` piece has at least one legal destination.
pub fn has_legal_moves(board: &Board, color: Color, history: &[Move]) -> bool {
    board
        .pieces(color)
        .any(|(square, _)| !legal_moves(board, square, history).is_empty())
}

/// Every legal from/to pair for `color`, grouped by origin square.
pub fn all_legal_moves(board: &Board, color: Color, history: &[Move]) -> Vec<(Square, Square)> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces(color) {
        out.extend(legal_moves(board, from, history).iter().map(|to| (from, to)));
    }
    out
}

fn leaves_king_in_check(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    // The promotion kind cannot change whether the mover's king is attacked.
    match resolve_move(board, from, to, PieceKind::Queen) {
        Some((simulated, _)) => is_king_in_check(&simulated, mover),
        None => true,
    }
}
