//! Move executor.
//!
//! `resolve_move` computes the complete board effect of a validated from/to
//! pair (capture, en passant removal, castling rook, promotion, moved flags)
//! together with its history record, without touching the input board.
//! `execute_move` commits that result and appends the record.

use crate::board::board::Board;
use crate::board::chess_rules::*;
use crate::board::chess_types::*;
use crate::moves::move_record::Move;

/// Board after the move plus the record describing it.
///
/// `promotion` is the kind a pawn becomes on the promotion row; callers pass
/// `PieceKind::Queen` for the auto-queen policy. It is ignored for every
/// other move, and the record then carries `promotion_piece: None`.
pub fn resolve_move(board: &Board, from: Square, to: Square, promotion: PieceKind) -> Option<(Board, Move)> {
    let piece = board.piece_at(from)?;
    let mut next = *board;
    next.remove(from);

    let is_en_passant = piece.kind == PieceKind::Pawn && from.col() != to.col() && board.is_empty_at(to);
    let is_castling = piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2;

    let captured_piece = if is_en_passant {
        // The passed pawn sits beside `from`, on the file being entered.
        Square::new(from.row(), to.col()).and_then(|square| next.remove(square))
    } else {
        next.remove(to)
    };

    let promotion_piece = (piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row())
        .then_some(promotion);
    let placed = match promotion_piece {
        Some(kind) => Piece {
            kind,
            ..piece.moved()
        },
        None => piece.moved(),
    };
    next.place(to, placed);

    if is_castling {
        let (rook_from_col, rook_to_col) = if to.col() > from.col() {
            (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
        } else {
            (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
        };
        if let (Some(rook_from), Some(rook_to)) = (
            Square::new(from.row(), rook_from_col),
            Square::new(from.row(), rook_to_col),
        ) {
            if let Some(rook) = next.remove(rook_from) {
                next.place(rook_to, rook.moved());
            }
        }
    }

    let record = Move {
        from,
        to,
        piece,
        captured_piece,
        is_en_passant,
        is_castling,
        promotion_piece,
    };
    Some((next, record))
}

/// Apply a validated move in place and append it to `history`.
pub fn execute_move(
    board: &mut Board,
    history: &mut Vec<Move>,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> Option<Move> {
    let (next, record) = resolve_move(board, from, to, promotion)?;
    *board = next;
    history.push(record);
    Some(record)
}
