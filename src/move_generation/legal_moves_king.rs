use crate::board::board::Board;
use crate::board::chess_rules::*;
use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut SquareSet) {
    let own_occ = board.occupancy(king.color);
    out.insert_mask(king_attacks(from.index()) & !own_occ);

    generate_castling_moves(board, from, king, out);
}

/// Castling is offered as the two-column king step when king and rook are
/// unmoved, the squares between them are empty, and neither the king's
/// square nor any square it crosses or lands on is attacked.
fn generate_castling_moves(board: &Board, king_from: Square, king: Piece, out: &mut SquareSet) {
    if king.has_moved || king_from.row() != king.color.back_row() || king_from.col() != KING_START_COL
    {
        return;
    }

    // Cannot castle out of check.
    if is_king_in_check(board, king.color) {
        return;
    }

    let row = king_from.row();
    let enemy = king.color.opposite();

    for (rook_col, king_target_col) in [
        (KINGSIDE_ROOK_COL, KINGSIDE_KING_TARGET_COL),
        (QUEENSIDE_ROOK_COL, QUEENSIDE_KING_TARGET_COL),
    ] {
        let Some(rook_sq) = Square::new(row, rook_col) else {
            continue;
        };
        let rook_ready = matches!(
            board.piece_at(rook_sq),
            Some(Piece { kind: PieceKind::Rook, color, has_moved: false }) if color == king.color
        );
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_col > KING_START_COL {
            (KING_START_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_START_COL)
        };
        let between_empty = (low..high)
            .filter_map(|col| Square::new(row, col))
            .all(|square| board.is_empty_at(square));
        if !between_empty {
            continue;
        }

        let step: i8 = if king_target_col > KING_START_COL { 1 } else { -1 };
        let crossed = [king_from.offset(0, step), king_from.offset(0, 2 * step)];
        let path_safe = crossed
            .iter()
            .flatten()
            .all(|square| !is_square_attacked(board, *square, enemy));
        if !path_safe {
            continue;
        }

        if let Some(target) = Square::new(row, king_target_col) {
            out.insert(target);
        }
    }
}
