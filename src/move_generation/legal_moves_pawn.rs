//! Pawn move generation: single and double advances, diagonal captures,
//! and en passant against the immediately preceding move.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::moves::move_record::Move;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    history: &[Move],
    out: &mut SquareSet,
) {
    let direction = pawn.color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty_at(one_step) {
            out.insert(one_step);

            if from.row() == pawn.color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.is_empty_at(two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    // captures and en passant
    for col_delta in [-1i8, 1i8] {
        let Some(target) = from.offset(direction, col_delta) else {
            continue;
        };

        match board.piece_at(target) {
            Some(occupant) if occupant.color != pawn.color => out.insert(target),
            Some(_) => {}
            None => {
                if is_en_passant_target(board, from, pawn, target, history) {
                    out.insert(target);
                }
            }
        }
    }
}

/// En passant is open only when the last move was an enemy double advance
/// that landed beside `from` on the file being entered.
pub fn is_en_passant_target(
    board: &Board,
    from: Square,
    pawn: Piece,
    target: Square,
    history: &[Move],
) -> bool {
    let Some(last) = history.last() else {
        return false;
    };

    if !last.is_double_pawn_advance() || last.color() == pawn.color {
        return false;
    }
    if last.to.row() != from.row() || last.to.col() != target.col() {
        return false;
    }

    matches!(
        board.piece_at(last.to),
        Some(Piece { kind: PieceKind::Pawn, color, .. }) if color != pawn.color
    )
}
