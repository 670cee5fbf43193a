//! Attack evaluator.
//!
//! Raw attack geometry only: whether an attacking piece's own king would be
//! exposed is ignored. Used for check detection and castling path safety.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::ray_moves::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};

/// A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .pieces(by_color)
        .any(|(from, piece)| piece_attacks_square(board, from, piece, square))
}

/// Attack predicate for a single piece standing on `from`.
pub fn piece_attacks_square(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    if from == target {
        return false;
    }

    let target_mask = target.bit();
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from.index()) & target_mask != 0,
        PieceKind::Knight => knight_attacks(from.index()) & target_mask != 0,
        PieceKind::King => king_attacks(from.index()) & target_mask != 0,
        PieceKind::Rook => {
            ROOK_RAYS[from.index()] & target_mask != 0 && is_path_clear(board, from, target)
        }
        PieceKind::Bishop => {
            BISHOP_RAYS[from.index()] & target_mask != 0 && is_path_clear(board, from, target)
        }
        PieceKind::Queen => {
            QUEEN_RAYS[from.index()] & target_mask != 0 && is_path_clear(board, from, target)
        }
    }
}

/// True when `from` and `to` share a rank, file or diagonal and every
/// square strictly between them is empty.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || (d_row == 0 && d_col == 0) {
        return false;
    }

    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty_at(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_path_clear, is_square_attacked};
    use crate::board::board::Board;
    use crate::board::chess_types::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn pawns_attack_diagonally_but_not_ahead() {
        let board = Board::empty().with_piece(sq("e4"), Piece::new(PieceKind::Pawn, Color::White));
        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));

        let black = Board::empty().with_piece(sq("e5"), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(is_square_attacked(&black, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&black, sq("d6"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let board = Board::empty()
            .with_piece(sq("a1"), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(sq("a4"), Piece::new(PieceKind::Knight, Color::White));
        assert!(is_square_attacked(&board, sq("a4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("a5"), Color::Black));
        assert!(is_square_attacked(&board, sq("h1"), Color::Black));
    }

    #[test]
    fn queen_attacks_along_diagonal_and_file() {
        let board = Board::empty().with_piece(sq("d4"), Piece::new(PieceKind::Queen, Color::White));
        assert!(is_square_attacked(&board, sq("h8"), Color::White));
        assert!(is_square_attacked(&board, sq("d8"), Color::White));
        assert!(!is_square_attacked(&board, sq("e6"), Color::White));
    }

    #[test]
    fn knight_jumps_over_blockers() {
        let board = Board::standard();
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(is_square_attacked(&board, sq("c6"), Color::Black));
    }

    #[test]
    fn check_requires_an_attacked_king() {
        let board = Board::empty()
            .with_piece(sq("e1"), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq("e8"), Piece::new(PieceKind::Rook, Color::Black));
        assert!(is_king_in_check(&board, Color::White));

        let shielded = board.with_piece(sq("e2"), Piece::new(PieceKind::Pawn, Color::White));
        assert!(!is_king_in_check(&shielded, Color::White));
        assert!(!is_king_in_check(&Board::standard(), Color::Black));
    }

    #[test]
    fn path_clear_rejects_unaligned_squares() {
        let board = Board::empty();
        assert!(is_path_clear(&board, sq("a1"), sq("h8")));
        assert!(!is_path_clear(&board, sq("a1"), sq("b3")));
        assert!(!is_path_clear(&board, sq("a1"), sq("a1")));
    }
}
