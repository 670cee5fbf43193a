//! Sliding piece generation for rooks, bishops and queens.
//!
//! Each direction is walked until the edge, a friendly piece (excluded) or
//! an enemy piece (included, then stop).

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::moves::ray_moves::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, rook: Piece, out: &mut SquareSet) {
    slide(board, from, rook.color, &ROOK_DIRECTIONS, out);
}

pub fn generate_bishop_moves(board: &Board, from: Square, bishop: Piece, out: &mut SquareSet) {
    slide(board, from, bishop.color, &BISHOP_DIRECTIONS, out);
}

pub fn generate_queen_moves(board: &Board, from: Square, queen: Piece, out: &mut SquareSet) {
    slide(board, from, queen.color, &QUEEN_DIRECTIONS, out);
}

fn slide(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], out: &mut SquareSet) {
    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);
        while let Some(target) = current {
            match board.piece_at(target) {
                None => out.insert(target),
                Some(occupant) => {
                    if occupant.color != color {
                        out.insert(target);
                    }
                    break;
                }
            }
            current = target.offset(d_row, d_col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_bishop_moves, generate_queen_moves, generate_rook_moves};
    use crate::board::board::Board;
    use crate::board::chess_types::*;
    use crate::board::square_set::SquareSet;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn rook_stops_before_friend_and_on_enemy() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let board = Board::empty()
            .with_piece(sq("a1"), rook)
            .with_piece(sq("a4"), Piece::new(PieceKind::Pawn, Color::Black))
            .with_piece(sq("c1"), Piece::new(PieceKind::Knight, Color::White));
        let mut out = SquareSet::EMPTY;
        generate_rook_moves(&board, sq("a1"), rook, &mut out);

        let expected: SquareSet = [sq("a2"), sq("a3"), sq("a4"), sq("b1")].into_iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn lone_bishop_and_queen_cover_their_rays() {
        let bishop = Piece::new(PieceKind::Bishop, Color::Black);
        let queen = Piece::new(PieceKind::Queen, Color::Black);
        let board = Board::empty().with_piece(sq("d4"), bishop);

        let mut bishop_out = SquareSet::EMPTY;
        generate_bishop_moves(&board, sq("d4"), bishop, &mut bishop_out);
        assert_eq!(bishop_out.len(), 13);

        let mut queen_out = SquareSet::EMPTY;
        generate_queen_moves(&board, sq("d4"), queen, &mut queen_out);
        assert_eq!(queen_out.len(), 27);
    }

    #[test]
    fn boxed_in_sliders_have_no_moves_at_start() {
        let board = Board::standard();
        let mut out = SquareSet::EMPTY;
        let rook = board.piece_at(sq("h8")).expect("h8 should hold a rook");
        generate_rook_moves(&board, sq("h8"), rook, &mut out);
        let queen = board.piece_at(sq("d1")).expect("d1 should hold a queen");
        generate_queen_moves(&board, sq("d1"), queen, &mut out);
        assert!(out.is_empty());
    }
}
