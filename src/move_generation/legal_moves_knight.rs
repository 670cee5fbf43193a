use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut SquareSet) {
    let own_occ = board.occupancy(knight.color);
    out.insert_mask(knight_attacks(from.index()) & !own_occ);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::board::board::Board;
    use crate::board::chess_types::*;
    use crate::board::square_set::SquareSet;

    #[test]
    fn starting_knight_skips_own_pawns() {
        let board = Board::standard();
        let g1 = Square::from_algebraic("g1").expect("g1 should parse");
        let knight = board.piece_at(g1).expect("g1 should hold a knight");
        let mut out = SquareSet::EMPTY;
        generate_knight_moves(&board, g1, knight, &mut out);

        let expected: SquareSet = ["f3", "h3"]
            .iter()
            .map(|s| Square::from_algebraic(s).expect("target should parse"))
            .collect();
        assert_eq!(out, expected);
    }
}
