//! Pawn capture tables. White advances toward row 0, Black toward row 7;
//! a pawn attacks only the two forward diagonals.

use crate::board::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

#[inline]
pub const fn pawn_attacks(color: Color, square: usize) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square],
        Color::Black => BLACK_PAWN_ATTACKS[square],
    }
}

const fn generate_pawn_attacks(direction: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let target_row = row + direction;
        let mut attacks = 0u64;

        if target_row >= 0 && target_row < 8 {
            if col > 0 {
                attacks |= 1u64 << ((target_row * 8 + col - 1) as u32);
            }
            if col < 7 {
                attacks |= 1u64 << ((target_row * 8 + col + 1) as u32);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::board::chess_types::{Color, Square};

    fn index(text: &str) -> usize {
        Square::from_algebraic(text).expect("test square should parse").index()
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let expected = (1u64 << index("d3")) | (1u64 << index("f3"));
        assert_eq!(WHITE_PAWN_ATTACKS[index("e2")], expected);
        assert_eq!(pawn_attacks(Color::White, index("e2")), expected);
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        let expected = 1u64 << index("b6");
        assert_eq!(BLACK_PAWN_ATTACKS[index("a7")], expected);
        assert_eq!(pawn_attacks(Color::Black, index("a7")), expected);
    }
}
