//! Square conversions for algebraic coordinates.
//!
//! Column 0 is the a-file; row 0 is rank 8 (Black's back rank), so `e2` is
//! row 6, column 4.

use crate::board::chess_types::Square;
use crate::chess_errors::ChessError;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!("invalid square: {square}")));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid rank: {}",
            rank as char
        )));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Square::new(row, col)
        .ok_or_else(|| ChessError::InvalidAlgebraic(format!("invalid square: {square}")))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::board::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        let a8 = algebraic_to_square("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = algebraic_to_square("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        assert_eq!((e2.row(), e2.col()), (6, 4));

        let square = Square::new(4, 3).expect("d4 should exist");
        assert_eq!(square_to_algebraic(square), "d4");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e10").is_err());
    }
}
