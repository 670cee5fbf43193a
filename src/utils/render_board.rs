//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (Black's back rank, rank 8) is printed first so White sits at the
//! bottom, matching the usual diagram orientation.

use crate::board::board::Board;
use crate::board::chess_types::Square;
use crate::game_match::match_state::MatchSnapshot;
use crate::utils::move_notation::{format_clock, piece_symbol};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match Square::new(row, col).and_then(|square| board.piece_at(square)) {
                Some(piece) => out.push(piece_symbol(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line with both clocks.
pub fn render_snapshot(snapshot: &MatchSnapshot) -> String {
    let mut out = render_board(&snapshot.board);
    out.push('\n');
    out.push_str(&format!(
        "{} to move, {} | white {} | black {}",
        snapshot.active_player,
        snapshot.status,
        format_clock(snapshot.clocks.white),
        format_clock(snapshot.clocks.black)
    ));
    if let Some(winner) = snapshot.winner {
        out.push_str(&format!(" | winner {winner}"));
    }
    out
}
