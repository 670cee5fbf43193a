use crate::board::board::Board;
use crate::board::chess_rules::*;
use crate::board::chess_types::*;
use crate::moves::move_record::Move;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_parser::FenPosition;

pub fn generate_fen(position: &FenPosition) -> String {
    let board = generate_board_field(&position.board);
    let side_to_move = match position.active_player {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(&position.board);
    let en_passant = generate_en_passant_field(position.prior_move.as_ref());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

/// Halfmoves since the last capture or pawn move, continuing from `base`
/// when the whole history is quiet.
pub fn halfmove_clock_after(base: u16, history: &[Move]) -> u16 {
    let mut quiet = 0u16;
    for mv in history.iter().rev() {
        if mv.is_capture() || mv.piece.kind == PieceKind::Pawn {
            return quiet;
        }
        quiet = quiet.saturating_add(1);
    }
    base.saturating_add(quiet)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|square| board.piece_at(square));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn is_unmoved(board: &Board, color: Color, row: u8, col: u8, kind: PieceKind) -> bool {
    matches!(
        Square::new(row, col).and_then(|square| board.piece_at(square)),
        Some(piece) if piece.kind == kind && piece.color == color && !piece.has_moved
    )
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in ALL_COLORS {
        let row = color.back_row();
        if !is_unmoved(board, color, row, KING_START_COL, PieceKind::King) {
            continue;
        }

        let (kingside, queenside) = match color {
            Color::White => ('K', 'Q'),
            Color::Black => ('k', 'q'),
        };
        if is_unmoved(board, color, row, KINGSIDE_ROOK_COL, PieceKind::Rook) {
            out.push(kingside);
        }
        if is_unmoved(board, color, row, QUEENSIDE_ROOK_COL, PieceKind::Rook) {
            out.push(queenside);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

/// The square a double-advancing pawn passed over.
fn generate_en_passant_field(prior_move: Option<&Move>) -> String {
    let Some(mv) = prior_move.filter(|mv| mv.is_double_pawn_advance()) else {
        return "-".to_owned();
    };

    let passed_row = (mv.from.row() + mv.to.row()) / 2;
    match Square::new(passed_row, mv.from.col()) {
        Some(square) => square_to_algebraic(square),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_fen, halfmove_clock_after};
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::board::chess_types::*;
    use crate::move_generation::legal_move_apply::execute_move;
    use crate::utils::fen_parser::parse_fen;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, fen);
        assert_eq!(parse_fen(&generated).expect("generated FEN should parse"), parsed);
    }

    #[test]
    fn en_passant_square_round_trips() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        let parsed = parse_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_moves() {
        let mut position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let mut history = Vec::new();
        for (from, to) in [("g1", "f3"), ("g8", "f6"), ("e2", "e4"), ("b8", "c6")] {
            execute_move(&mut position.board, &mut history, sq(from), sq(to), PieceKind::Queen)
                .expect("move should resolve");
        }
        assert_eq!(halfmove_clock_after(0, &history), 1);
        assert_eq!(halfmove_clock_after(5, &history[..2]), 7);
    }
}
