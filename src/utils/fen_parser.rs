//! FEN-to-position parser.
//!
//! Builds a `Board` and side to move from Forsyth-Edwards Notation. Castling
//! rights are folded into the `has_moved` flags of kings and rooks, and an
//! en-passant target becomes a synthesized prior double advance so the
//! history-driven pawn generator sees it.

use crate::board::board::Board;
use crate::board::chess_rules::*;
use crate::board::chess_types::*;
use crate::chess_errors::ChessError;
use crate::moves::move_record::Move;
use crate::utils::algebraic::algebraic_to_square;

/// A position parsed from FEN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub active_player: Color,
    /// The double advance implied by the en-passant field, if any.
    pub prior_move: Option<Move>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl FenPosition {
    #[inline]
    pub fn prior_moves(&self) -> &[Move] {
        self.prior_move.as_slice()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CastlingRights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

/// Parse a FEN string. The halfmove and fullmove fields may be omitted.
pub fn parse_fen(fen: &str) -> Result<FenPosition, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_clock = match parts.next() {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid halfmove clock: {text}")))?,
        None => 0,
    };
    let fullmove_number = match parts.next() {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid fullmove number: {text}")))?,
        None => 1,
    };

    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let mut board = parse_board(board_part)?;
    for color in ALL_COLORS {
        if board.count(color, PieceKind::King) != 1 {
            return Err(invalid(&format!("expected exactly one {color} king")));
        }
    }

    let active_player = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    apply_moved_flags(&mut board, rights);
    let prior_move = parse_en_passant(en_passant_part, &board, active_player)?;

    Ok(FenPosition {
        board,
        active_player,
        prior_move,
        halfmove_clock,
        fullmove_number,
    })
}

fn invalid(message: &str) -> ChessError {
    ChessError::InvalidFen(message.to_owned())
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += step;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}' in board layout")))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| invalid("board rank has too many files"))?;
            board.place(square, Piece::new(kind, color));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.kingside[Color::White.index()] = true,
            'Q' => rights.queenside[Color::White.index()] = true,
            'k' => rights.kingside[Color::Black.index()] = true,
            'q' => rights.queenside[Color::Black.index()] = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// Kings and rooks keep `has_moved == false` only where a castling right
/// survives; pawns off their starting row have moved.
fn apply_moved_flags(board: &mut Board, rights: CastlingRights) {
    let occupied: Vec<(Square, Piece)> = ALL_COLORS
        .iter()
        .flat_map(|color| board.pieces(*color).collect::<Vec<_>>())
        .collect();

    for (square, piece) in occupied {
        let color_idx = piece.color.index();
        let on_back_row = square.row() == piece.color.back_row();
        let has_moved = match piece.kind {
            PieceKind::King => {
                !(on_back_row
                    && square.col() == KING_START_COL
                    && (rights.kingside[color_idx] || rights.queenside[color_idx]))
            }
            PieceKind::Rook => {
                let kingside = on_back_row && square.col() == KINGSIDE_ROOK_COL && rights.kingside[color_idx];
                let queenside =
                    on_back_row && square.col() == QUEENSIDE_ROOK_COL && rights.queenside[color_idx];
                !(kingside || queenside)
            }
            PieceKind::Pawn => square.row() != piece.color.pawn_start_row(),
            _ => false,
        };
        board.place(square, Piece { has_moved, ..piece });
    }
}

fn parse_en_passant(
    en_passant_part: &str,
    board: &Board,
    active_player: Color,
) -> Result<Option<Move>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let mover = active_player.opposite();
    let direction = mover.pawn_direction();
    let (Some(from), Some(to)) = (target.offset(-direction, 0), target.offset(direction, 0)) else {
        return Err(invalid(&format!("en-passant square off the board: {en_passant_part}")));
    };

    let pawn_present = matches!(
        board.piece_at(to),
        Some(Piece { kind: PieceKind::Pawn, color, .. }) if color == mover
    );
    if from.row() != mover.pawn_start_row() || !pawn_present {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} does not follow a double advance"
        )));
    }

    Ok(Some(Move {
        from,
        to,
        piece: Piece::new(PieceKind::Pawn, mover),
        captured_piece: None,
        is_en_passant: false,
        is_castling: false,
        promotion_piece: None,
    }))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::board::board::Board;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::board::chess_types::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn starting_fen_matches_standard_board() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position.board, Board::standard());
        assert_eq!(position.active_player, Color::White);
        assert_eq!(position.fullmove_number, 1);
        assert!(position.prior_move.is_none());
    }

    #[test]
    fn missing_castling_rights_mark_pieces_moved() {
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let flag = |s: &str| position.board.piece_at(sq(s)).map(|p| p.has_moved);

        assert_eq!(flag("e1"), Some(false));
        assert_eq!(flag("h1"), Some(false));
        assert_eq!(flag("a1"), Some(true));
        assert_eq!(flag("e8"), Some(false));
        assert_eq!(flag("a8"), Some(false));
        assert_eq!(flag("h8"), Some(true));
    }

    #[test]
    fn en_passant_field_becomes_prior_double_advance() {
        let position = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let prior = position.prior_move.expect("prior double advance should be synthesized");
        assert_eq!(prior.from, sq("d7"));
        assert_eq!(prior.to, sq("d5"));
        assert_eq!(prior.color(), Color::Black);
        assert!(prior.is_double_pawn_advance());
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e3 0 1").is_err());
    }

    #[test]
    fn move_counters_are_optional() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("short FEN should parse");
        assert_eq!(position.active_player, Color::Black);
        assert_eq!(position.halfmove_clock, 0);
    }
}
