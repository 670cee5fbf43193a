//! Canonical chess-rule constants.
//!
//! Static rule literals used to set up the initial position, validate
//! castling geometry, and seed the default time control.

use crate::board::chess_types::PieceKind;

/// Back-rank order from column 0 (a-file) to column 7 (h-file).
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Columns the king lands on and the castled rook lands on.
pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;

/// Seconds on each clock at the start of a match.
pub const DEFAULT_CLOCK_SECONDS: u32 = 600;
