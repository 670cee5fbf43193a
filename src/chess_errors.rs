//! Errors used throughout the rule engine.
//!
//! `ChessError` is the single error type across the crate. Move-request
//! failures (`IllegalMove`, `InvalidSquare`, `TerminalStateViolation`) are
//! recoverable: the match is left untouched and the caller decides how to
//! report the rejection. Parsing and configuration variants carry the
//! offending input for diagnostics.

use std::fmt;

use thiserror::Error;

use crate::board::chess_types::Square;
use crate::game_match::match_state::MatchStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The from/to pair is not playable for the side to move.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    /// Raw coordinates outside `0..=7`.
    #[error("invalid square ({row}, {col})")]
    InvalidSquare { row: i32, col: i32 },

    /// A move, selection or expiry arrived after the match ended.
    #[error("match already ended in {status}")]
    TerminalStateViolation { status: MatchStatus },

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A deserialized board violates the one-piece-per-square or
    /// one-king-per-color invariant.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    EmptySquare,
    NotActivePlayer,
    NotALegalDestination,
    InvalidPromotion,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::EmptySquare => write!(f, "no piece on the origin square"),
            IllegalMoveReason::NotActivePlayer => {
                write!(f, "piece does not belong to the active player")
            }
            IllegalMoveReason::NotALegalDestination => {
                write!(f, "destination is not a legal move for that piece")
            }
            IllegalMoveReason::InvalidPromotion => {
                write!(f, "promotion choice is not allowed for this move")
            }
        }
    }
}
