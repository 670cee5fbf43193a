//! Match status and the persisted shape of one game.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::game_match::clock::{ClockManager, Clocks};
use crate::game_match::match_config::MatchConfig;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::has_legal_moves;
use crate::moves::move_record::Move;
use crate::utils::fen_generator::{generate_fen, halfmove_clock_after};
use crate::utils::fen_parser::FenPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
    Forfeit,
}

impl MatchStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchStatus::Checkmate | MatchStatus::Stalemate | MatchStatus::Forfeit
        )
    }

    /// Status for `to_move` on `board`, given the history that decides en
    /// passant availability.
    pub fn evaluate(board: &Board, to_move: Color, history: &[Move]) -> Self {
        let in_check = is_king_in_check(board, to_move);
        let can_move = has_legal_moves(board, to_move, history);
        match (in_check, can_move) {
            (true, false) => MatchStatus::Checkmate,
            (false, false) => MatchStatus::Stalemate,
            (true, true) => MatchStatus::Check,
            (false, true) => MatchStatus::Active,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchStatus::Active => "active",
            MatchStatus::Check => "check",
            MatchStatus::Checkmate => "checkmate",
            MatchStatus::Stalemate => "stalemate",
            MatchStatus::Forfeit => "forfeit",
        };
        f.write_str(text)
    }
}

const fn first_fullmove() -> u16 {
    1
}

/// Everything needed to resume a game: board, history, clocks and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub board: Board,
    pub active_player: Color,
    pub move_history: Vec<Move>,
    pub status: MatchStatus,
    pub winner: Option<Color>,
    pub clock: ClockManager,
    /// Double advance played before the recorded history began, when the
    /// game started from a FEN with an en-passant target.
    #[serde(default)]
    pub prior_move: Option<Move>,
    #[serde(default)]
    pub start_halfmove_clock: u16,
    #[serde(default = "first_fullmove")]
    pub start_fullmove_number: u16,
}

impl MatchState {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            board: Board::standard(),
            active_player: Color::White,
            move_history: Vec::new(),
            status: MatchStatus::Active,
            winner: None,
            clock: ClockManager::new(config.initial_clock_seconds, config.increment_seconds),
            prior_move: None,
            start_halfmove_clock: 0,
            start_fullmove_number: 1,
        }
    }

    /// State for an arbitrary position, with the status evaluated for the
    /// side to move.
    pub fn from_position(position: FenPosition, config: &MatchConfig) -> Self {
        let mut state = Self {
            board: position.board,
            active_player: position.active_player,
            move_history: Vec::new(),
            status: MatchStatus::Active,
            winner: None,
            clock: ClockManager::new(config.initial_clock_seconds, config.increment_seconds),
            prior_move: position.prior_move,
            start_halfmove_clock: position.halfmove_clock,
            start_fullmove_number: position.fullmove_number,
        };
        state.status = MatchStatus::evaluate(&state.board, state.active_player, state.en_passant_context());
        if state.status == MatchStatus::Checkmate {
            state.winner = Some(state.active_player.opposite());
        }
        if state.status.is_terminal() {
            state.clock.halt();
        }
        state
    }

    /// History whose last entry decides en passant: the recorded moves, or
    /// the synthesized prior move before any were played.
    pub fn en_passant_context(&self) -> &[Move] {
        if self.move_history.is_empty() {
            self.prior_move.as_slice()
        } else {
            &self.move_history
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.en_passant_context().last()
    }

    #[inline]
    pub fn clocks(&self) -> Clocks {
        self.clock.snapshot()
    }

    pub fn to_fen_position(&self) -> FenPosition {
        let black_moves = self
            .move_history
            .iter()
            .filter(|mv| mv.color() == Color::Black)
            .count();
        FenPosition {
            board: self.board,
            active_player: self.active_player,
            prior_move: self.last_move().copied(),
            halfmove_clock: halfmove_clock_after(self.start_halfmove_clock, &self.move_history),
            fullmove_number: self
                .start_fullmove_number
                .saturating_add(u16::try_from(black_moves).unwrap_or(u16::MAX)),
        }
    }

    pub fn to_fen(&self) -> String {
        generate_fen(&self.to_fen_position())
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board,
            active_player: self.active_player,
            status: self.status,
            winner: self.winner,
            clocks: self.clocks(),
            move_history: self.move_history.clone(),
        }
    }
}

/// Read-only view handed to rendering and transport collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub board: Board,
    pub active_player: Color,
    pub status: MatchStatus,
    pub winner: Option<Color>,
    pub clocks: Clocks,
    pub move_history: Vec<Move>,
}
