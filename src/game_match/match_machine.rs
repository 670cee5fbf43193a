//! Match state machine.
//!
//! `ChessMatch` is the only writer of its `MatchState`. Every request is
//! validated against the legal-move filter before anything changes, so a
//! rejected request leaves board, history, clocks and status exactly as
//! they were. Accepted moves and forfeits return the `MatchEvent` that
//! describes the transition.

use chrono::Utc;
use log::{debug, info, trace, warn};

use crate::board::chess_types::*;
use crate::board::square_set::SquareSet;
use crate::chess_errors::{ChessError, IllegalMoveReason};
use crate::game_match::clock::Clocks;
use crate::game_match::match_config::{MatchConfig, PromotionPolicy};
use crate::game_match::match_events::{MatchEvent, MatchEventKind};
use crate::game_match::match_state::{MatchSnapshot, MatchState, MatchStatus};
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::legal_move_filter::legal_moves;
use crate::moves::move_record::Move;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::parse_long_algebraic;

/// Result of one `select_square` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected {
        square: Square,
        destinations: SquareSet,
    },
    Deselected,
    Moved(MatchEvent),
    /// An empty or enemy square with nothing selected.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ChessMatch {
    state: MatchState,
    config: MatchConfig,
    selected: Option<Square>,
    next_sequence: u64,
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessMatch {
    /// Standard position with the default configuration.
    pub fn new() -> Self {
        let config = MatchConfig::default();
        Self::assemble(MatchState::new(&config), config)
    }

    pub fn with_config(config: MatchConfig) -> Result<Self, ChessError> {
        config.validate()?;
        Ok(Self::assemble(MatchState::new(&config), config))
    }

    pub fn from_fen(fen: &str, config: MatchConfig) -> Result<Self, ChessError> {
        config.validate()?;
        let position = parse_fen(fen)?;
        Ok(Self::assemble(MatchState::from_position(position, &config), config))
    }

    /// Resume a persisted match.
    pub fn from_state(state: MatchState, config: MatchConfig) -> Result<Self, ChessError> {
        config.validate()?;
        for color in ALL_COLORS {
            if state.board.count(color, PieceKind::King) != 1 {
                return Err(ChessError::InvalidBoard(format!(
                    "expected exactly one {color} king"
                )));
            }
        }
        Ok(Self::assemble(state, config))
    }

    /// Re-apply `moves` from the standard position through the normal
    /// request path.
    pub fn replay(config: MatchConfig, moves: &[Move]) -> Result<Self, ChessError> {
        let mut game = Self::with_config(config)?;
        game.apply_all(moves)?;
        Ok(game)
    }

    pub fn replay_from_fen(fen: &str, config: MatchConfig, moves: &[Move]) -> Result<Self, ChessError> {
        let mut game = Self::from_fen(fen, config)?;
        game.apply_all(moves)?;
        Ok(game)
    }

    /// Events continue numbering after the moves already in `state`.
    fn assemble(state: MatchState, config: MatchConfig) -> Self {
        let next_sequence = state.move_history.len() as u64 + 1;
        Self {
            state,
            config,
            selected: None,
            next_sequence,
        }
    }

    fn apply_all(&mut self, moves: &[Move]) -> Result<(), ChessError> {
        for mv in moves {
            self.request_move_with_promotion(mv.from, mv.to, mv.promotion_piece)?;
        }
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[inline]
    pub fn status(&self) -> MatchStatus {
        self.state.status
    }

    #[inline]
    pub fn active_player(&self) -> Color {
        self.state.active_player
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    #[inline]
    pub fn clocks(&self) -> Clocks {
        self.state.clocks()
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.snapshot()
    }

    pub fn to_fen(&self) -> String {
        self.state.to_fen()
    }

    /// Legal destinations for the piece on `square`; empty once the match
    /// has ended.
    pub fn legal_moves_from(&self, square: Square) -> SquareSet {
        if self.state.status.is_terminal() {
            return SquareSet::EMPTY;
        }
        legal_moves(&self.state.board, square, self.state.en_passant_context())
    }

    /// Two-step input: pick an own piece, then one of its destinations.
    pub fn select_square(&mut self, square: Square) -> Result<SelectionOutcome, ChessError> {
        self.ensure_not_terminal()?;

        let own_piece = self
            .state
            .board
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.state.active_player);

        match self.selected {
            Some(selected) if selected == square => {
                self.selected = None;
                debug!("deselected {square}");
                Ok(SelectionOutcome::Deselected)
            }
            _ if own_piece => {
                self.selected = Some(square);
                let destinations = self.legal_moves_from(square);
                debug!("selected {square} with {} destinations", destinations.len());
                Ok(SelectionOutcome::Selected {
                    square,
                    destinations,
                })
            }
            None => Ok(SelectionOutcome::Ignored),
            Some(selected) => {
                self.selected = None;
                if self.legal_moves_from(selected).contains(square) {
                    self.request_move(selected, square).map(SelectionOutcome::Moved)
                } else {
                    warn!("rejected selection {selected}{square}: not a legal destination");
                    Err(ChessError::IllegalMove {
                        from: selected,
                        to: square,
                        reason: IllegalMoveReason::NotALegalDestination,
                    })
                }
            }
        }
    }

    pub fn request_move(&mut self, from: Square, to: Square) -> Result<MatchEvent, ChessError> {
        self.request_move_with_promotion(from, to, None)
    }

    /// Raw coordinates, validated before anything else.
    pub fn request_move_at(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MatchEvent, ChessError> {
        let from = Square::try_new(from_row, from_col)?;
        let to = Square::try_new(to_row, to_col)?;
        self.request_move(from, to)
    }

    /// Long algebraic text such as `e2e4` or `e7e8n`.
    pub fn request_move_lan(&mut self, text: &str) -> Result<MatchEvent, ChessError> {
        let request = parse_long_algebraic(text)?;
        self.request_move_with_promotion(request.from, request.to, request.promotion)
    }

    pub fn request_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MatchEvent, ChessError> {
        if let Err(err) = self.ensure_not_terminal() {
            warn!("rejected move {from}{to}: {err}");
            return Err(err);
        }

        let promotion_kind = match self.validate_request(from, to, promotion) {
            Ok(kind) => kind,
            Err(err) => {
                warn!("rejected move {from}{to}: {err}");
                return Err(err);
            }
        };

        let mover = self.state.active_player;
        let record = execute_move(
            &mut self.state.board,
            &mut self.state.move_history,
            from,
            to,
            promotion_kind,
        )
        .ok_or(ChessError::IllegalMove {
            from,
            to,
            reason: IllegalMoveReason::EmptySquare,
        })?;

        self.selected = None;
        self.state.clock.apply_increment(mover);
        self.state.active_player = mover.opposite();

        let status = MatchStatus::evaluate(
            &self.state.board,
            self.state.active_player,
            self.state.en_passant_context(),
        );
        self.state.status = status;
        if status == MatchStatus::Checkmate {
            self.state.winner = Some(mover);
        }
        if status.is_terminal() {
            self.state.clock.halt();
            info!("match ended in {status} after {from}{to}, winner {:?}", self.state.winner);
        }

        debug!("applied {from}{to}, status {status}, {} to move", self.state.active_player);
        Ok(self.emit(MatchEventKind::MoveApplied { record }))
    }

    /// Forfeit for `color`; the opponent wins.
    pub fn clock_expired(&mut self, color: Color) -> Result<MatchEvent, ChessError> {
        self.ensure_not_terminal()?;

        self.state.clock.halt();
        self.state.status = MatchStatus::Forfeit;
        self.state.winner = Some(color.opposite());
        self.selected = None;
        info!("{color} clock expired, {} wins on time", color.opposite());

        Ok(self.emit(MatchEventKind::ClockForfeit { loser: color }))
    }

    /// One clock unit for the active player. Returns the forfeit event when
    /// this tick exhausts the clock.
    pub fn tick(&mut self) -> Option<MatchEvent> {
        if self.state.status.is_terminal() {
            return None;
        }

        let active = self.state.active_player;
        let expired = self.state.clock.tick(active)?;
        trace!("{active} clock expired on tick");
        self.clock_expired(expired).ok()
    }

    pub fn advance_clock(&mut self, units: u32) -> Option<MatchEvent> {
        for _ in 0..units {
            if self.state.status.is_terminal() {
                break;
            }
            if let Some(event) = self.tick() {
                return Some(event);
            }
        }
        trace!(
            "advanced clock by {units}, white {} black {}",
            self.state.clock.remaining(Color::White),
            self.state.clock.remaining(Color::Black)
        );
        None
    }

    fn ensure_not_terminal(&self) -> Result<(), ChessError> {
        if self.state.status.is_terminal() {
            return Err(ChessError::TerminalStateViolation {
                status: self.state.status,
            });
        }
        Ok(())
    }

    fn validate_request(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<PieceKind, ChessError> {
        let illegal = |reason| ChessError::IllegalMove { from, to, reason };

        let piece = self
            .state
            .board
            .piece_at(from)
            .ok_or(illegal(IllegalMoveReason::EmptySquare))?;
        if piece.color != self.state.active_player {
            return Err(illegal(IllegalMoveReason::NotActivePlayer));
        }
        if !self.legal_moves_from(from).contains(to) {
            return Err(illegal(IllegalMoveReason::NotALegalDestination));
        }

        let promotes = piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
        match (promotes, promotion) {
            (_, None) => Ok(PieceKind::Queen),
            (true, Some(PieceKind::Queen)) => Ok(PieceKind::Queen),
            (true, Some(kind))
                if self.config.promotion == PromotionPolicy::Choice && kind.is_promotion_target() =>
            {
                Ok(kind)
            }
            _ => Err(illegal(IllegalMoveReason::InvalidPromotion)),
        }
    }

    fn emit(&mut self, kind: MatchEventKind) -> MatchEvent {
        let event = MatchEvent {
            sequence: self.next_sequence,
            emitted_at: Utc::now(),
            kind,
            status: self.state.status,
            active_player: self.state.active_player,
            winner: self.state.winner,
            clocks: self.state.clocks(),
        };
        self.next_sequence += 1;
        event
    }
}
