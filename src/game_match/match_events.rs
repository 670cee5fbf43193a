//! Transition events for transport and rendering collaborators.
//!
//! Every accepted move and every clock forfeit produces one `MatchEvent`.
//! Sequence numbers are contiguous per match, so a remote peer can detect a
//! gap before replaying the carried move through its own `request_move`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::chess_types::Color;
use crate::game_match::clock::Clocks;
use crate::game_match::match_state::MatchStatus;
use crate::moves::move_record::Move;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEventKind {
    MoveApplied { record: Move },
    ClockForfeit { loser: Color },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub sequence: u64,
    pub emitted_at: DateTime<Utc>,
    pub kind: MatchEventKind,
    pub status: MatchStatus,
    pub active_player: Color,
    pub winner: Option<Color>,
    pub clocks: Clocks,
}

impl MatchEvent {
    #[inline]
    pub fn applied_move(&self) -> Option<&Move> {
        match &self.kind {
            MatchEventKind::MoveApplied { record } => Some(record),
            MatchEventKind::ClockForfeit { .. } => None,
        }
    }
}

/// Receives events in sequence order. Called with the match locked, so
/// implementations must not call back into the session.
pub trait MatchObserver: Send {
    fn on_event(&mut self, event: &MatchEvent);
}

impl<F> MatchObserver for F
where
    F: FnMut(&MatchEvent) + Send,
{
    fn on_event(&mut self, event: &MatchEvent) {
        self(event)
    }
}
