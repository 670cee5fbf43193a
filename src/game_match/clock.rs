//! Two countdown clocks, one per color.
//!
//! Only the active player's clock runs. The first clock to reach zero is
//! reported once, after which the manager stays halted and never goes
//! below zero.

use serde::{Deserialize, Serialize};

use crate::board::chess_types::Color;

/// Remaining clock units per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clocks {
    pub white: u32,
    pub black: u32,
}

impl Clocks {
    pub const fn equal(seconds: u32) -> Self {
        Self {
            white: seconds,
            black: seconds,
        }
    }

    #[inline]
    pub const fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn remaining_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockManager {
    clocks: Clocks,
    increment: u32,
    halted: bool,
    expired: Option<Color>,
}

impl ClockManager {
    pub const fn new(initial_seconds: u32, increment_seconds: u32) -> Self {
        Self {
            clocks: Clocks::equal(initial_seconds),
            increment: increment_seconds,
            halted: false,
            expired: None,
        }
    }

    /// One elapsed unit for `active`. Returns the expired color on the tick
    /// that reaches zero and `None` on every other call.
    pub fn tick(&mut self, active: Color) -> Option<Color> {
        if self.halted {
            return None;
        }

        let remaining = self.clocks.remaining_mut(active);
        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            self.halted = true;
            self.expired = Some(active);
            return Some(active);
        }
        None
    }

    /// Credit the increment to the player who just moved.
    pub fn apply_increment(&mut self, mover: Color) {
        if self.halted || self.increment == 0 {
            return;
        }
        let remaining = self.clocks.remaining_mut(mover);
        *remaining = remaining.saturating_add(self.increment);
    }

    #[inline]
    pub fn halt(&mut self) {
        self.halted = true;
    }

    #[inline]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub const fn expired(&self) -> Option<Color> {
        self.expired
    }

    #[inline]
    pub const fn remaining(&self, color: Color) -> u32 {
        self.clocks.remaining(color)
    }

    #[inline]
    pub const fn snapshot(&self) -> Clocks {
        self.clocks
    }
}

#[cfg(test)]
mod tests {
    use super::ClockManager;
    use crate::board::chess_types::Color;

    #[test]
    fn only_the_active_clock_runs() {
        let mut clock = ClockManager::new(10, 0);
        assert_eq!(clock.tick(Color::White), None);
        assert_eq!(clock.tick(Color::White), None);
        assert_eq!(clock.remaining(Color::White), 8);
        assert_eq!(clock.remaining(Color::Black), 10);
    }

    #[test]
    fn expiry_fires_exactly_once_and_never_goes_negative() {
        let mut clock = ClockManager::new(3, 0);
        assert_eq!(clock.tick(Color::Black), None);
        assert_eq!(clock.tick(Color::Black), None);
        assert_eq!(clock.tick(Color::Black), Some(Color::Black));
        assert_eq!(clock.tick(Color::Black), None);
        assert_eq!(clock.tick(Color::White), None);

        assert!(clock.is_halted());
        assert_eq!(clock.expired(), Some(Color::Black));
        assert_eq!(clock.remaining(Color::Black), 0);
        assert_eq!(clock.remaining(Color::White), 3);
    }

    #[test]
    fn increment_is_credited_until_halted() {
        let mut clock = ClockManager::new(60, 2);
        clock.apply_increment(Color::White);
        assert_eq!(clock.remaining(Color::White), 62);

        clock.halt();
        clock.apply_increment(Color::White);
        assert_eq!(clock.remaining(Color::White), 62);
        assert_eq!(clock.tick(Color::White), None);
    }
}
