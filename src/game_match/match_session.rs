//! Thread-safe match session with a running clock.
//!
//! All mutations, moves and clock ticks alike, go through one
//! `parking_lot::Mutex`, so they never interleave. The ticker thread waits
//! on a stop channel between ticks and re-checks the status under the lock
//! before every tick; terminal transitions halt the clock inside the same
//! critical section, so no tick can land after a match has ended.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::chess_errors::ChessError;
use crate::game_match::match_config::MatchConfig;
use crate::game_match::match_events::{MatchEvent, MatchObserver};
use crate::game_match::match_machine::{ChessMatch, SelectionOutcome};
use crate::game_match::match_state::MatchSnapshot;

struct Inner {
    game: ChessMatch,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl Inner {
    fn dispatch(&mut self, event: &MatchEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

struct Ticker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

pub struct MatchSession {
    inner: Arc<Mutex<Inner>>,
    ticker: Option<Ticker>,
}

impl MatchSession {
    pub fn new(config: MatchConfig) -> Result<Self, ChessError> {
        Ok(Self::start(ChessMatch::with_config(config)?))
    }

    /// Take ownership of `game` and start its clock.
    pub fn start(game: ChessMatch) -> Self {
        Self::start_observed(game, Vec::new())
    }

    /// Like `start`, with observers registered before the first tick.
    pub fn start_observed(game: ChessMatch, observers: Vec<Box<dyn MatchObserver>>) -> Self {
        let interval = Duration::from_millis(game.config().tick_interval_ms);
        let terminal = game.status().is_terminal();
        let inner = Arc::new(Mutex::new(Inner { game, observers }));

        let ticker = if terminal {
            None
        } else {
            let (stop_tx, stop_rx) = mpsc::channel();
            let shared = Arc::clone(&inner);
            let handle = thread::spawn(move || run_ticker(shared, stop_rx, interval));
            Some(Ticker { stop_tx, handle })
        };

        info!("match session started, tick interval {interval:?}");
        Self { inner, ticker }
    }

    pub fn subscribe<O>(&self, observer: O)
    where
        O: MatchObserver + 'static,
    {
        self.inner.lock().observers.push(Box::new(observer));
    }

    pub fn request_move(&self, from: Square, to: Square) -> Result<MatchEvent, ChessError> {
        self.apply(|game| game.request_move(from, to))
    }

    pub fn request_move_with_promotion(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MatchEvent, ChessError> {
        self.apply(|game| game.request_move_with_promotion(from, to, promotion))
    }

    pub fn request_move_lan(&self, text: &str) -> Result<MatchEvent, ChessError> {
        self.apply(|game| game.request_move_lan(text))
    }

    pub fn clock_expired(&self, color: Color) -> Result<MatchEvent, ChessError> {
        self.apply(|game| game.clock_expired(color))
    }

    pub fn select_square(&self, square: Square) -> Result<SelectionOutcome, ChessError> {
        let mut inner = self.inner.lock();
        let outcome = inner.game.select_square(square)?;
        if let SelectionOutcome::Moved(event) = &outcome {
            inner.dispatch(event);
        }
        Ok(outcome)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.inner.lock().game.snapshot()
    }

    /// Read access to the match under the session lock.
    pub fn with_match<R>(&self, read: impl FnOnce(&ChessMatch) -> R) -> R {
        read(&self.inner.lock().game)
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.handle.is_finished())
    }

    /// Stop the ticker and wait for it to exit. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        // The ticker may already have exited and dropped its receiver.
        let _ = ticker.stop_tx.send(());
        if ticker.handle.join().is_err() {
            warn!("clock ticker panicked before stop");
        }
        info!("match session stopped");
    }

    fn apply<F>(&self, mutate: F) -> Result<MatchEvent, ChessError>
    where
        F: FnOnce(&mut ChessMatch) -> Result<MatchEvent, ChessError>,
    {
        let mut inner = self.inner.lock();
        let event = mutate(&mut inner.game)?;
        inner.dispatch(&event);
        Ok(event)
    }
}

impl Drop for MatchSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_ticker(shared: Arc<Mutex<Inner>>, stop_rx: Receiver<()>, interval: Duration) {
    loop {
        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }

        let mut inner = shared.lock();
        if inner.game.status().is_terminal() {
            break;
        }
        if let Some(event) = inner.game.tick() {
            inner.dispatch(&event);
            break;
        }
    }
    debug!("clock ticker exited");
}
