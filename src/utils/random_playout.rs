//! Seeded random playouts through the public request path.
//!
//! Used to reach arbitrary positions for invariant checks and benches. The
//! same seed always yields the same game.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::game_match::match_config::MatchConfig;
use crate::game_match::match_machine::ChessMatch;
use crate::move_generation::legal_move_filter::all_legal_moves;

/// Play up to `max_plies` uniformly random legal moves from the standard
/// position, stopping early at a terminal status.
pub fn random_playout(seed: u64, max_plies: usize, config: MatchConfig) -> Result<ChessMatch, ChessError> {
    let mut game = ChessMatch::with_config(config)?;
    continue_randomly(&mut game, seed, max_plies)?;
    Ok(game)
}

pub fn continue_randomly(game: &mut ChessMatch, seed: u64, max_plies: usize) -> Result<(), ChessError> {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..max_plies {
        if game.status().is_terminal() {
            break;
        }

        let state = game.state();
        let candidates = all_legal_moves(&state.board, state.active_player, state.en_passant_context());
        let Some(&(from, to)) = candidates.as_slice().choose(&mut rng) else {
            break;
        };
        game.request_move(from, to)?;
    }

    Ok(())
}
