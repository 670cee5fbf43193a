//! Crate root module declarations for the chess match rule engine.
//!
//! Exposes the board model, per-piece attack tables, legal move generation
//! and execution, the match state machine with its clocks, and the utility
//! helpers (FEN, notation, rendering) so binaries, tests, and collaborators
//! can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod square_set;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_record;
    pub mod pawn_moves;
    pub mod ray_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod perft;
    pub mod pseudo_legal_generator;
}

pub mod game_match {
    pub mod clock;
    pub mod match_config;
    pub mod match_events;
    pub mod match_machine;
    pub mod match_session;
    pub mod match_state;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod random_playout;
    pub mod render_board;
}
