//! Crate root module declarations for the cooldown chess core.
//!
//! Exposes the board model, move rules, the real-time match state machine,
//! input decoding, presentation helpers and the debug console so binaries,
//! tests and front-ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
}

pub mod match_state {
    pub mod action_resolver;
    pub mod cooldown_scheduler;
    pub mod events;
    pub mod match_config;
    pub mod match_state;
    pub mod player_side;
}

pub mod input {
    pub mod action_event;
    pub mod direction_repeat;
}

pub mod utils {
    pub mod piece_view;
    pub mod render_match_state;
}

pub mod console {
    pub mod console_top;
}
