//! Crate root module declarations for the jumpy16 search engine.
//!
//! This file exposes the board model, move generation, search, engines and
//! utility helpers so the driver binaries, benches and tests can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_types;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod white_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod time_governor;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_codec;
    pub mod board_file;
    pub mod match_harness;
}
