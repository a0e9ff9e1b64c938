//! # dice-duel
//!
//! A two-player console dice game: authenticated players roll through five
//! scored rounds, with a sudden-death tie-break and a persisted leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: dice, scoring, and the state machine perform no I/O
//!    and have no error paths. Operations return reports; the CLI decides
//!    how to show them.
//!
//! 2. **Explicit session state**: the game state, the roster of active
//!    usernames, and the store handle are constructed per session and
//!    passed down. No ambient globals.
//!
//! 3. **Commit on success**: every store update loads the document, applies
//!    a fallible closure, and writes back only if it returned `Ok`.
//!
//! ## Modules
//!
//! - `core`: dice source, scoring pipeline, players, game state machine
//! - `auth`: password hashing, signup/login, session roster
//! - `store`: JSON record store with commit-on-success updates
//! - `cli`: interactive prompts and round-by-round display
//! - `error`: the crate error taxonomy

pub mod auth;
pub mod cli;
pub mod core;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    score_round, DiceRng, GameState, Phase, Player, RoundReport, RoundRolls, Seat, TiebreakReport,
    EVEN_BONUS, MAX_FACE, MIN_FACE, ODD_PENALTY, TOTAL_ROUNDS,
};

pub use crate::auth::{login, register, SessionRoster};

pub use crate::error::{Error, Result};

pub use crate::store::{Document, ScoreRecord, Store, UserRecord};
