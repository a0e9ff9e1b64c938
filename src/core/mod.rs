//! Core game types: dice, scoring, players, and the state machine.
//!
//! Everything here is pure and I/O-free; persistence and prompting live in
//! the `store`, `auth`, and `cli` modules.

pub mod dice;
pub mod player;
pub mod scoring;
pub mod state;

pub use dice::{DiceRng, MAX_FACE, MIN_FACE};
pub use player::{Player, Seat};
pub use scoring::{score_round, RoundRolls, EVEN_BONUS, ODD_PENALTY};
pub use state::{GameState, Phase, RoundReport, TiebreakReport, TOTAL_ROUNDS};
