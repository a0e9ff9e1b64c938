//! Seats and players.
//!
//! ## Seat
//!
//! One of the two positions at the table. Turn order alternates strictly
//! between them.
//!
//! ## Player
//!
//! A logged-in participant and their accumulated score. Scores are mutated
//! only by the state machine and persisted by username when the game ends.

use serde::{Deserialize, Serialize};

/// One of the two positions at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The first player to act each round.
    First,
    /// The second player to act each round.
    Second,
}

impl Seat {
    /// 0-based index into a `[Player; 2]`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Both seats in turn order.
    #[must_use]
    pub const fn both() -> [Seat; 2] {
        [Seat::First, Seat::Second]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "Player 1"),
            Seat::Second => write!(f, "Player 2"),
        }
    }
}

/// A logged-in participant and their accumulated score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    username: String,
    score: u32,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            score: 0,
        }
    }

    /// The player's username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The player's accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points from a completed turn.
    pub(crate) fn award(&mut self, points: u32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_indices() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_seat_other_alternates() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::First.other().other(), Seat::First);
    }

    #[test]
    fn test_seat_display() {
        assert_eq!(format!("{}", Seat::First), "Player 1");
        assert_eq!(format!("{}", Seat::Second), "Player 2");
    }

    #[test]
    fn test_player_starts_at_zero() {
        let player = Player::new("ada");
        assert_eq!(player.username(), "ada");
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_award_accumulates() {
        let mut player = Player::new("ada");
        player.award(16);
        player.award(0);
        player.award(2);
        assert_eq!(player.score(), 18);
    }
}
