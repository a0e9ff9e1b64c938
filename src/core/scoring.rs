//! Round scoring: the double / even / odd rule pipeline.
//!
//! A turn's rolls pass through three ordered stages:
//!
//! 1. **Double**: matching rolls earn a bonus roll; the subtotal is the sum
//!    of everything rolled.
//! 2. **Even**: an even subtotal gains [`EVEN_BONUS`].
//! 3. **Odd**: an odd subtotal loses [`ODD_PENALTY`], floored at zero.
//!
//! Stages 2 and 3 are mutually exclusive on the same value, so exactly one
//! adjustment applies per turn and the result is never negative.
//!
//! The pipeline itself is pure: the bonus roll is drawn up front by
//! [`RoundRolls::roll`], so [`score_round`] is total and deterministic.

use smallvec::SmallVec;

use crate::core::dice::DiceRng;

/// Bonus added to an even subtotal.
pub const EVEN_BONUS: u32 = 10;

/// Penalty subtracted from an odd subtotal (floored at zero).
pub const ODD_PENALTY: u32 = 5;

/// The dice drawn for one scoring turn.
///
/// `extra` is present exactly when the first two rolls match.
///
/// ```
/// use dice_duel::core::{score_round, RoundRolls};
///
/// let rolls = RoundRolls { first: 2, second: 4, extra: None };
/// assert_eq!(score_round(&rolls), 16); // 6 is even: +10
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRolls {
    /// First roll of the turn.
    pub first: u8,
    /// Second roll of the turn.
    pub second: u8,
    /// Bonus roll, drawn only on a double.
    pub extra: Option<u8>,
}

impl RoundRolls {
    /// Draw the rolls for one turn, including the bonus roll on a double.
    pub fn roll(rng: &mut DiceRng) -> Self {
        let first = rng.roll();
        let second = rng.roll();
        let extra = (first == second).then(|| rng.roll());
        Self {
            first,
            second,
            extra,
        }
    }

    /// Whether the first two rolls match.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// Every rolled value in order, bonus roll last.
    #[must_use]
    pub fn values(&self) -> SmallVec<[u8; 3]> {
        let mut values = SmallVec::new();
        values.push(self.first);
        values.push(self.second);
        if let Some(extra) = self.extra {
            values.push(extra);
        }
        values
    }
}

/// Stage 1: sum the rolls, counting the bonus roll drawn on a double.
fn double_stage(rolls: &RoundRolls) -> u32 {
    u32::from(rolls.first) + u32::from(rolls.second) + rolls.extra.map_or(0, u32::from)
}

/// Stage 2: an even subtotal gains the bonus.
fn even_stage(subtotal: u32) -> u32 {
    if subtotal % 2 == 0 {
        subtotal + EVEN_BONUS
    } else {
        subtotal
    }
}

/// Stage 3: an odd subtotal pays the penalty, floored at zero.
fn odd_stage(subtotal: u32) -> u32 {
    if subtotal % 2 == 1 {
        subtotal.saturating_sub(ODD_PENALTY)
    } else {
        subtotal
    }
}

/// Score one turn's rolls through the three stages in order.
#[must_use]
pub fn score_round(rolls: &RoundRolls) -> u32 {
    odd_stage(even_stage(double_stage(rolls)))
}
