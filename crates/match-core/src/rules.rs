//! Level Rules
//!
//! Per-level constraints and the resource each one drains.

use serde::{Deserialize, Serialize};

/// What limits the player on a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// No way to lose
    Unlimited,
    /// Fixed number of swaps
    SwapBudget { swaps: u32 },
    /// Countdown in whole seconds, started explicitly
    Countdown { seconds: u32 },
    /// Point pool: `bonus` per correct swap, `penalty` per incorrect one
    Points { start: i32, bonus: i32, penalty: i32 },
}

impl Constraint {
    pub fn initial_resource(&self) -> Resource {
        match *self {
            Constraint::Unlimited => Resource::Unlimited,
            Constraint::SwapBudget { swaps } => Resource::Swaps { left: swaps },
            Constraint::Countdown { seconds } => Resource::Seconds { left: seconds },
            Constraint::Points { start, .. } => Resource::Points { points: start, correct: 0 },
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, Constraint::Countdown { .. })
    }
}

/// Why a level was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    OutOfSwaps,
    OutOfTime,
    OutOfPoints,
}

/// Remaining resource of the running level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Unlimited,
    Swaps { left: u32 },
    Seconds { left: u32 },
    Points { points: i32, correct: u32 },
}

impl Resource {
    /// Charge a completed swap. Returns the score delta on point levels.
    pub fn record_swap(&mut self, constraint: &Constraint, landed_correct: bool) -> Option<i32> {
        match (self, constraint) {
            (Resource::Swaps { left }, _) => {
                *left = left.saturating_sub(1);
                None
            }
            (Resource::Points { points, correct }, Constraint::Points { bonus, penalty, .. }) => {
                let delta = if landed_correct {
                    *correct += 1;
                    *bonus
                } else {
                    penalty.saturating_neg()
                };
                *points = points.saturating_add(delta);
                Some(delta)
            }
            _ => None,
        }
    }

    /// Loss check after a swap that did not solve the board
    pub fn exhausted_after_swap(&self, len: usize) -> Option<LossReason> {
        match *self {
            Resource::Swaps { left: 0 } => Some(LossReason::OutOfSwaps),
            Resource::Points { points, correct } if points <= 0 && (correct as usize) < len => {
                Some(LossReason::OutOfPoints)
            }
            _ => None,
        }
    }

    /// Advance the countdown by one second. Returns the seconds left, or
    /// `None` if this resource is not a countdown.
    pub fn tick(&mut self) -> Option<u32> {
        match self {
            Resource::Seconds { left } => {
                *left = left.saturating_sub(1);
                Some(*left)
            }
            _ => None,
        }
    }
}
