//! Board
//!
//! Target arrangement plus the working arrangement the player rearranges.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::{Category, Item};
use crate::derangement::{derange, fixed_points};
use crate::error::{MatchError, MatchResult};

/// Result of a single swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    /// Positions matching the target after the swap
    pub matches: usize,
    /// Whether the item moved into the second slot is now correct
    pub landed_correct: bool,
}

/// Target and working arrangements of one level attempt
///
/// Both vectors always hold the same items; only `working` is ever mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    target: Vec<Item>,
    working: Vec<Item>,
}

impl Board {
    /// Sample `count` distinct items from the category and derange them
    pub fn deal<R: Rng + ?Sized>(category: Category, count: usize, rng: &mut R) -> MatchResult<Self> {
        let target: Vec<Item> = category.items().choose_multiple(rng, count).copied().collect();
        Self::from_target(target, rng)
    }

    pub fn from_target<R: Rng + ?Sized>(target: Vec<Item>, rng: &mut R) -> MatchResult<Self> {
        let working = derange(&target, rng)?;
        Ok(Self { target, working })
    }

    /// Build a board from explicit arrangements (tests, replays)
    ///
    /// Returns `None` when the two are not permutations of each other.
    pub fn from_parts(target: Vec<Item>, working: Vec<Item>) -> Option<Self> {
        if target.len() != working.len() || sorted_keys(&target) != sorted_keys(&working) {
            return None;
        }
        Some(Self { target, working })
    }

    pub fn target(&self) -> &[Item] {
        &self.target
    }

    pub fn working(&self) -> &[Item] {
        &self.working
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn is_correct_at(&self, index: usize) -> bool {
        matches!((self.working.get(index), self.target.get(index)), (Some(w), Some(t)) if w == t)
    }

    pub fn match_count(&self) -> usize {
        fixed_points(&self.working, &self.target)
    }

    pub fn is_solved(&self) -> bool {
        self.match_count() == self.len()
    }

    pub fn check_slot(&self, index: usize) -> MatchResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(MatchError::SlotOutOfRange { index, len: self.len() })
        }
    }

    /// Swap two working slots and recount matches from scratch
    pub fn swap(&mut self, first: usize, second: usize) -> MatchResult<SwapReport> {
        self.check_slot(first)?;
        self.check_slot(second)?;
        self.working.swap(first, second);
        Ok(SwapReport {
            matches: self.match_count(),
            landed_correct: self.is_correct_at(second),
        })
    }
}

fn sorted_keys(items: &[Item]) -> Vec<&'static str> {
    let mut keys: Vec<_> = items.iter().map(|item| item.key).collect();
    keys.sort_unstable();
    keys
}
