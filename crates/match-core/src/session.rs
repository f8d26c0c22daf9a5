//! Game Session
//!
//! Level state machine driven by discrete events.
//!
//! ```text
//! NotStarted --Begin--> InProgress --solved--> Won  --Continue--> next level
//!                                  --drained--> Lost --Continue--> level 1
//! ```
//!
//! Levels without a ready prompt pass through `NotStarted` straight into
//! `InProgress` when entered.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::{GameConfig, LevelSpec};
use crate::error::{MatchError, MatchResult};
use crate::rules::{LossReason, Resource};

/// Phase of the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Won,
    Lost(LossReason),
}

/// A swap waiting for its animation to finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapMove {
    /// Slot selected first; its item moves to `second`
    pub first: usize,
    pub second: usize,
}

impl SwapMove {
    /// Signed slot distance the item at `index` travels, 0 if not moving
    pub fn offset_of(&self, index: usize) -> isize {
        if index == self.first {
            self.second as isize - self.first as isize
        } else if index == self.second {
            self.first as isize - self.second as isize
        } else {
            0
        }
    }
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start a level that waits on its ready prompt
    Begin,
    /// Tap a slot
    Select(usize),
    /// The in-flight swap animation finished
    SwapCompleted,
    /// One countdown second elapsed for the given attempt
    Tick { attempt: u64 },
    /// Leave the win/lose screen
    Continue,
}

/// What an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not valid in the current phase
    Ignored,
    Started,
    Selected(usize),
    Deselected,
    SwapStarted(SwapMove),
    Swapped { matches: usize, delta: Option<i32> },
    Ticked { seconds_left: u32 },
    Won,
    Lost(LossReason),
    EnteredLevel { level: usize },
}

/// Serializable view of the session for logging
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub level: usize,
    pub phase: Phase,
    pub attempt: u64,
    pub target: Vec<&'static str>,
    pub working: Vec<&'static str>,
    pub matches: usize,
    pub resource: Resource,
    pub selection: Option<usize>,
}

/// The whole game: current level, its board and its remaining resource
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    level_index: usize,
    phase: Phase,
    board: Board,
    resource: Resource,
    selection: Option<usize>,
    in_flight: Option<SwapMove>,
    attempt: u64,
    last_delta: Option<i32>,
    rng: StdRng,
}

fn deal_level(config: &GameConfig, index: usize, rng: &mut StdRng) -> MatchResult<(Board, Resource)> {
    let level = config.level(index).ok_or(MatchError::NoLevels)?;
    let board = Board::deal(level.category, level.item_count, rng)?;
    Ok((board, level.constraint.initial_resource()))
}

impl GameSession {
    /// Start a new game at level 1
    ///
    /// The config is validated first, so every level deals a full row.
    pub fn new(config: GameConfig, seed: u64) -> MatchResult<Self> {
        config
            .validate()
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, resource) = deal_level(&config, 0, &mut rng)?;
        let mut session = Self {
            config,
            level_index: 0,
            phase: Phase::NotStarted,
            board,
            resource,
            selection: None,
            in_flight: None,
            attempt: 1,
            last_delta: None,
            rng,
        };
        session.auto_begin();
        info!(level = 1, attempt = 1, "game session created");
        Ok(session)
    }

    pub fn apply(&mut self, event: GameEvent) -> MatchResult<Outcome> {
        let outcome = match event {
            GameEvent::Begin => self.begin(),
            GameEvent::Select(index) => self.select(index)?,
            GameEvent::SwapCompleted => self.complete_swap()?,
            GameEvent::Tick { attempt } => self.tick(attempt),
            GameEvent::Continue => self.advance()?,
        };
        if outcome != Outcome::Ignored {
            debug!(?event, ?outcome, level = self.level_number(), "event applied");
        }
        Ok(outcome)
    }

    fn begin(&mut self) -> Outcome {
        if self.phase != Phase::NotStarted {
            return Outcome::Ignored;
        }
        self.phase = Phase::InProgress;
        info!(level = self.level_number(), attempt = self.attempt, "level started");
        Outcome::Started
    }

    fn auto_begin(&mut self) {
        if self.level().ready_prompt.is_none() {
            self.begin();
        }
    }

    fn select(&mut self, index: usize) -> MatchResult<Outcome> {
        if self.phase != Phase::InProgress || self.in_flight.is_some() {
            return Ok(Outcome::Ignored);
        }
        self.board.check_slot(index)?;
        let outcome = match self.selection.take() {
            None => {
                self.selection = Some(index);
                Outcome::Selected(index)
            }
            Some(selected) if selected == index => Outcome::Deselected,
            Some(first) => {
                let swap = SwapMove { first, second: index };
                self.in_flight = Some(swap);
                Outcome::SwapStarted(swap)
            }
        };
        Ok(outcome)
    }

    fn complete_swap(&mut self) -> MatchResult<Outcome> {
        let Some(swap) = self.in_flight.take() else {
            return Ok(Outcome::Ignored);
        };
        if self.phase != Phase::InProgress {
            return Ok(Outcome::Ignored);
        }

        let report = self.board.swap(swap.first, swap.second)?;
        let constraint = self.level().constraint;
        let delta = self.resource.record_swap(&constraint, report.landed_correct);
        self.last_delta = delta;

        if report.matches == self.board.len() {
            self.phase = Phase::Won;
            info!(level = self.level_number(), resource = ?self.resource, "level won");
            return Ok(Outcome::Won);
        }
        if let Some(reason) = self.resource.exhausted_after_swap(self.board.len()) {
            return Ok(self.lose(reason));
        }
        Ok(Outcome::Swapped { matches: report.matches, delta })
    }

    fn tick(&mut self, attempt: u64) -> Outcome {
        if attempt != self.attempt || self.phase != Phase::InProgress {
            return Outcome::Ignored;
        }
        match self.resource.tick() {
            None => Outcome::Ignored,
            Some(0) => self.lose(LossReason::OutOfTime),
            Some(seconds_left) => Outcome::Ticked { seconds_left },
        }
    }

    fn lose(&mut self, reason: LossReason) -> Outcome {
        self.phase = Phase::Lost(reason);
        self.selection = None;
        self.in_flight = None;
        info!(level = self.level_number(), ?reason, matches = self.board.match_count(), "level lost");
        Outcome::Lost(reason)
    }

    fn advance(&mut self) -> MatchResult<Outcome> {
        let next = match self.phase {
            Phase::Won if self.is_final_level() => 0,
            Phase::Won => self.level_index + 1,
            Phase::Lost(_) => 0,
            _ => return Ok(Outcome::Ignored),
        };
        self.enter_level(next)?;
        Ok(Outcome::EnteredLevel { level: self.level_number() })
    }

    fn enter_level(&mut self, index: usize) -> MatchResult<()> {
        let (board, resource) = deal_level(&self.config, index, &mut self.rng)?;
        self.level_index = index;
        self.board = board;
        self.resource = resource;
        self.phase = Phase::NotStarted;
        self.selection = None;
        self.in_flight = None;
        self.last_delta = None;
        self.attempt += 1;
        info!(level = self.level_number(), attempt = self.attempt, "entered level");
        self.auto_begin();
        Ok(())
    }

    pub fn level(&self) -> &LevelSpec {
        &self.config.levels[self.level_index]
    }

    /// One-based level number
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    pub fn is_final_level(&self) -> bool {
        self.level_number() == self.config.level_count()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn in_flight(&self) -> Option<SwapMove> {
        self.in_flight
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Score change of the last completed swap on point levels
    pub fn last_delta(&self) -> Option<i32> {
        self.last_delta
    }

    /// Slots take input only while playing and no swap is animating
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::InProgress && self.in_flight.is_none()
    }

    /// Attempt whose countdown should be running, if any
    pub fn ticking_attempt(&self) -> Option<u64> {
        (self.phase == Phase::InProgress && self.level().constraint.is_timed()).then_some(self.attempt)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level: self.level_number(),
            phase: self.phase,
            attempt: self.attempt,
            target: self.board.target().iter().map(|item| item.key).collect(),
            working: self.board.working().iter().map(|item| item.key).collect(),
            matches: self.board.match_count(),
            resource: self.resource,
            selection: self.selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Constraint;

    #[test]
    fn test_new_session_starts_level_one() {
        let session = GameSession::new(GameConfig::default(), 7).unwrap();
        assert_eq!(session.level_number(), 1);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.board().len(), 4);
        assert_eq!(session.board().match_count(), 0);
        assert_eq!(session.resource(), Resource::Unlimited);
        assert_eq!(session.ticking_attempt(), None);
    }

    #[test]
    fn test_empty_config_is_rejected() {
        let config = GameConfig { levels: Vec::new() };
        assert!(matches!(GameSession::new(config, 1), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_item_count_outside_catalog() {
        let mut oversized = GameConfig::default();
        oversized.levels[1].item_count = 10;
        let err = GameSession::new(oversized, 1).unwrap_err();
        assert!(err.to_string().contains("item_count 10 must be between 2 and 7"));

        let mut single = GameConfig::default();
        single.levels[0].item_count = 1;
        assert!(matches!(GameSession::new(single, 1), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_drained_constraint() {
        let mut config = GameConfig::default();
        config.levels[3].constraint = Constraint::Points { start: 0, bonus: 2, penalty: 1 };
        assert!(matches!(GameSession::new(config, 1), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_swap_move_offsets() {
        let swap = SwapMove { first: 1, second: 4 };
        assert_eq!(swap.offset_of(1), 3);
        assert_eq!(swap.offset_of(4), -3);
        assert_eq!(swap.offset_of(2), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = GameSession::new(GameConfig::default(), 3).unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["phase"], "in_progress");
        assert_eq!(json["resource"]["kind"], "unlimited");
        assert_eq!(json["working"].as_array().unwrap().len(), 4);
    }
}
