//! Can You Match? - Game Core
//!
//! Rules for the shelf-matching puzzle, free of any UI:
//! - catalog: the items each level draws from
//! - derangement: fixed-point-free shuffles
//! - board: target and working arrangements, swap evaluation
//! - rules: per-level constraints and resources
//! - session: the level state machine
//! - config: level definitions loaded from TOML

mod board;
mod catalog;
mod config;
mod derangement;
mod error;
mod rules;
mod session;
mod tests;

pub use board::{Board, SwapReport};
pub use catalog::{Category, Item};
pub use config::{GameConfig, LevelSpec};
pub use derangement::{derange, fixed_points};
pub use error::{ConfigError, MatchError, MatchResult};
pub use rules::{Constraint, LossReason, Resource};
pub use session::{GameEvent, GameSession, Outcome, Phase, SessionSnapshot, SwapMove};
