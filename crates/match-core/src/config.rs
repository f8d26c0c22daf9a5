//! Level Configuration
//!
//! The ordered level list, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::error::ConfigError;
use crate::rules::Constraint;

/// One level of the campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub category: Category,
    pub item_count: usize,
    /// Instruction shown above the shelf
    pub prompt: String,
    /// When set, the level waits on this prompt until the player starts it
    #[serde(default)]
    pub ready_prompt: Option<String>,
    pub constraint: Constraint,
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub levels: Vec<LevelSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelSpec {
                    category: Category::Cans,
                    item_count: 4,
                    prompt: "Match these cans to the correct position!!".to_string(),
                    ready_prompt: None,
                    constraint: Constraint::Unlimited,
                },
                LevelSpec {
                    category: Category::Bottles,
                    item_count: 5,
                    prompt: "Match these bottles to the correct position within 15 swaps!".to_string(),
                    ready_prompt: None,
                    constraint: Constraint::SwapBudget { swaps: 15 },
                },
                LevelSpec {
                    category: Category::CerealBoxes,
                    item_count: 6,
                    prompt: "Match these cereal boxes to the correct position within 45 seconds!!".to_string(),
                    ready_prompt: Some(
                        "Next Level: Match 6 cereal boxes to the correct position within 45 seconds!!"
                            .to_string(),
                    ),
                    constraint: Constraint::Countdown { seconds: 45 },
                },
                LevelSpec {
                    category: Category::CupNoodles,
                    item_count: 6,
                    prompt: "Match these cup noodles to their correct positions with:".to_string(),
                    ready_prompt: None,
                    constraint: Constraint::Points { start: 6, bonus: 2, penalty: 1 },
                },
            ],
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML level list
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::Invalid("no levels defined".to_string()));
        }
        for (i, level) in self.levels.iter().enumerate() {
            let number = i + 1;
            let available = level.category.items().len();
            if level.item_count < 2 || level.item_count > available {
                return Err(ConfigError::Invalid(format!(
                    "level {}: item_count {} must be between 2 and {} for {}",
                    number,
                    level.item_count,
                    available,
                    level.category.label()
                )));
            }
            let drained = match level.constraint {
                Constraint::Unlimited => false,
                Constraint::SwapBudget { swaps } => swaps == 0,
                Constraint::Countdown { seconds } => seconds == 0,
                Constraint::Points { start, bonus, penalty } => start <= 0 || bonus < 0 || penalty < 0,
            };
            if drained {
                return Err(ConfigError::Invalid(format!(
                    "level {}: constraint {:?} leaves nothing to play with",
                    number, level.constraint
                )));
            }
        }
        Ok(())
    }

    /// Level by zero-based index
    pub fn level(&self, index: usize) -> Option<&LevelSpec> {
        self.levels.get(index)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
