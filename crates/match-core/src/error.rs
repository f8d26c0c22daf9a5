//! Core Errors
//!
//! Precondition violations raised by the game rules and the level config.

use thiserror::Error;

/// Common result type for game operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Game-rule errors
///
/// Losing a level is not an error; these only cover calls that can never
/// produce a valid game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A derangement of fewer than two items does not exist
    #[error("a derangement needs at least 2 items, got {0}")]
    TooShort(usize),
    /// Items must be distinct for a value-level derangement
    #[error("duplicate item at index {0}")]
    DuplicateItem(usize),
    #[error("slot {index} is out of range for {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
    #[error("configuration has no levels")]
    NoLevels,
    /// The level list failed validation
    #[error("{0}")]
    InvalidConfig(String),
}

/// Level configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse level config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid level config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatchError::TooShort(1).to_string(),
            "a derangement needs at least 2 items, got 1"
        );
        assert_eq!(
            MatchError::SlotOutOfRange { index: 7, len: 4 }.to_string(),
            "slot 7 is out of range for 4 slots"
        );
    }
}
