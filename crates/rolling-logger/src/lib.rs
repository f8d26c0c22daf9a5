//! Rolling Logger
//!
//! `tracing` subscriber for the game frontend. Every event is formatted once,
//! echoed to the platform console and kept in a bounded in-memory buffer that
//! the UI can show. `log` records are bridged in through `tracing-log`.

mod buffer;
mod layer;
mod sink;

pub use buffer::{LogBuffer, LogLine};
pub use layer::RollingLayer;
pub use sink::Sink;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global logger is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the rolling logger as the global subscriber
///
/// Returns the buffer handle; clones of it see every line logged afterwards.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(capacity);
    let layer = RollingLayer::new(buffer.clone(), Sink::platform_default());

    tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(app = app_name, capacity = buffer.capacity(), "logger initialized");
    Ok(buffer)
}
