//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_swap::SwapSignals;
use rolling_logger::LogBuffer;

use crate::models::Screen;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible screen - read
    pub screen: ReadSignal<Screen>,
    /// Visible screen - write
    set_screen: WriteSignal<Screen>,
    /// Whether the log drawer is open - read
    pub log_open: ReadSignal<bool>,
    /// Whether the log drawer is open - write
    set_log_open: WriteSignal<bool>,
    /// Drag gesture state for the shelf
    pub swap: SwapSignals,
    /// Recent log lines
    pub logs: StoredValue<LogBuffer>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        log_open: (ReadSignal<bool>, WriteSignal<bool>),
        swap: SwapSignals,
        logs: LogBuffer,
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            log_open: log_open.0,
            set_log_open: log_open.1,
            swap,
            logs: StoredValue::new(logs),
        }
    }

    pub fn show(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    pub fn toggle_logs(&self) {
        self.set_log_open.update(|open| *open = !*open);
    }
}
