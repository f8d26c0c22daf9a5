//! Global Game State Store
//!
//! Uses Leptos reactive_stores; the whole session lives in one field and
//! every change goes through `store_dispatch`.

use leptos::prelude::*;
use match_core::{GameEvent, GameSession, Outcome, SessionSnapshot};
use reactive_stores::Store;
use tracing::warn;

/// Global game state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct GameState {
    /// Current level, board and remaining resource
    pub session: GameSession,
    /// Number of levels finished (won or lost) since launch
    pub finished_levels: u32,
}

impl GameState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            finished_levels: 0,
        }
    }
}

/// Type alias for the store
pub type GameStore = Store<GameState>;

/// Get the game store from context
pub fn use_game_store() -> GameStore {
    expect_context::<GameStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an event to the session
///
/// Rejected events are logged and reported as `Outcome::Ignored`.
pub fn store_dispatch(store: &GameStore, event: GameEvent) -> Outcome {
    let result = store.session().write().apply(event);
    match result {
        Ok(outcome) => {
            if matches!(outcome, Outcome::Won | Outcome::Lost(_)) {
                *store.finished_levels().write() += 1;
                log_snapshot(&store.session().read_untracked().snapshot());
            }
            outcome
        }
        Err(e) => {
            warn!(?event, error = %e, "event rejected");
            Outcome::Ignored
        }
    }
}

/// Write the snapshot to the browser console as an inspectable object
fn log_snapshot(snapshot: &SessionSnapshot) {
    match serde_wasm_bindgen::to_value(snapshot) {
        Ok(value) => web_sys::console::log_2(&"[GAME] level ended".into(), &value),
        Err(e) => warn!(error = %e, "session snapshot not serializable"),
    }
}
