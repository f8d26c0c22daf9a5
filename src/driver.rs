//! Game Driver
//!
//! Feeds player input into the store and schedules the timed follow-ups:
//! swap completion after the slide animation, and the level countdown.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use match_core::{GameEvent, Outcome};
use tracing::debug;

use crate::models::{drag_events, SWAP_ANIMATION_MS, TICK_MS};
use crate::store::{store_dispatch, GameStore, GameStateStoreFields};

/// Dispatch a player event; a started swap completes once its animation ends
pub fn play(store: GameStore, event: GameEvent) -> Outcome {
    let outcome = store_dispatch(&store, event);
    if let Outcome::SwapStarted(swap) = outcome {
        spawn_local(async move {
            TimeoutFuture::new(SWAP_ANIMATION_MS).await;
            debug!(first = swap.first, second = swap.second, "swap animation done");
            store_dispatch(&store, GameEvent::SwapCompleted);
        });
    }
    outcome
}

/// Swap two slots after a drag
pub fn play_drag(store: GameStore, from: usize, to: usize) {
    let selection = store.session().read_untracked().selection();
    for event in drag_events(selection, from, to) {
        play(store, event);
    }
}

/// Run a one-second countdown whenever a timed level is in progress
///
/// Each attempt gets its own tick loop; the loop ends as soon as a tick is
/// not counted, which happens once the level is won, lost or left.
pub fn install_countdown(store: GameStore) {
    let ticking = Memo::new(move |_| store.session().read().ticking_attempt());

    Effect::new(move |_| {
        let Some(attempt) = ticking.get() else {
            return;
        };
        debug!(attempt, "countdown started");
        spawn_local(async move {
            loop {
                TimeoutFuture::new(TICK_MS).await;
                match store_dispatch(&store, GameEvent::Tick { attempt }) {
                    Outcome::Ticked { .. } => continue,
                    outcome => {
                        debug!(attempt, ?outcome, "countdown stopped");
                        break;
                    }
                }
            }
        });
    });
}
