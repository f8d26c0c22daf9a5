//! Ready Prompt Component
//!
//! Shown for levels that wait before play starts; Start begins the level
//! (and its countdown).

use leptos::prelude::*;
use match_core::GameEvent;

use crate::driver;
use crate::store::{use_game_store, GameStateStoreFields};

#[component]
pub fn ReadyPrompt() -> impl IntoView {
    let store = use_game_store();
    let text = {
        let session = store.session().read_untracked();
        let level = session.level();
        level.ready_prompt.clone().unwrap_or_else(|| level.prompt.clone())
    };

    view! {
        <div class="ready-prompt">
            <p class="level-prompt">{text}</p>
            <button class="primary-btn" on:click=move |_| {
                driver::play(store, GameEvent::Begin);
            }>
                "Start"
            </button>
        </div>
    }
}
