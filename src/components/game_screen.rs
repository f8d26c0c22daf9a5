//! Game Screen Component
//!
//! Level header plus the view for the current phase: ready prompt, play
//! area, or the answer screen once the level is over.

use leptos::prelude::*;
use match_core::Phase;

use crate::components::{AnswerScreen, ReadyPrompt, Shelf, StatusLine};
use crate::models::rule_lines;
use crate::store::{use_game_store, GameStateStoreFields};

#[component]
pub fn GameScreen() -> impl IntoView {
    let store = use_game_store();
    let phase = Memo::new(move |_| store.session().read().phase());
    let level_number = Memo::new(move |_| store.session().read().level_number());

    view! {
        <section class="game-screen">
            <h2 class="level-title">{move || format!("Level {}", level_number.get())}</h2>
            {move || match phase.get() {
                Phase::NotStarted => view! { <ReadyPrompt /> }.into_any(),
                Phase::InProgress => view! { <PlayArea /> }.into_any(),
                Phase::Won => view! { <AnswerScreen lost=None /> }.into_any(),
                Phase::Lost(reason) => view! { <AnswerScreen lost=Some(reason) /> }.into_any(),
            }}
        </section>
    }
}

/// Prompt, scoring rules, the shelf and the status lines
#[component]
fn PlayArea() -> impl IntoView {
    let store = use_game_store();
    let prompt = store.session().read_untracked().level().prompt.clone();
    let rules = rule_lines(&store.session().read_untracked().level().constraint);

    view! {
        <p class="level-prompt">{prompt}</p>
        {rules.map(|(bonus, penalty)| view! {
            <p class="rule-line">
                <span class="rule-bonus">{bonus}</span>
                <span class="rule-penalty">{penalty}</span>
            </p>
        })}
        <Shelf />
        <StatusLine />
    }
}
