//! Answer Screen Component
//!
//! End of a level: the solution row and the way on. A win moves to the next
//! level (or back to the first after the last one); a loss restarts from
//! level 1.

use leptos::prelude::*;
use match_core::{GameEvent, LossReason};

use crate::components::AnswerRow;
use crate::driver;
use crate::models::{loss_detail, next_label};
use crate::store::{use_game_store, GameStateStoreFields};

#[component]
pub fn AnswerScreen(lost: Option<LossReason>) -> impl IntoView {
    let store = use_game_store();
    let (answer, final_level) = {
        let session = store.session().read_untracked();
        (session.board().target().to_vec(), session.is_final_level())
    };
    let on_continue = move |_| {
        driver::play(store, GameEvent::Continue);
    };

    match lost {
        None => view! {
            <div class="answer-screen won">
                <p class="answer-title">"Here is the answer"</p>
                <AnswerRow items=answer />
                <p class="result-message">"Yay! You win!!"</p>
                <button class="primary-btn" on:click=on_continue>{next_label(final_level)}</button>
            </div>
        }
        .into_any(),
        Some(reason) => view! {
            <div class="answer-screen lost">
                <p class="result-message">"Oh no, you lost :'("</p>
                <p class="loss-detail">{loss_detail(reason)}</p>
                <p class="answer-title">"Here is the answer"</p>
                <AnswerRow items=answer />
                <button class="primary-btn" on:click=on_continue>"Back to Level 1 <-"</button>
            </div>
        }
        .into_any(),
    }
}
