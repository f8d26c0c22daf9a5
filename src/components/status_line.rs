//! Status Line Component
//!
//! Correct count, the level's remaining resource and the score popup.

use leptos::prelude::*;

use crate::models::{correct_label, delta_label, resource_label};
use crate::store::{use_game_store, GameStateStoreFields};

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_game_store();
    let matches = Memo::new(move |_| store.session().read().board().match_count());
    let resource = Memo::new(move |_| store.session().read().resource());
    // Keyed on the resource too, so equal deltas in a row still replay the popup
    let popup = Memo::new(move |_| {
        let session = store.session().read();
        session.last_delta().map(|delta| (delta, session.resource()))
    });

    view! {
        <div class="status-line">
            <p class="correct-count">{move || correct_label(matches.get())}</p>
            {move || resource_label(resource.get()).map(|label| view! {
                <p class="resource-line">
                    {label}
                    {move || popup.get().map(|(delta, _)| view! {
                        <span class={if delta >= 0 { "delta-popup gain" } else { "delta-popup loss" }}>
                            {delta_label(delta)}
                        </span>
                    })}
                </p>
            })}
        </div>
    }
}
