//! Shelf Components
//!
//! The playable row of cards and the read-only answer row.

use leptos::prelude::*;
use match_core::Item;

use crate::components::item_card::ItemCardProps;
use crate::components::ItemCard;
use crate::store::{use_game_store, GameStateStoreFields};

/// Row of interactive slots for the running level
#[component]
pub fn Shelf() -> impl IntoView {
    let store = use_game_store();
    // Cards are rebuilt only when a new board is dealt, not on every swap
    let layout = Memo::new(move |_| {
        let session = store.session().read();
        (session.attempt(), session.board().len())
    });

    view! {
        <div class="shelf">
            {move || {
                let (_, len) = layout.get();
                (0..len).map(|slot| ItemCard(ItemCardProps::builder().slot(slot).build())).collect_view()
            }}
        </div>
    }
}

/// Static row showing the solution
#[component]
pub fn AnswerRow(items: Vec<Item>) -> impl IntoView {
    view! {
        <div class="shelf answer-row">
            {items.into_iter().map(|item| view! {
                <div class="item-card" style=format!("--card-color: {};", item.color)>
                    <span class="item-label">{item.label}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
