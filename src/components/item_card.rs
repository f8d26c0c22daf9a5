//! Item Card Component
//!
//! One slot of the shelf. Tap to select, tap another to swap, or drag it
//! onto another slot.

use leptos::prelude::*;
use match_core::GameEvent;

use crate::context::AppContext;
use crate::driver;
use crate::models::card_transform;
use crate::store::{use_game_store, GameStateStoreFields};

#[component]
pub fn ItemCard(slot: usize) -> impl IntoView {
    let store = use_game_store();
    let ctx = expect_context::<AppContext>();
    let swap = ctx.swap;

    let item = move || store.session().read().board().working().get(slot).copied();
    let glyph = store.session().read_untracked().level().category.glyph();

    let class = move || {
        let session = store.session().read();
        let mut class = String::from("item-card");
        if session.selection() == Some(slot) {
            class.push_str(" selected");
        }
        if !session.accepts_input() {
            class.push_str(" locked");
        }
        if swap.dragging_slot_read.get() == Some(slot) {
            class.push_str(" dragging");
        }
        if swap.hover_slot_read.get() == Some(slot) {
            class.push_str(" drop-target");
        }
        class
    };

    let style = move || {
        let offset = store.session().read().in_flight().map(|m| m.offset_of(slot)).unwrap_or(0);
        let drag = (swap.dragging_slot_read.get() == Some(slot)).then(|| swap.drag_delta_read.get());
        let color = item().map(|i| i.color).unwrap_or("transparent");
        format!("--card-color: {}; {}", color, card_transform(offset, drag))
    };

    let on_pointerdown = leptos_swap::make_on_pointerdown(swap, slot);

    view! {
        <div
            class=class
            style=style
            data-slot={slot.to_string()}
            on:pointerdown=move |ev| {
                if store.session().read_untracked().accepts_input() {
                    on_pointerdown(ev);
                }
            }
            on:click=move |_| {
                // The click that trails a drag is not a tap
                if swap.drag_just_ended_read.get_untracked() {
                    return;
                }
                driver::play(store, GameEvent::Select(slot));
            }
        >
            <span class="item-glyph">{glyph}</span>
            <span class="item-label">{move || item().map(|i| i.label).unwrap_or_default()}</span>
        </div>
    }
}
