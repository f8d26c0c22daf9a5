//! Start Screen Component

use leptos::prelude::*;
use tracing::info;

use crate::context::AppContext;
use crate::models::Screen;

#[component]
pub fn StartScreen() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <section class="start-screen">
            <h1 class="title">"Can You Match?"</h1>
            <button
                class="primary-btn"
                on:click=move |_| {
                    info!("game started");
                    ctx.show(Screen::Playing);
                }
            >
                "Start Game"
            </button>
        </section>
    }
}
