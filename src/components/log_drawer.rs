//! Log Drawer Component
//!
//! Recent log lines and the current session snapshot as JSON.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_game_store, GameStateStoreFields};

#[component]
pub fn LogDrawer() -> impl IntoView {
    let store = use_game_store();
    let ctx = expect_context::<AppContext>();
    let (refresh, set_refresh) = signal(0u32);

    let lines = move || {
        // Log lines are not reactive; re-read when a level ends or on demand
        let _ = refresh.get();
        let _ = store.finished_levels().get();
        ctx.logs.with_value(|logs| logs.recent())
    };

    let snapshot = move || {
        let snapshot = store.session().read().snapshot();
        serde_json::to_string_pretty(&snapshot).unwrap_or_else(|e| format!("snapshot unavailable: {}", e))
    };

    view! {
        <aside class="log-drawer">
            <div class="log-drawer-header">
                <span>{move || format!("{} levels finished", store.finished_levels().get())}</span>
                <button on:click=move |_| set_refresh.update(|n| *n += 1)>"Refresh"</button>
                <button on:click=move |_| {
                    ctx.logs.with_value(|logs| logs.clear());
                    set_refresh.update(|n| *n += 1);
                }>"Clear"</button>
            </div>
            <ol class="log-lines">
                {move || lines().into_iter().rev().map(|line| view! {
                    <li class=format!("log-line {}", line.level.as_str().to_lowercase())>{line.to_string()}</li>
                }).collect_view()}
            </ol>
            <pre class="session-snapshot">{snapshot}</pre>
        </aside>
    }
}
