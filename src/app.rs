//! Can You Match? Frontend App
//!
//! Builds the session from the embedded level file, provides the store and
//! context, and switches between the start and play screens.

use leptos::prelude::*;
use match_core::{GameConfig, GameSession, MatchResult};
use reactive_stores::Store;
use rolling_logger::LogBuffer;
use tracing::{info, warn};

use crate::components::{GameScreen, LogDrawer, StartScreen};
use crate::context::AppContext;
use crate::driver;
use crate::models::Screen;
use crate::store::GameState;

const LEVELS_TOML: &str = include_str!("../levels.toml");

/// Embedded levels, or the built-in ones if the file does not validate
fn load_config() -> GameConfig {
    match GameConfig::from_toml_str(LEVELS_TOML) {
        Ok(config) => {
            info!(levels = config.level_count(), "levels loaded");
            config
        }
        Err(e) => {
            warn!(error = %e, "levels.toml rejected, using built-in levels");
            GameConfig::default()
        }
    }
}

fn random_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    now ^ (noise << 32)
}

fn start_session() -> MatchResult<GameSession> {
    GameSession::new(load_config(), random_seed())
}

#[component]
pub fn App(logs: LogBuffer) -> impl IntoView {
    let session = match start_session() {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "could not start a game");
            return view! { <p class="fatal">{format!("Could not start a game: {}", e)}</p> }.into_any();
        }
    };

    let store = Store::new(GameState::new(session));
    provide_context(store);

    let screen = signal(Screen::Start);
    let log_open = signal(false);
    let swap = leptos_swap::create_swap_signals();
    let ctx = AppContext::new(screen, log_open, swap, logs);
    provide_context(ctx);

    // Drag-to-swap on the shelf, bound once for the document
    leptos_swap::bind_global_pointerup(swap, move |from, to| driver::play_drag(store, from, to));
    driver::install_countdown(store);

    view! {
        <div class="app-layout">
            <main class="main-content">
                {move || match ctx.screen.get() {
                    Screen::Start => view! { <StartScreen /> }.into_any(),
                    Screen::Playing => view! { <GameScreen /> }.into_any(),
                }}
            </main>

            <footer class="app-footer">
                <button class="log-toggle" on:click=move |_| ctx.toggle_logs()>
                    {move || if ctx.log_open.get() { "Hide log" } else { "Show log" }}
                </button>
            </footer>

            <Show when=move || ctx.log_open.get()>
                <LogDrawer />
            </Show>
        </div>
    }
    .into_any()
}
