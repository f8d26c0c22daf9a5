#![allow(warnings)]
//! Can You Match? Frontend Entry Point

mod models;
mod context;
mod store;
mod driver;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use rolling_logger::LogBuffer;

const LOG_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();
    let logs = match rolling_logger::init_logger("can-match", LOG_CAPACITY) {
        Ok(buffer) => buffer,
        Err(e) => {
            web_sys::console::warn_1(&e.to_string().into());
            LogBuffer::new(LOG_CAPACITY)
        }
    };
    mount_to_body(move || view! { <App logs=logs /> });
}
