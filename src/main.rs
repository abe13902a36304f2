//! Todos Frontend Entry Point

mod app;
mod components;
mod logger;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[MAIN] Logger already set: {}", e).into());
    }
    mount_to_body(App);
}
