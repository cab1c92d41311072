//! Recycle Cards Frontend Entry Point

mod config;
mod storage;
mod scheduler;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Run `start` once the document has finished parsing
fn when_ready(start: impl FnOnce() + 'static) {
    let doc = document();
    if doc.ready_state() != "loading" {
        start();
        return;
    }

    let cb = Closure::once_into_js(start);
    if let Err(err) = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref::<js_sys::Function>()) {
        log::error!("failed to wait for DOMContentLoaded: {err:?}");
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }

    when_ready(|| mount_to_body(App));
}
