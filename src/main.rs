//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_ui::{config, logger, App};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("[MAIN] logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
