//! Logout Button Component
//!
//! Placeholder until a session exists: shows an alert, changes nothing.

use leptos::prelude::*;

use crate::config;

fn show_logout_notice() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .alert_with_message(config::LOGOUT_MESSAGE)
        .map_err(|e| format!("{:?}", e))
}

#[component]
pub fn LogoutButton() -> impl IntoView {
    let logout = move |_| {
        if let Err(e) = show_logout_notice() {
            log::warn!("[LOGOUT] alert failed: {}", e);
        }
    };

    view! {
        <button class="logout-btn" on:click=logout>
            {config::LOGOUT_LABEL}
        </button>
    }
}
