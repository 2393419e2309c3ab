//! Todo Frontend
//!
//! Client-side TODO list rendered with Leptos. State lives in memory for
//! the page session and starts from a fixed set of entries.

pub mod app;
pub mod components;
pub mod config;
pub mod logger;
pub mod models;
pub mod state;
pub mod store;

pub use app::App;
