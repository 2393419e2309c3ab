//! UI Components
//!
//! Leptos components composed by the list page.

mod add_todo_form;
mod logout_button;
mod todo_item;

pub use add_todo_form::{accept_title, AddTodoForm};
pub use logout_button::LogoutButton;
pub use todo_item::TodoItem;
