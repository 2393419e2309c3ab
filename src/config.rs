//! App Configuration
//!
//! Compile-time labels, log level and the mock data the list starts with.

use log::LevelFilter;

use crate::models::{Todo, TodoId};

pub const PAGE_TITLE: &str = "TODO App";
pub const INPUT_PLACEHOLDER: &str = "Add a new todo";
pub const ADD_LABEL: &str = "Add";
pub const DELETE_LABEL: &str = "Delete";
pub const LOGOUT_LABEL: &str = "Logout";

/// Shown by the logout button until a real session exists
pub const LOGOUT_MESSAGE: &str = "Logged out!";

pub const EMPTY_SUMMARY: &str = "Nothing to do";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Mock data for initial UI development
const SEED: &[(u64, &str, bool)] = &[
    (1, "Learn Next.js", true),
    (2, "Build a TODO App", false),
    (3, "Deploy to Vercel", false),
];

/// The entries every page load starts with
pub fn seed_todos() -> Vec<Todo> {
    SEED.iter()
        .map(|&(id, title, completed)| Todo::new(TodoId(id), title).with_completed(completed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_todos() {
        let todos = seed_todos();
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id, TodoId(1));
        assert!(todos[0].completed);
        assert_eq!(todos[1].title, "Build a TODO App");
        assert!(!todos[1].completed);
        assert_eq!(todos[2].title, "Deploy to Vercel");
        assert!(!todos[2].completed);
    }
}
