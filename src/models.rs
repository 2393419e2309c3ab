//! Frontend Models
//!
//! The todo entity and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Todo identifier (wall-clock milliseconds for entries created in the UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl TodoId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Display text, stored as submitted
    pub title: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// New active todo
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Copy of this todo with `completed` replaced
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
