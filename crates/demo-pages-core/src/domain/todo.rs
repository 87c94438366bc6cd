//! Todo Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A todo item, persisted as part of the stored list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Creation time in milliseconds, unique within a list
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: i64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

impl Entity for TodoItem {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
