use serde::{Deserialize, Serialize};

/// Represents an item in the in-memory todo list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// The unique identifier for the todo.
    pub id: i32,
    /// The title of the todo.
    pub title: String,
    /// Whether the todo has been completed.
    pub done: bool,
}
