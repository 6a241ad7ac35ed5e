use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Represents a note owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// The unique identifier for the note.
    pub id: i32,
    /// The ID of the user who owns the note.
    pub user_id: i32,
    /// The title of the note.
    pub title: String,
    /// The body of the note.
    pub content: Option<String>,
}

impl From<&Row> for Note {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            user_id: row.get("user_id"),
            title: row.get("title"),
            content: row.get("content"),
        }
    }
}
