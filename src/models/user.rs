use tokio_postgres::Row;

/// Represents a user in the system.
#[derive(Debug, Clone)]
pub struct User {
    /// The unique identifier for the user.
    pub id: i32,
    /// The user's username.
    pub username: String,
    /// The user's hashed password.
    pub password_hash: String,
}

impl From<&Row> for User {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
        }
    }
}
