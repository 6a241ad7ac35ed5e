use crate::{
    error::{AppError, Result},
    models::user::User,
};
use deadpool_postgres::Pool;
use tokio_postgres::error::SqlState;

/// Creates a new user in the database.
///
/// Username uniqueness is enforced by the storage layer; a unique violation
/// is surfaced as a `Conflict`.
pub async fn create_user(pool: &Pool, username: &str, password_hash: &str) -> Result<User> {
    let client = pool.get().await?;
    let row = client
        .query_one(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
            "#,
            &[&username, &password_hash],
        )
        .await
        .map_err(|e| {
            if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                AppError::Conflict("Username already taken".to_string())
            } else {
                AppError::Database(e)
            }
        })?;
    Ok(User::from(&row))
}

/// Finds a user by their username.
pub async fn find_by_username(pool: &Pool, username: &str) -> Result<Option<User>> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
            &[&username],
        )
        .await?;
    Ok(row.map(|r| User::from(&r)))
}
