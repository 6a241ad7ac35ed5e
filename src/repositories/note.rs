use crate::{error::Result, models::note::Note};
use deadpool_postgres::Pool;

// Every statement here filters by user_id; there is no unscoped path to a
// note row.

/// Lists a user's notes, newest first.
///
/// # Arguments
///
/// * `pool` - The database connection pool.
/// * `user_id` - The ID of the owning user.
///
/// # Returns
///
/// A `Result` containing the user's notes.
pub async fn list_by_owner(pool: &Pool, user_id: i32) -> Result<Vec<Note>> {
    let client = pool.get().await?;
    let rows = client
        .query(
            r#"
            SELECT id, user_id, title, content
            FROM notes
            WHERE user_id = $1
            ORDER BY id DESC
            "#,
            &[&user_id],
        )
        .await?;
    Ok(rows.iter().map(Note::from).collect())
}

/// Inserts a note owned by the given user and returns the created row.
pub async fn create(
    pool: &Pool,
    user_id: i32,
    title: &str,
    content: Option<&str>,
) -> Result<Note> {
    let client = pool.get().await?;
    let row = client
        .query_one(
            r#"
            INSERT INTO notes (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content
            "#,
            &[&user_id, &title, &content],
        )
        .await?;
    Ok(Note::from(&row))
}

/// Updates a note filtered by id AND owner.
///
/// Returns the number of rows affected; zero means the note does not exist
/// or belongs to a different user.
pub async fn update(
    pool: &Pool,
    id: i32,
    user_id: i32,
    title: &str,
    content: Option<&str>,
) -> Result<u64> {
    let client = pool.get().await?;
    let affected = client
        .execute(
            r#"
            UPDATE notes
            SET title = $1, content = $2
            WHERE id = $3 AND user_id = $4
            "#,
            &[&title, &content, &id, &user_id],
        )
        .await?;
    Ok(affected)
}

/// Deletes a note filtered by id AND owner.
///
/// Returns the number of rows affected; zero means the note does not exist
/// or belongs to a different user.
pub async fn delete(pool: &Pool, id: i32, user_id: i32) -> Result<u64> {
    let client = pool.get().await?;
    let affected = client
        .execute(
            r#"
            DELETE FROM notes
            WHERE id = $1 AND user_id = $2
            "#,
            &[&id, &user_id],
        )
        .await?;
    Ok(affected)
}
