//! Database query functions for the `notes` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::Note;

/// Insert a new note. Returns the inserted note with server-generated
/// defaults (id, created_at).
pub async fn insert_note(pool: &PgPool, reference: &str, content: &str) -> Result<Note> {
    let note = sqlx::query_as::<_, Note>(
        "INSERT INTO notes (reference, content) \
         VALUES ($1, $2) \
         RETURNING *",
    )
    .bind(reference)
    .bind(content)
    .fetch_one(pool)
    .await
    .context("failed to insert note")?;

    Ok(note)
}

/// List all notes, newest first.
pub async fn list_notes(pool: &PgPool) -> Result<Vec<Note>> {
    let notes = sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY created_at DESC, id DESC")
        .fetch_all(pool)
        .await
        .context("failed to list notes")?;

    Ok(notes)
}

/// Delete a note by id. Fails if the note does not exist.
pub async fn delete_note(pool: &PgPool, id: i32) -> Result<()> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("failed to delete note")?;

    if result.rows_affected() == 0 {
        anyhow::bail!("note {id} not found");
    }

    Ok(())
}
