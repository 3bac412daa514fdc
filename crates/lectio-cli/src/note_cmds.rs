//! `lectio note` commands: add, list, and delete passage notes.

use anyhow::Result;
use sqlx::PgPool;

use lectio_db::queries::notes;

use crate::NoteCommands;

/// Dispatch a `lectio note` subcommand.
pub async fn run_note_command(command: NoteCommands, pool: &PgPool) -> Result<()> {
    match command {
        NoteCommands::Add { reference, content } => run_add(pool, &reference, &content).await,
        NoteCommands::List => run_list(pool).await,
        NoteCommands::Delete { id } => run_delete(pool, id).await,
    }
}

async fn run_add(pool: &PgPool, reference: &str, content: &str) -> Result<()> {
    let note = notes::insert_note(pool, reference, content).await?;
    println!("Note {} added for {}.", note.id, note.reference);
    Ok(())
}

async fn run_list(pool: &PgPool) -> Result<()> {
    let all = notes::list_notes(pool).await?;

    if all.is_empty() {
        println!("No notes yet. Add one with: lectio note add <reference> <text>");
        return Ok(());
    }

    for note in &all {
        println!(
            "#{} [{}] {}",
            note.id,
            note.created_at.format("%Y-%m-%d"),
            note.reference
        );
        println!("    {}", note.content);
    }

    Ok(())
}

async fn run_delete(pool: &PgPool, id: i32) -> Result<()> {
    notes::delete_note(pool, id).await?;
    println!("Note {id} deleted.");
    Ok(())
}
