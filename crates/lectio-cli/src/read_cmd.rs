//! `lectio read` command: fetch and print a chapter.

use anyhow::{Context, Result, bail};

use lectio_core::canon;
use lectio_core::scripture::{Passage, ScriptureClient};

/// Fetch a chapter from the text service and print its verses.
pub async fn run_read(client: &ScriptureClient, reference: &str) -> Result<()> {
    let passage = parse_reference(reference)?;

    let chapter = client
        .fetch_chapter(&passage)
        .await
        .with_context(|| format!("failed to fetch {passage}"))?;

    println!("{} {}", chapter.book, chapter.chapter);
    println!();
    for verse in &chapter.verses {
        println!("{:>3}  {}", verse.verse, verse.text);
    }

    Ok(())
}

/// Parse a reference and check it against the canon before going to the
/// network, so typos fail fast with a useful message.
pub fn parse_reference(reference: &str) -> Result<Passage> {
    let passage: Passage = reference
        .parse()
        .with_context(|| format!("could not parse {reference:?}"))?;

    let Some(book) = canon::book_named(&passage.book) else {
        bail!("unknown book {:?}", passage.book);
    };
    if passage.chapter > book.chapters {
        bail!(
            "{} has only {} chapters, got {}",
            book.name,
            book.chapters,
            passage.chapter
        );
    }

    Ok(passage)
}
