//! `lectio insight` and `lectio ask`: AI commentary commands.

use anyhow::Result;

use lectio_core::insight::InsightProvider;

use crate::read_cmd::parse_reference;

/// Print generated commentary on a passage.
pub async fn run_insight(
    provider: &dyn InsightProvider,
    reference: &str,
    context: Option<&str>,
) -> Result<()> {
    // Validate the reference before spending an API call on it.
    let passage = parse_reference(reference)?;

    let insight = provider
        .passage_insight(&passage.to_string(), context)
        .await?;

    println!("{passage}");
    println!();
    println!("{insight}");

    Ok(())
}

/// Print the answer to a freeform theological question.
pub async fn run_ask(provider: &dyn InsightProvider, question: &str) -> Result<()> {
    let answer = provider.answer_question(question).await?;
    println!("{answer}");
    Ok(())
}
