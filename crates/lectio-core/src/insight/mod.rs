//! AI commentary: prompt construction and the generation-API client.
//!
//! Prompt building is pure and tested here; the network call lives in
//! [`gemini`]. The [`InsightProvider`] trait is the seam between the CLI
//! and the concrete backend.

pub mod gemini;

pub use gemini::GeminiClient;

use anyhow::Result;
use async_trait::async_trait;

/// Backend interface for generated commentary.
///
/// Object-safe so callers can hold a `Box<dyn InsightProvider>` and tests
/// can substitute a canned implementation.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Commentary on a single passage, optionally steered by extra
    /// context from the reader.
    async fn passage_insight(&self, passage: &str, context: Option<&str>) -> Result<String>;

    /// Answer to a freeform theological question.
    async fn answer_question(&self, question: &str) -> Result<String>;
}

// Compile-time assertion: the trait must stay object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn InsightProvider) {}
};

/// Build the prompt for passage commentary.
///
/// Asks for historical context, practical application, and a theological
/// summary; reader-supplied context is appended verbatim.
pub fn build_insight_prompt(passage: &str, context: Option<&str>) -> String {
    let mut prompt = format!(
        "Explain the Bible passage \"{passage}\". Provide historical context, \
         practical applications, and a theological summary in English."
    );
    if let Some(context) = context {
        prompt.push(' ');
        prompt.push_str(context);
    }
    prompt
}

/// Build the prompt for a freeform theological question.
pub fn build_question_prompt(question: &str) -> String {
    format!(
        "Act as an experienced and scholarly theologian. Answer the following \
         biblical question in English: \"{question}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_prompt_names_the_passage() {
        let prompt = build_insight_prompt("Genesis 1", None);
        assert!(prompt.contains("\"Genesis 1\""));
        assert!(prompt.contains("historical context"));
        assert!(prompt.contains("practical applications"));
        assert!(prompt.contains("theological summary"));
    }

    #[test]
    fn insight_prompt_appends_reader_context() {
        let prompt = build_insight_prompt("John 3", Some("Focus on verse 16."));
        assert!(prompt.ends_with("Focus on verse 16."));
    }

    #[test]
    fn insight_prompt_without_context_has_no_trailing_space() {
        let prompt = build_insight_prompt("John 3", None);
        assert_eq!(prompt.trim_end(), prompt);
    }

    #[test]
    fn question_prompt_sets_the_persona() {
        let prompt = build_question_prompt("Who wrote Hebrews?");
        assert!(prompt.contains("scholarly theologian"));
        assert!(prompt.contains("\"Who wrote Hebrews?\""));
    }

    // -- trait object-safety --

    struct CannedProvider;

    #[async_trait]
    impl InsightProvider for CannedProvider {
        async fn passage_insight(&self, passage: &str, _context: Option<&str>) -> Result<String> {
            Ok(format!("about {passage}"))
        }

        async fn answer_question(&self, _question: &str) -> Result<String> {
            Ok("answered".to_owned())
        }
    }

    #[tokio::test]
    async fn provider_works_as_a_trait_object() {
        let provider: Box<dyn InsightProvider> = Box::new(CannedProvider);
        let insight = provider.passage_insight("Ruth 1", None).await.unwrap();
        assert_eq!(insight, "about Ruth 1");
        assert_eq!(provider.answer_question("?").await.unwrap(), "answered");
    }
}
