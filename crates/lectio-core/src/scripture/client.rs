//! Client for the [bible-api.com](https://bible-api.com/) text service.
//!
//! The API serves one chapter per request: `GET /<book>+<chapter>` with
//! the book name URL-encoded. Payload parsing is kept separate from the
//! HTTP call so it can be tested against fixture JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::Passage;

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://bible-api.com";

/// One verse of scripture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// A full chapter as returned by the text service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

/// Errors from fetching or decoding chapter text.
#[derive(Debug, Error)]
pub enum ScriptureError {
    #[error("scripture API request failed")]
    Http(#[from] reqwest::Error),
    #[error("scripture API returned status {0} for {1}")]
    Status(reqwest::StatusCode, String),
    #[error("malformed scripture API response: {0}")]
    Malformed(String),
}

/// HTTP client for the scripture text service.
#[derive(Debug, Clone)]
pub struct ScriptureClient {
    base_url: String,
    http: reqwest::Client,
}

impl ScriptureClient {
    /// Client against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the text of a single chapter.
    pub async fn fetch_chapter(&self, passage: &Passage) -> Result<Chapter, ScriptureError> {
        // Canon book names only ever contain spaces as special characters.
        let encoded_book = passage.book.replace(' ', "%20");
        let url = format!("{}/{}+{}", self.base_url, encoded_book, passage.chapter);
        debug!(%url, "fetching chapter");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScriptureError::Status(status, passage.to_string()));
        }

        let payload: serde_json::Value = response.json().await?;
        parse_chapter_payload(&passage.book, passage.chapter, &payload)
    }
}

impl Default for ScriptureClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a chapter payload into a [`Chapter`].
///
/// Collapses runs of whitespace inside verse text; the API embeds
/// newlines and double spaces from its source texts.
pub fn parse_chapter_payload(
    book: &str,
    chapter: u32,
    payload: &serde_json::Value,
) -> Result<Chapter, ScriptureError> {
    let verses = payload
        .get("verses")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ScriptureError::Malformed("missing verses array".to_owned()))?;

    let mut out = Vec::with_capacity(verses.len());
    for (i, entry) in verses.iter().enumerate() {
        let verse_chapter = entry
            .get("chapter")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ScriptureError::Malformed(format!("verse {i} missing chapter")))?;
        let verse_number = entry
            .get("verse")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ScriptureError::Malformed(format!("verse {i} missing verse number")))?;
        let text = entry
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ScriptureError::Malformed(format!("verse {i} missing text")))?;

        out.push(Verse {
            chapter: verse_chapter as u32,
            verse: verse_number as u32,
            text: collapse_whitespace(text),
        });
    }

    Ok(Chapter {
        book: book.to_owned(),
        chapter,
        verses: out,
    })
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
