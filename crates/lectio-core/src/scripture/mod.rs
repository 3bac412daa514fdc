//! Scripture text: passage references and the remote text client.

pub mod client;

pub use client::{Chapter, ScriptureClient, ScriptureError, Verse};

use std::fmt;
use std::str::FromStr;

/// A single-chapter passage reference, e.g. `"1 Samuel 12"`.
///
/// This is the parsed form of the strings the plan generator emits; the
/// book name is everything before the final space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

impl FromStr for Passage {
    type Err = PassageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(pos) = s.rfind(' ') else {
            return Err(PassageParseError(s.to_owned()));
        };

        let book = s[..pos].trim_end();
        let chapter: u32 = s[pos + 1..]
            .parse()
            .map_err(|_| PassageParseError(s.to_owned()))?;

        if book.is_empty() || chapter == 0 {
            return Err(PassageParseError(s.to_owned()));
        }

        Ok(Passage {
            book: book.to_owned(),
            chapter,
        })
    }
}

/// Error returned when parsing an invalid [`Passage`] reference.
#[derive(Debug, Clone)]
pub struct PassageParseError(pub String);

impl fmt::Display for PassageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid passage reference {:?}: expected \"<book> <chapter>\"",
            self.0
        )
    }
}

impl std::error::Error for PassageParseError {}
