//! The quote entity and the create-request validator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuoteError;

/// A persisted quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A validated quote that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewQuote {
    /// Attach the storage-assigned id.
    pub fn into_quote(self, id: i64) -> Quote {
        Quote {
            id,
            author: self.author,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Raw client input for quote creation.
///
/// Missing fields decode as empty strings so they are reported by
/// validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "quote")]
    pub text: String,
}

impl CreateQuoteRequest {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Trim both fields and check them, author first.
    ///
    /// Whitespace-only fields are rejected, so a stored quote never has an
    /// empty author or text.
    pub fn validate(&self, created_at: DateTime<Utc>) -> Result<NewQuote, QuoteError> {
        let author = self.author.trim();
        if author.is_empty() {
            return Err(QuoteError::InvalidAuthor);
        }

        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuoteError::InvalidQuote);
        }

        Ok(NewQuote {
            author: author.to_string(),
            text: text.to_string(),
            created_at,
        })
    }
}

/// Trim an author filter and reject it if nothing is left.
pub fn normalize_author_filter(raw: &str) -> Result<&str, QuoteError> {
    let author = raw.trim();
    if author.is_empty() {
        return Err(QuoteError::InvalidAuthor);
    }
    Ok(author)
}

/// Ids are assigned by storage starting at 1.
pub fn validate_id(id: i64) -> Result<i64, QuoteError> {
    if id <= 0 {
        return Err(QuoteError::InvalidId);
    }
    Ok(id)
}
