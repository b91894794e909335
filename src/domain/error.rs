use thiserror::Error;

/// Errors produced by quote operations.
///
/// Validation variants are raised before any storage call is made. `Storage`
/// wraps whatever the persistence layer returned and is never interpreted by
/// the service.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("invalid author")]
    InvalidAuthor,
    #[error("invalid quote")]
    InvalidQuote,
    #[error("invalid quote ID")]
    InvalidId,
    #[error("quote not found")]
    QuoteNotFound,
    #[error("no quotes found")]
    NoQuotesFound,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Fieldless discriminant of `QuoteError`, used as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAuthor,
    InvalidQuote,
    InvalidId,
    QuoteNotFound,
    NoQuotesFound,
    Storage,
}

impl QuoteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuoteError::InvalidAuthor => ErrorKind::InvalidAuthor,
            QuoteError::InvalidQuote => ErrorKind::InvalidQuote,
            QuoteError::InvalidId => ErrorKind::InvalidId,
            QuoteError::QuoteNotFound => ErrorKind::QuoteNotFound,
            QuoteError::NoQuotesFound => ErrorKind::NoQuotesFound,
            QuoteError::Storage(_) => ErrorKind::Storage,
        }
    }
}
