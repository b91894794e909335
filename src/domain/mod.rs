//! Domain types for the quotes service.
//!
//! This module provides:
//! - The persisted `Quote` entity and its JSON shape
//! - `CreateQuoteRequest` input validation and normalization
//! - `QuoteError`, the error taxonomy shared by the service and storage layers

pub mod error;
pub mod quote;

pub use error::{ErrorKind, QuoteError};
pub use quote::{normalize_author_filter, validate_id, CreateQuoteRequest, NewQuote, Quote};
