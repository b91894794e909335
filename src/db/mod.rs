//! Storage layer for quotes.
//!
//! This module provides:
//! - The `QuoteStore` trait consumed by the service layer
//! - SQLite initialization and schema setup
//! - `SqliteQuoteStore`, the production implementation
//! - `MockQuoteStore`, an in-memory implementation for tests

pub mod migrations;
pub mod mock;
pub mod repo;

use crate::domain::{NewQuote, Quote, QuoteError};
use async_trait::async_trait;

pub use migrations::init_db;
pub use mock::MockQuoteStore;
pub use repo::SqliteQuoteStore;

/// Persistence contract for quotes.
///
/// Both list operations return quotes ordered by creation time, most recent
/// first. Absence is reported as `QuoteError::QuoteNotFound` or
/// `QuoteError::NoQuotesFound`; every other failure is `QuoteError::Storage`.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persist a validated quote and return it with its assigned id.
    async fn create(&self, quote: NewQuote) -> Result<Quote, QuoteError>;

    async fn list_all(&self) -> Result<Vec<Quote>, QuoteError>;

    async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError>;

    /// Pick one stored quote at random, or `NoQuotesFound` if there are none.
    async fn get_random(&self) -> Result<Quote, QuoteError>;

    async fn get_by_id(&self, id: i64) -> Result<Quote, QuoteError>;

    /// Delete a quote, or `QuoteNotFound` if no row has this id.
    async fn delete_by_id(&self, id: i64) -> Result<(), QuoteError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), QuoteError>;
}
