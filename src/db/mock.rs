//! In-memory quote store for testing without a database.

use super::QuoteStore;
use crate::domain::{NewQuote, Quote, QuoteError};
use async_trait::async_trait;
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Mock store that keeps quotes in memory.
///
/// Follows the same ordering rules as the SQLite store. `set_failing(true)`
/// makes every call return a storage error, and `calls()` counts how many
/// times the store was reached.
#[derive(Debug, Default)]
pub struct MockQuoteStore {
    state: Mutex<MockState>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct MockState {
    quotes: Vec<Quote>,
    last_id: i64,
}

impl MockQuoteStore {
    /// Create a new mock store with no quotes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store whose every call fails with a storage error.
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(QuoteError::Storage(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

fn most_recent_first(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl QuoteStore for MockQuoteStore {
    async fn create(&self, quote: NewQuote) -> Result<Quote, QuoteError> {
        self.enter()?;
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let quote = quote.into_quote(state.last_id);
        state.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn list_all(&self) -> Result<Vec<Quote>, QuoteError> {
        self.enter()?;
        let mut quotes = self.state.lock().await.quotes.clone();
        most_recent_first(&mut quotes);
        Ok(quotes)
    }

    async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError> {
        self.enter()?;
        let mut quotes: Vec<Quote> = self
            .state
            .lock()
            .await
            .quotes
            .iter()
            .filter(|q| q.author == author)
            .cloned()
            .collect();
        most_recent_first(&mut quotes);
        Ok(quotes)
    }

    async fn get_random(&self) -> Result<Quote, QuoteError> {
        self.enter()?;
        let state = self.state.lock().await;
        if state.quotes.is_empty() {
            return Err(QuoteError::NoQuotesFound);
        }
        let index = rand::thread_rng().gen_range(0..state.quotes.len());
        Ok(state.quotes[index].clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Quote, QuoteError> {
        self.enter()?;
        self.state
            .lock()
            .await
            .quotes
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(QuoteError::QuoteNotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), QuoteError> {
        self.enter()?;
        let mut state = self.state.lock().await;
        let before = state.quotes.len();
        state.quotes.retain(|q| q.id != id);
        if state.quotes.len() == before {
            return Err(QuoteError::QuoteNotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), QuoteError> {
        self.enter()
    }
}
