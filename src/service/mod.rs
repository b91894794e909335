//! Application layer: validation and business rules in front of the store.

use crate::db::QuoteStore;
use crate::domain::{normalize_author_filter, validate_id, CreateQuoteRequest, Quote, QuoteError};
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

/// Quote operations exposed to the HTTP layer.
///
/// Validation failures are returned before the store is touched. Store
/// errors are passed through unchanged.
#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new quote, stamped with the current time.
    pub async fn create_quote(&self, req: &CreateQuoteRequest) -> Result<Quote, QuoteError> {
        let quote = req.validate(Utc::now())?;
        self.store.create(quote).await
    }

    pub async fn get_all_quotes(&self) -> Result<Vec<Quote>, QuoteError> {
        self.store.list_all().await
    }

    pub async fn get_quotes_by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError> {
        let author = normalize_author_filter(author)?;
        self.store.list_by_author(author).await
    }

    /// Fetch every quote and pick one uniformly at random.
    pub async fn get_random_quote(&self) -> Result<Quote, QuoteError> {
        let mut quotes = self.store.list_all().await?;
        if quotes.is_empty() {
            return Err(QuoteError::NoQuotesFound);
        }

        let index = rand::thread_rng().gen_range(0..quotes.len());
        Ok(quotes.swap_remove(index))
    }

    pub async fn get_quote(&self, id: i64) -> Result<Quote, QuoteError> {
        let id = validate_id(id)?;
        self.store.get_by_id(id).await
    }

    pub async fn delete_quote(&self, id: i64) -> Result<(), QuoteError> {
        let id = validate_id(id)?;
        self.store.delete_by_id(id).await
    }

    pub async fn ping(&self) -> Result<(), QuoteError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockQuoteStore;
    use crate::domain::ErrorKind;
    use std::collections::HashSet;

    fn setup() -> (QuoteService, Arc<MockQuoteStore>) {
        let store = Arc::new(MockQuoteStore::new());
        (QuoteService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_quote_trims_and_stamps() {
        let (service, _store) = setup();
        let started = Utc::now();

        let quote = service
            .create_quote(&CreateQuoteRequest::new("  Ada ", " Hello\n"))
            .await
            .unwrap();

        assert!(quote.id > 0);
        assert_eq!(quote.author, "Ada");
        assert_eq!(quote.text, "Hello");
        assert!(quote.created_at >= started);
    }

    #[tokio::test]
    async fn test_create_quote_validation_skips_store() {
        let (service, store) = setup();
        let cases = [
            ("", "Hello", ErrorKind::InvalidAuthor),
            ("Ada", "", ErrorKind::InvalidQuote),
            ("", "", ErrorKind::InvalidAuthor),
            ("  ", "Hello", ErrorKind::InvalidAuthor),
        ];

        for (author, text, expected) in cases {
            let err = service
                .create_quote(&CreateQuoteRequest::new(author, text))
                .await
                .unwrap_err();
            assert_eq!(err.kind(), expected);
        }
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_quotes_by_author_trims_filter() {
        let (service, _store) = setup();
        service
            .create_quote(&CreateQuoteRequest::new("Ada", "One"))
            .await
            .unwrap();
        service
            .create_quote(&CreateQuoteRequest::new("Grace", "Two"))
            .await
            .unwrap();

        let quotes = service.get_quotes_by_author("  Ada  ").await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].author, "Ada");
    }

    #[tokio::test]
    async fn test_get_quotes_by_blank_author_is_rejected() {
        let (service, store) = setup();
        let err = service.get_quotes_by_author("   ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAuthor);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_all_quotes_most_recent_first() {
        let (service, _store) = setup();
        for text in ["first", "second", "third"] {
            service
                .create_quote(&CreateQuoteRequest::new("Ada", text))
                .await
                .unwrap();
        }

        let texts: Vec<String> = service
            .get_all_quotes()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.text)
            .collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_random_quote_empty() {
        let (service, _store) = setup();
        let err = service.get_random_quote().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoQuotesFound);
    }

    #[tokio::test]
    async fn test_random_quote_is_always_a_member() {
        let (service, _store) = setup();
        let mut ids = HashSet::new();
        for text in ["a", "b", "c"] {
            let quote = service
                .create_quote(&CreateQuoteRequest::new("Ada", text))
                .await
                .unwrap();
            ids.insert(quote.id);
        }

        for _ in 0..50 {
            let quote = service.get_random_quote().await.unwrap();
            assert!(ids.contains(&quote.id));
        }
    }

    #[tokio::test]
    async fn test_delete_quote_lifecycle() {
        let (service, store) = setup();

        for id in [0, -1] {
            let err = service.delete_quote(id).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidId);
        }
        assert_eq!(store.calls(), 0);

        let err = service.delete_quote(99).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::QuoteNotFound);

        let quote = service
            .create_quote(&CreateQuoteRequest::new("Ada", "Hello"))
            .await
            .unwrap();
        service.delete_quote(quote.id).await.unwrap();

        let err = service.delete_quote(quote.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::QuoteNotFound);
    }

    #[tokio::test]
    async fn test_get_quote() {
        let (service, _store) = setup();
        let created = service
            .create_quote(&CreateQuoteRequest::new("Ada", "Hello"))
            .await
            .unwrap();

        assert_eq!(service.get_quote(created.id).await.unwrap(), created);
        assert_eq!(
            service.get_quote(0).await.unwrap_err().kind(),
            ErrorKind::InvalidId
        );
        assert_eq!(
            service.get_quote(created.id + 1).await.unwrap_err().kind(),
            ErrorKind::QuoteNotFound
        );
    }

    #[tokio::test]
    async fn test_storage_errors_pass_through() {
        let store = Arc::new(MockQuoteStore::failing());
        let service = QuoteService::new(store);

        let err = service
            .create_quote(&CreateQuoteRequest::new("Ada", "Hello"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);

        let err = service.get_random_quote().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);

        let err = service.delete_quote(1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
