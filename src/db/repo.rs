//! SQLite-backed quote store.

use super::QuoteStore;
use crate::domain::{NewQuote, Quote, QuoteError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Quote store over a SQLite connection pool.
///
/// `created_at` is stored as integer nanoseconds since the Unix epoch so that
/// timestamps round-trip exactly and sort numerically.
#[derive(Debug, Clone)]
pub struct SqliteQuoteStore {
    pool: SqlitePool,
}

impl SqliteQuoteStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteQuoteStore { pool }
    }
}

fn to_unix_nanos(at: DateTime<Utc>) -> Result<i64, sqlx::Error> {
    at.timestamp_nanos_opt()
        .ok_or_else(|| sqlx::Error::Protocol(format!("timestamp out of range: {}", at)))
}

fn quote_from_row(row: &SqliteRow) -> Result<Quote, sqlx::Error> {
    Ok(Quote {
        id: row.try_get("id")?,
        author: row.try_get("author")?,
        text: row.try_get("quote")?,
        created_at: DateTime::<Utc>::from_timestamp_nanos(row.try_get("created_at")?),
    })
}

fn quotes_from_rows(rows: &[SqliteRow]) -> Result<Vec<Quote>, sqlx::Error> {
    rows.iter().map(quote_from_row).collect()
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn create(&self, quote: NewQuote) -> Result<Quote, QuoteError> {
        let result = sqlx::query(
            r#"
            INSERT INTO quotes (author, quote, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&quote.author)
        .bind(&quote.text)
        .bind(to_unix_nanos(quote.created_at)?)
        .execute(&self.pool)
        .await?;

        Ok(quote.into_quote(result.last_insert_rowid()))
    }

    async fn list_all(&self) -> Result<Vec<Quote>, QuoteError> {
        let rows = sqlx::query(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes_from_rows(&rows)?)
    }

    async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>, QuoteError> {
        let rows = sqlx::query(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            WHERE author = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes_from_rows(&rows)?)
    }

    async fn get_random(&self) -> Result<Quote, QuoteError> {
        let row = sqlx::query(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(quote_from_row(&row)?),
            None => Err(QuoteError::NoQuotesFound),
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Quote, QuoteError> {
        let row = sqlx::query(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(quote_from_row(&row)?),
            None => Err(QuoteError::QuoteNotFound),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), QuoteError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(QuoteError::QuoteNotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), QuoteError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
