//! SQLite setup for the quote store.
//!
//! The database holds a single `quotes` table:
//! - `id` is `INTEGER PRIMARY KEY AUTOINCREMENT`, so ids are never reused
//!   after a delete
//! - `author` and `quote` are non-null text, already trimmed by the service
//! - `created_at` is integer nanoseconds since the Unix epoch
//!
//! Two indexes back the list queries: `(created_at DESC, id DESC)` for
//! listing everything newest first, and `(author, created_at DESC)` for the
//! author filter. Every statement is `IF NOT EXISTS`, so setup can run on
//! every start.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS quotes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        author TEXT NOT NULL,
        quote TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_quotes_created_at ON quotes (created_at DESC, id DESC)",
    "CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes (author, created_at DESC)",
];

/// Open (creating if needed) the quotes database at `db_path` and make sure
/// the `quotes` table and its indexes exist.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Could not create database directory {}: {}", parent.display(), e);
            }
        }
    }

    // WAL is best-effort; SQLite keeps its default mode if the filesystem refuses.
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;

    info!("Quote store ready at {}", db_path);
    Ok(pool)
}

async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(*statement).execute(pool).await?;
    }
    Ok(())
}
