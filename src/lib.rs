pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod service;

pub use config::Config;
pub use db::{init_db, MockQuoteStore, QuoteStore, SqliteQuoteStore};
pub use domain::{CreateQuoteRequest, Quote, QuoteError};
pub use error::AppError;
pub use service::QuoteService;
