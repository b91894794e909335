use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::{ErrorKind, QuoteError};

pub const MSG_INVALID_JSON: &str = "invalid json";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_NOT_FOUND: &str = "not found";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unavailable(msg)
            | AppError::Internal(msg) => msg,
            AppError::MethodNotAllowed => MSG_METHOD_NOT_ALLOWED.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// The quote operation a request was serving when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateQuote,
    ListQuotes,
    RandomQuote,
    GetQuote,
    DeleteQuote,
}

impl Operation {
    /// Message returned to the client for failures that are not listed in
    /// `CLIENT_ERRORS`.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::CreateQuote => "failed to create quote",
            Operation::ListQuotes => "failed to get quotes",
            Operation::RandomQuote => "failed to get random quote",
            Operation::GetQuote => "failed to get quote",
            Operation::DeleteQuote => "failed to delete quote",
        }
    }
}

/// Domain errors that are the client's business, per operation. Anything not
/// listed here is a 500 with the operation's generic message.
const CLIENT_ERRORS: &[(Operation, ErrorKind, fn(String) -> AppError)] = &[
    (Operation::CreateQuote, ErrorKind::InvalidAuthor, AppError::BadRequest),
    (Operation::CreateQuote, ErrorKind::InvalidQuote, AppError::BadRequest),
    (Operation::ListQuotes, ErrorKind::InvalidAuthor, AppError::BadRequest),
    (Operation::RandomQuote, ErrorKind::NoQuotesFound, AppError::NotFound),
    (Operation::GetQuote, ErrorKind::InvalidId, AppError::BadRequest),
    (Operation::GetQuote, ErrorKind::QuoteNotFound, AppError::NotFound),
    (Operation::DeleteQuote, ErrorKind::InvalidId, AppError::BadRequest),
    (Operation::DeleteQuote, ErrorKind::QuoteNotFound, AppError::NotFound),
];

/// Translate a domain error into the response for `op`.
///
/// Unlisted errors are logged with their cause and collapsed to a generic
/// message so internal details never reach the client.
pub fn map_quote_error(op: Operation, err: QuoteError) -> AppError {
    let kind = err.kind();
    if let Some((_, _, to_app_error)) = CLIENT_ERRORS
        .iter()
        .find(|(o, k, _)| *o == op && *k == kind)
    {
        return to_app_error(err.to_string());
    }

    tracing::error!(operation = ?op, error = %err, "quote operation failed");
    AppError::Internal(op.failure_message().to_string())
}
