use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::AppState;
use crate::domain::{CreateQuoteRequest, Quote};
use crate::error::{map_quote_error, AppError, Operation, MSG_INVALID_JSON};

const MSG_INVALID_QUERY: &str = "invalid query";

/// `POST /quotes`
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Quote>), AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("rejected create body: {}", e);
        AppError::BadRequest(MSG_INVALID_JSON.into())
    })?;

    let quote = state
        .quotes
        .create_quote(&req)
        .await
        .map_err(|e| map_quote_error(Operation::CreateQuote, e))?;

    Ok((StatusCode::CREATED, Json(quote)))
}

/// `GET /quotes`, optionally filtered with `?author=`.
///
/// An absent or empty `author` lists everything; an empty result is `[]`.
/// When `author` is repeated only the first value is used.
pub async fn list_quotes(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Quote>>, AppError> {
    let Query(params) = query.map_err(|e| {
        tracing::debug!("rejected query string: {}", e);
        AppError::BadRequest(MSG_INVALID_QUERY.into())
    })?;

    let quotes = match first_value(&params, "author") {
        Some("") | None => state.quotes.get_all_quotes().await,
        Some(author) => state.quotes.get_quotes_by_author(author).await,
    }
    .map_err(|e| map_quote_error(Operation::ListQuotes, e))?;

    Ok(Json(quotes))
}

/// `GET /quotes/random`
pub async fn random_quote(State(state): State<AppState>) -> Result<Json<Quote>, AppError> {
    let quote = state
        .quotes
        .get_random_quote()
        .await
        .map_err(|e| map_quote_error(Operation::RandomQuote, e))?;

    Ok(Json(quote))
}

/// `GET /quotes/:id`
pub async fn get_quote(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Quote>, AppError> {
    let id = parse_quote_id(&raw_id)?;
    let quote = state
        .quotes
        .get_quote(id)
        .await
        .map_err(|e| map_quote_error(Operation::GetQuote, e))?;

    Ok(Json(quote))
}

/// `DELETE /quotes/:id`
pub async fn delete_quote(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_quote_id(&raw_id)?;
    state
        .quotes
        .delete_quote(id)
        .await
        .map_err(|e| map_quote_error(Operation::DeleteQuote, e))?;

    Ok(StatusCode::NO_CONTENT)
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_quote_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("invalid quote ID".into()))
}
