pub mod health;
pub mod quotes;

use crate::error::{AppError, MSG_NOT_FOUND};
use crate::service::QuoteService;
use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    pub fn new(quotes: Arc<QuoteService>) -> Self {
        Self { quotes }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/health",
            get(health::health).fallback(method_not_allowed),
        )
        .route("/ready", get(health::ready).fallback(method_not_allowed))
        .route(
            "/quotes",
            get(quotes::list_quotes)
                .post(quotes::create_quote)
                .fallback(method_not_allowed),
        )
        .route(
            "/quotes/random",
            get(quotes::random_quote).fallback(method_not_allowed),
        )
        .route(
            "/quotes/:id",
            delete(quotes::delete_quote)
                .get(quotes::get_quote)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound(MSG_NOT_FOUND.to_string())
}
