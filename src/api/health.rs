use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::error::AppError;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy", "service": "quotes-service"}))
}

/// Readiness probe; fails while the quote store is unreachable.
pub async fn ready(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state.quotes.ping().await.map_err(|e| {
        tracing::warn!("readiness check failed: {}", e);
        AppError::Unavailable("database unavailable".into())
    })?;
    Ok(Json(serde_json::json!({"status": "ready"})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockQuoteStore;
    use crate::service::QuoteService;
    use std::sync::Arc;

    fn state(store: MockQuoteStore) -> AppState {
        AppState::new(Arc::new(QuoteService::new(Arc::new(store))))
    }

    #[tokio::test]
    async fn test_health_returns_healthy() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "quotes-service");
    }

    #[tokio::test]
    async fn test_ready_returns_ready() {
        let Json(body) = ready(State(state(MockQuoteStore::new()))).await.unwrap();
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_ready_fails_when_store_is_down() {
        let err = ready(State(state(MockQuoteStore::failing())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unavailable(_)));
    }
}
