//! Axum handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub(super) struct RecommendParams {
    limit: Option<usize>,
}

/// Response body for `/recommend/{item_id}`. Always a list, never null.
#[derive(Debug, Serialize)]
pub(super) struct RecommendResponse {
    recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    reviews: usize,
    items: usize,
    users: usize,
    counting: String,
}

/// GET /recommend/{item_id}
pub(super) async fn recommend(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Query(params): Query<RecommendParams>,
) -> Json<RecommendResponse> {
    let limit = params
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    let recommendations = state.engine.recommend(&item_id, limit);
    debug!(%item_id, limit, returned = recommendations.len(), "recommend request");

    Json(RecommendResponse { recommendations })
}

/// GET /health
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.engine.store();
    Json(HealthResponse {
        status: "ok",
        reviews: store.len(),
        items: store.distinct_items(),
        users: store.distinct_users(),
        counting: state.engine.mode().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::engine::{CountingMode, Recommender};
    use crate::server::{build_router, AppState};
    use crate::store::{Review, ReviewStore};

    fn state() -> AppState {
        let reviews = vec![
            Review::new("u1", "A", 5.0),
            Review::new("u1", "B", 3.0),
            Review::new("u2", "A", 4.0),
            Review::new("u2", "C", 2.0),
            Review::new("u2", "D", 1.0),
        ];
        let engine = Recommender::with_mode(
            Arc::new(ReviewStore::from_reviews(reviews)),
            CountingMode::Literal,
        );
        AppState::new(Arc::new(engine), 5, 2)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = build_router(state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_recommend() {
        let (status, body) = get_json("/recommend/A?limit=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": ["B", "C"] }));
    }

    #[tokio::test]
    async fn test_unknown_item_is_empty_list() {
        let (status, body) = get_json("/recommend/nothing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        // default 5 is clamped to max 2
        let (_, body) = get_json("/recommend/A").await;
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);

        let (_, body) = get_json("/recommend/A?limit=0").await;
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["reviews"], 5);
        assert_eq!(body["items"], 4);
        assert_eq!(body["users"], 2);
        assert_eq!(body["counting"], "literal");
    }
}
