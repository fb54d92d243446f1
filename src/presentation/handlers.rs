// HTTP request handlers
use crate::infrastructure::snapshot_stream::sse_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SelectionRequest {
    pub route: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/routes", get(list_routes))
        .route("/selection", post(select_route))
        .route("/selection/:route", put(select_route_and_wait))
        .route("/ping", get(current_snapshot))
        .route("/ping/stream", get(stream_snapshots))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List selectable routes, refusing while the backend is unreachable
pub async fn list_routes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if let Err(e) = state.route_options.check_availability().await {
        tracing::warn!("{}", e);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "message": e.to_string() })),
        );
    }

    let routes = state.route_options.list_route_options().await;
    (StatusCode::OK, Json(json!({ "status": "ok", "routes": routes })))
}

/// Start a selection in the background; the outcome is published to `/ping`
pub async fn select_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectionRequest>,
) -> impl IntoResponse {
    let generation = state.controller.begin(&request.route);

    let controller = state.controller.clone();
    tokio::spawn(async move {
        controller.load(generation, &request.route).await;
    });

    (StatusCode::ACCEPTED, Json(json!({ "generation": generation })))
}

/// Run a selection to completion and return the resulting snapshot
pub async fn select_route_and_wait(
    Path(route): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(state.controller.select(&route).await)
}

pub async fn current_snapshot(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.controller.snapshot())
}

pub async fn stream_snapshots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    sse_from_receiver(state.controller.subscribe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::route_options_service::RouteOptionsService;
    use crate::application::selection_controller::tests::{
        controller, scripted_backend, ScriptedBackend,
    };
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> (Router, Arc<ScriptedBackend>, Arc<AppState>) {
        let backend = Arc::new(scripted_backend());
        backend.set_routes(Ok(vec!["a".to_string(), "b".to_string()]));
        let state = Arc::new(AppState {
            route_options: RouteOptionsService::new(backend.clone()),
            controller: Arc::new(controller(backend.clone())),
        });
        (router(state.clone()), backend, state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _, _) = test_router();

        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_list_routes() {
        let (app, _, _) = test_router();

        let response = app
            .oneshot(Request::builder().uri("/routes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["routes"], json!(["a", "b"]));
    }

    #[tokio::test]
    async fn test_list_routes_when_service_unreachable() {
        let (app, backend, _) = test_router();
        backend.set_service_down(true);

        let response = app
            .oneshot(Request::builder().uri("/routes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_select_and_wait_returns_snapshot() {
        let (app, _, _) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/selection/b")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["state"]["status"], "ready");
        assert_eq!(json["displayed_route"], "b");
        assert_eq!(json["series"]["pingMin"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_surfaces_failure() {
        let (app, _, _) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/selection/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["state"]["status"], "failed");
        assert_eq!(json["state"]["error"]["kind"], "route_not_found");
        assert!(json["series"].is_null());
    }

    #[tokio::test]
    async fn test_background_selection_is_published() {
        let (app, backend, state) = test_router();
        let release = backend.gate("path.a");
        let mut updates = state.controller.subscribe();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/selection")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "route": "a" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_json(response).await["generation"], 1);

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["state"]["status"], "loading");

        release.send(()).unwrap();
        let published = updates
            .wait_for(|snapshot| snapshot.displayed_route.is_some())
            .await
            .unwrap()
            .clone();
        assert_eq!(published.displayed_route.as_deref(), Some("a"));
    }
}
