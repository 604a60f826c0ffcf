//! REST API layer: router, shared state, and error mapping.

pub mod dogs;
pub mod plans;
pub mod sessions;
pub mod trainings;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::domain::DomainError;
use crate::Backend;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
}

/// Build the full application router: JSON API under `/api`, uploaded
/// images served statically under `/uploads`.
pub fn router(backend: Arc<Backend>) -> Router {
    let uploads_directory = backend.uploads_directory();
    let state = AppState { backend };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health))
        .route("/dogs", get(dogs::list_dogs).post(dogs::create_dog))
        .route("/dogs/:id", get(dogs::get_dog).delete(dogs::delete_dog))
        .route("/dogs/:id/plan", put(dogs::assign_plan).delete(dogs::unassign_plan))
        .route("/dogs/:id/sessions", get(sessions::list_sessions).post(sessions::create_session))
        .route(
            "/dogs/:id/sessions/:session_id",
            get(sessions::get_session)
                .put(sessions::update_session)
                .delete(sessions::delete_session),
        )
        .route("/trainings", get(trainings::list_trainings).post(trainings::create_training))
        .route(
            "/trainings/:id",
            get(trainings::get_training)
                .put(trainings::update_training)
                .delete(trainings::delete_training),
        )
        .route("/trainings/:id/images", post(trainings::add_training_image))
        .route("/plans", get(plans::list_plans).post(plans::create_plan))
        .route(
            "/plans/:id",
            get(plans::get_plan).put(plans::update_plan).delete(plans::delete_plan),
        );

    Router::new()
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(uploads_directory))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "message": "Hello from DogTrainr API!" }))
}

/// Map a domain error onto a status code and `{"error": ...}` body.
/// Storage failures are logged in full and surface as a generic 500.
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Storage(e) => {
            error!("storage error: {e:#}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal server error" })),
            )
                .into_response();
        }
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// 400 for a multipart body we could not read.
pub(crate) fn bad_multipart(err: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("invalid multipart body: {err}") })),
    )
        .into_response()
}
