//! Handlers for `/api/trainings`.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use super::{bad_multipart, error_response, AppState};
use crate::domain::commands::dogs::PictureUpload;
use crate::domain::commands::trainings::{
    AddTrainingImageCommand, CreateTrainingCommand, UpdateTrainingCommand,
};
use shared::{CreateTrainingRequest, UpdateTrainingRequest};

pub async fn list_trainings(State(state): State<AppState>) -> Response {
    info!("GET /api/trainings");
    match state.backend.training_service.list_trainings() {
        Ok(trainings) => Json(trainings).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_training(
    State(state): State<AppState>,
    Json(request): Json<CreateTrainingRequest>,
) -> Response {
    info!("POST /api/trainings");
    let cmd = CreateTrainingCommand {
        name: request.name,
        procedure: request.procedure,
        tips: request.tips,
    };
    match state.backend.training_service.create_training(cmd) {
        Ok(training) => (StatusCode::CREATED, Json(training)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_training(State(state): State<AppState>, Path(training_id): Path<String>) -> Response {
    info!("GET /api/trainings/{}", training_id);
    match state.backend.training_service.get_training(&training_id) {
        Ok(training) => Json(training).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_training(
    State(state): State<AppState>,
    Path(training_id): Path<String>,
    Json(request): Json<UpdateTrainingRequest>,
) -> Response {
    info!("PUT /api/trainings/{}", training_id);
    let cmd = UpdateTrainingCommand {
        training_id,
        name: request.name,
        procedure: request.procedure,
        tips: request.tips,
    };
    match state.backend.training_service.update_training(cmd) {
        Ok(training) => Json(training).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_training(
    State(state): State<AppState>,
    Path(training_id): Path<String>,
) -> Response {
    info!("DELETE /api/trainings/{}", training_id);
    match state.backend.training_service.delete_training(&training_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// Illustration upload: a multipart form with an `image` file field.
pub async fn add_training_image(
    State(state): State<AppState>,
    Path(training_id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    info!("POST /api/trainings/{}/images", training_id);

    let mut image = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return bad_multipart(e),
        };
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("image").to_string();
        match field.bytes().await {
            Ok(bytes) => {
                image = Some(PictureUpload {
                    filename,
                    bytes: bytes.to_vec(),
                })
            }
            Err(e) => return bad_multipart(e),
        }
    }

    let cmd = AddTrainingImageCommand { training_id, image };
    match state.backend.training_service.add_image(cmd) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(e) => error_response(e),
    }
}
