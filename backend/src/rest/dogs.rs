//! Handlers for `/api/dogs`.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use super::{bad_multipart, error_response, AppState};
use crate::domain::commands::dogs::{AssignPlanCommand, CreateDogCommand, PictureUpload};
use shared::AssignPlanRequest;

pub async fn list_dogs(State(state): State<AppState>) -> Response {
    info!("GET /api/dogs");
    match state.backend.dog_service.list_dogs() {
        Ok(dogs) => Json(dogs).into_response(),
        Err(e) => error_response(e),
    }
}

/// Dogs are created from a multipart form: a `name` field plus a
/// `picture` file.
pub async fn create_dog(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    info!("POST /api/dogs");

    let mut name = None;
    let mut picture = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return bad_multipart(e),
        };
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => match field.text().await {
                Ok(text) => name = Some(text),
                Err(e) => return bad_multipart(e),
            },
            "picture" => {
                let filename = field.file_name().unwrap_or("picture").to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        picture = Some(PictureUpload {
                            filename,
                            bytes: bytes.to_vec(),
                        })
                    }
                    Err(e) => return bad_multipart(e),
                }
            }
            _ => {}
        }
    }

    match state.backend.dog_service.create_dog(CreateDogCommand { name, picture }) {
        Ok(dog) => (StatusCode::CREATED, Json(dog)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_dog(State(state): State<AppState>, Path(dog_id): Path<String>) -> Response {
    info!("GET /api/dogs/{}", dog_id);
    match state.backend.dog_service.get_dog(&dog_id) {
        Ok(dog) => Json(dog).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_dog(State(state): State<AppState>, Path(dog_id): Path<String>) -> Response {
    info!("DELETE /api/dogs/{}", dog_id);
    match state.backend.dog_service.delete_dog(&dog_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn assign_plan(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
    Json(request): Json<AssignPlanRequest>,
) -> Response {
    info!("PUT /api/dogs/{}/plan - plan {}", dog_id, request.plan_id);
    let cmd = AssignPlanCommand {
        dog_id,
        plan_id: request.plan_id,
    };
    match state.backend.dog_service.assign_plan(cmd) {
        Ok(dog) => Json(dog).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn unassign_plan(State(state): State<AppState>, Path(dog_id): Path<String>) -> Response {
    info!("DELETE /api/dogs/{}/plan", dog_id);
    match state.backend.dog_service.clear_plan(&dog_id) {
        Ok(dog) => Json(dog).into_response(),
        Err(e) => error_response(e),
    }
}
