//! Handlers for `/api/plans`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use super::{error_response, AppState};
use crate::domain::commands::plans::{CreatePlanCommand, UpdatePlanCommand};
use shared::{CreatePlanRequest, UpdatePlanRequest};

pub async fn list_plans(State(state): State<AppState>) -> Response {
    info!("GET /api/plans");
    match state.backend.plan_service.list_plans() {
        Ok(plans) => Json(plans).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Response {
    info!("POST /api/plans");
    let cmd = CreatePlanCommand {
        name: request.name,
        schedule: request.schedule,
    };
    match state.backend.plan_service.create_plan(cmd) {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_plan(State(state): State<AppState>, Path(plan_id): Path<String>) -> Response {
    info!("GET /api/plans/{}", plan_id);
    match state.backend.plan_service.get_plan(&plan_id) {
        Ok(plan) => Json(plan).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    Json(request): Json<UpdatePlanRequest>,
) -> Response {
    info!("PUT /api/plans/{}", plan_id);
    let cmd = UpdatePlanCommand {
        plan_id,
        name: request.name,
        schedule: request.schedule,
    };
    match state.backend.plan_service.update_plan(cmd) {
        Ok(plan) => Json(plan).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_plan(State(state): State<AppState>, Path(plan_id): Path<String>) -> Response {
    info!("DELETE /api/plans/{}", plan_id);
    match state.backend.plan_service.delete_plan(&plan_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
