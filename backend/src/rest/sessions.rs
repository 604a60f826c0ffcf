//! Handlers for `/api/dogs/{dogId}/sessions`.
//!
//! The dog id is typed as a `Uuid` on these routes, so a malformed id
//! is a bad request rather than a miss; session ids are looked up as
//! opaque strings.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::{error_response, AppState};
use crate::domain::commands::sessions::{
    CreateSessionCommand, SessionRangeQuery, UpdateSessionCommand,
};
use crate::domain::DomainError;
use shared::{CreateSessionRequest, Session as SessionDto, UpdateSessionRequest};

/// Raw query string for the list endpoint; dates are parsed by hand so
/// a malformed value surfaces as a typed InvalidRange error.
#[derive(Debug, Deserialize)]
pub struct SessionRangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

fn parse_range_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, Response> {
    match value {
        None => Ok(None),
        Some(raw) => raw.parse::<NaiveDate>().map(Some).map_err(|_| {
            error_response(DomainError::InvalidRange(format!(
                "{field} must be a YYYY-MM-DD date, got \"{raw}\""
            )))
        }),
    }
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Path(dog_id): Path<Uuid>,
    Query(params): Query<SessionRangeParams>,
) -> Response {
    info!("GET /api/dogs/{}/sessions - params: {:?}", dog_id, params);

    let from = match parse_range_date(params.from.as_deref(), "from") {
        Ok(from) => from,
        Err(response) => return response,
    };
    let to = match parse_range_date(params.to.as_deref(), "to") {
        Ok(to) => to,
        Err(response) => return response,
    };

    let query = SessionRangeQuery {
        dog_id: dog_id.to_string(),
        from,
        to,
    };
    match state.backend.session_service.list_sessions(query) {
        Ok(sessions) => {
            let dtos: Vec<SessionDto> = sessions.into_iter().map(SessionDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn create_session(
    State(state): State<AppState>,
    Path(dog_id): Path<Uuid>,
    Json(request): Json<CreateSessionRequest>,
) -> Response {
    info!("POST /api/dogs/{}/sessions", dog_id);

    let cmd = CreateSessionCommand {
        dog_id: dog_id.to_string(),
        training_id: request.training_id,
        plan_id: request.plan_id,
        date: request.date,
        status: request.status,
        score: request.score,
        notes: request.notes,
    };
    match state.backend.session_service.create_session(cmd) {
        Ok(session) => (StatusCode::CREATED, Json(SessionDto::from(session))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_session(
    State(state): State<AppState>,
    Path((dog_id, session_id)): Path<(Uuid, String)>,
) -> Response {
    info!("GET /api/dogs/{}/sessions/{}", dog_id, session_id);
    match state
        .backend
        .session_service
        .get_session(&dog_id.to_string(), &session_id)
    {
        Ok(session) => Json(SessionDto::from(session)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_session(
    State(state): State<AppState>,
    Path((dog_id, session_id)): Path<(Uuid, String)>,
    Json(request): Json<UpdateSessionRequest>,
) -> Response {
    info!("PUT /api/dogs/{}/sessions/{}", dog_id, session_id);

    let cmd = UpdateSessionCommand {
        dog_id: dog_id.to_string(),
        session_id,
        status: request.status,
        score: request.score,
        notes: request.notes,
    };
    match state.backend.session_service.update_session(cmd) {
        Ok(session) => Json(SessionDto::from(session)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path((dog_id, session_id)): Path<(Uuid, String)>,
) -> Response {
    info!("DELETE /api/dogs/{}/sessions/{}", dog_id, session_id);
    match state
        .backend
        .session_service
        .delete_session(&dog_id.to_string(), &session_id)
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::dogs::{CreateDogCommand, PictureUpload};
    use crate::rest::tests_support::test_state;

    fn create_test_dog(state: &AppState) -> Uuid {
        let dog = state
            .backend
            .dog_service
            .create_dog(CreateDogCommand {
                name: Some("Buddy".to_string()),
                picture: Some(PictureUpload {
                    filename: "buddy.jpg".to_string(),
                    bytes: b"fake-image-data".to_vec(),
                }),
            })
            .unwrap();
        dog.id.parse().unwrap()
    }

    fn create_request() -> CreateSessionRequest {
        CreateSessionRequest {
            training_id: Some("t1".to_string()),
            plan_id: None,
            date: Some(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()),
            status: Some("completed".to_string()),
            score: Some(8),
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_session_returns_201() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);

        let response = create_session(State(state), Path(dog_id), Json(create_request()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_session_for_unknown_dog_returns_404() {
        let (state, _env) = test_state();
        let response = create_session(State(state), Path(Uuid::nil()), Json(create_request()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_session_with_bad_score_returns_400() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);

        let request = CreateSessionRequest {
            score: Some(11),
            ..create_request()
        };
        let response = create_session(State(state), Path(dog_id), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_session_via_wrong_dog_returns_404() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);
        let other_dog_id = create_test_dog(&state);

        let created = state
            .backend
            .session_service
            .create_session(CreateSessionCommand {
                dog_id: dog_id.to_string(),
                training_id: Some("t1".to_string()),
                plan_id: None,
                date: Some(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()),
                status: Some("completed".to_string()),
                score: None,
                notes: None,
            })
            .unwrap();

        let response = get_session(State(state), Path((other_dog_id, created.id)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_sessions_requires_from_and_to() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);

        let params = SessionRangeParams {
            from: Some("2026-02-09".to_string()),
            to: None,
        };
        let response = list_sessions(State(state), Path(dog_id), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_sessions_rejects_malformed_dates() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);

        let params = SessionRangeParams {
            from: Some("not-a-date".to_string()),
            to: Some("2026-02-15".to_string()),
        };
        let response = list_sessions(State(state), Path(dog_id), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_sessions_returns_200_for_valid_range() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);

        let params = SessionRangeParams {
            from: Some("2026-02-09".to_string()),
            to: Some("2026-02-15".to_string()),
        };
        let response = list_sessions(State(state), Path(dog_id), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_session_returns_204_then_404() {
        let (state, _env) = test_state();
        let dog_id = create_test_dog(&state);

        let created = state
            .backend
            .session_service
            .create_session(CreateSessionCommand {
                dog_id: dog_id.to_string(),
                training_id: Some("t1".to_string()),
                plan_id: None,
                date: Some(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()),
                status: Some("skipped".to_string()),
                score: None,
                notes: None,
            })
            .unwrap();

        let response = delete_session(State(state.clone()), Path((dog_id, created.id.clone())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let again = delete_session(State(state), Path((dog_id, created.id)))
            .await
            .into_response();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }
}
