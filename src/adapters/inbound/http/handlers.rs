//! Relay endpoint handlers

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{
    error::{ApiError, ApiResult, Endpoint},
    state::AppState,
};
use crate::provisioning::domain::{
    CreateComponentPayload, InitProjectPayload, ProjectListQuery, RelayReply,
};
use crate::shared::{RelayError, RelayResult};

impl IntoResponse for RelayReply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self.body)).into_response()
    }
}

/// `POST /api/init`
pub async fn init_project(State(state): State<AppState>, body: Bytes) -> ApiResult<RelayReply> {
    let endpoint = Endpoint::Init;
    let payload: InitProjectPayload = parse_body(&body).map_err(|e| ApiError::new(endpoint, e))?;

    state
        .relay
        .init_project(payload)
        .await
        .map_err(|e| ApiError::new(endpoint, e))
}

/// `POST /api/component/create`
pub async fn create_component(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<RelayReply> {
    let endpoint = Endpoint::CreateComponent;
    let payload: CreateComponentPayload =
        parse_body(&body).map_err(|e| ApiError::new(endpoint, e))?;

    state
        .relay
        .create_component(payload)
        .await
        .map_err(|e| ApiError::new(endpoint, e))
}

/// `GET /api/projects?parent_dir=<dir>`
pub async fn list_projects(
    State(state): State<AppState>,
    query: Result<Query<ProjectListQuery>, QueryRejection>,
) -> ApiResult<RelayReply> {
    let endpoint = Endpoint::ListProjects;
    let Query(query) = query.map_err(|e| {
        ApiError::new(
            endpoint,
            RelayError::InvalidQuery {
                details: e.body_text(),
            },
        )
    })?;

    state
        .relay
        .list_projects(query)
        .await
        .map_err(|e| ApiError::new(endpoint, e))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": state.relay.mode().to_string(),
        "uptime": state.uptime_seconds(),
    }))
}

/// Parses a JSON body without requiring a content type; an empty body is `{}`.
fn parse_body<T>(body: &[u8]) -> RelayResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| RelayError::InvalidBody {
        details: e.to_string(),
    })
}
