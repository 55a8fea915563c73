//! Doctor endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::Medico;
use crate::state::AppState;
use crate::Result;

pub async fn create(
    State(state): State<AppState>,
    Json(medico): Json<Medico>,
) -> Result<Response> {
    state.medico_service.create(medico).await?;
    Ok(StatusCode::CREATED.into_response())
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let medico = state.medico_service.get_by_id(id).await?;
    Ok((StatusCode::OK, Json(medico)).into_response())
}

pub async fn get_by_dni(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Response> {
    let medico = state.medico_service.get_by_dni(&dni).await?;
    Ok((StatusCode::OK, Json(medico)).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Json(medico): Json<Medico>,
) -> Result<Response> {
    state.medico_service.update(medico).await?;
    Ok(StatusCode::OK.into_response())
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    state.medico_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
