//! Patient endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::Paciente;
use crate::state::AppState;
use crate::Result;

pub async fn create(
    State(state): State<AppState>,
    Json(paciente): Json<Paciente>,
) -> Result<Response> {
    state.paciente_service.create(paciente).await?;
    Ok(StatusCode::CREATED.into_response())
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let paciente = state.paciente_service.get_by_id(id).await?;
    Ok((StatusCode::OK, Json(paciente)).into_response())
}

pub async fn list_by_medico(
    State(state): State<AppState>,
    Path(medico_id): Path<i64>,
) -> Result<Response> {
    let pacientes = state.paciente_service.list_by_medico_id(medico_id).await?;
    Ok((StatusCode::OK, Json(pacientes)).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Json(paciente): Json<Paciente>,
) -> Result<Response> {
    state.paciente_service.update(paciente).await?;
    Ok(StatusCode::OK.into_response())
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    state.paciente_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
