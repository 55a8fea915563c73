//! Error taxonomy shared by services and the API layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No doctor with the given id.
    #[error("medico {id} not found")]
    MedicoNotFound { id: i64 },

    /// No doctor with the given dni.
    #[error("medico with dni '{dni}' not found")]
    MedicoDniNotFound { dni: String },

    /// No patient with the given id.
    #[error("paciente {id} not found")]
    PacienteNotFound { id: i64 },

    /// Duplicate id or dni on create, or a relationship rule violation.
    #[error("{0}")]
    Conflict(String),

    /// Payload is structurally valid JSON but violates an entity rule.
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status for this error.
    ///
    /// Lookup misses map to 500, not 404: the original clinic API surfaced
    /// absence as a server error with a JSON body, and its clients assert
    /// exactly that, so the mapping is kept for compatibility.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MedicoNotFound { .. }
            | Error::MedicoDniNotFound { .. }
            | Error::PacienteNotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::InvalidEntity(_) => StatusCode::BAD_REQUEST,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Error::MedicoNotFound { .. }
            | Error::MedicoDniNotFound { .. }
            | Error::PacienteNotFound { .. } => "not_found",
            Error::Conflict(_) => "conflict",
            Error::InvalidEntity(_) => "invalid",
            Error::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_are_server_errors() {
        let err = Error::MedicoNotFound { id: 1 };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = Error::PacienteNotFound { id: 1 };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn conflicts_are_client_errors() {
        let err = Error::Conflict("duplicate".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
