use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::paciente;
use crate::state::AppState;

pub fn paciente_routes() -> Router<AppState> {
    Router::new()
        .route("/paciente", post(paciente::create).put(paciente::update))
        .route(
            "/paciente/:id",
            get(paciente::get_by_id).delete(paciente::delete_by_id),
        )
        .route("/paciente/medico/:medico_id", get(paciente::list_by_medico))
}
