use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::medico;
use crate::state::AppState;

pub fn medico_routes() -> Router<AppState> {
    Router::new()
        .route("/medico", post(medico::create).put(medico::update))
        .route(
            "/medico/:id",
            get(medico::get_by_id).delete(medico::delete_by_id),
        )
        .route("/medico/dni/:dni", get(medico::get_by_dni))
}
