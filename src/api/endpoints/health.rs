//! Liveness endpoint.

use axum::Json;

use crate::api::types::MessageResponse;

/// `GET /`: the service is up.
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        mensaje: "API de Citas Médicas funcionando correctamente",
    })
}
