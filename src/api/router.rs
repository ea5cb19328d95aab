//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Layers (outermost → innermost): CORS → request log → handler.

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over a shared `CoreState`.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    Router::new()
        .route("/", get(endpoints::health::home))
        .route("/centros", get(endpoints::catalog::centers))
        .route("/especialidades", get(endpoints::catalog::specialties))
        .route("/login", post(endpoints::auth::login))
        .route("/registro", post(endpoints::auth::register))
        .route("/usuarios", get(endpoints::auth::users))
        .route(
            "/citas",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/citas/:id",
            get(endpoints::appointments::detail)
                .put(endpoints::appointments::update)
                .delete(endpoints::appointments::cancel),
        )
        .route(
            "/citas/:id/confirmar",
            patch(endpoints::appointments::confirm),
        )
        .route("/examenes", post(endpoints::exams::create))
        .route("/examenes/:cedula", get(endpoints::exams::list))
        .route("/estadisticas", get(endpoints::stats::summary))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        // Browser frontends are served from other origins.
        .layer(CorsLayer::permissive())
}
