//! Statistics endpoint.

use axum::extract::{Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, OwnerFilter};
use crate::stats::Statistics;

/// `GET /estadisticas?cedula=`: breakdowns by specialty, center and status.
pub async fn summary(
    State(ctx): State<ApiContext>,
    Query(filter): Query<OwnerFilter>,
) -> Result<Json<Statistics>, ApiError> {
    Ok(Json(ctx.core.statistics(filter.owner())?))
}
