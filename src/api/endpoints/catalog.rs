//! Catalog endpoints. Static lists, no state.

use axum::Json;
use serde::Serialize;

use crate::catalog::{HEALTH_CENTERS, SPECIALTIES};

#[derive(Serialize)]
pub struct CentersResponse {
    pub centros: &'static [&'static str],
}

#[derive(Serialize)]
pub struct SpecialtiesResponse {
    pub especialidades: &'static [&'static str],
}

/// `GET /centros`
pub async fn centers() -> Json<CentersResponse> {
    Json(CentersResponse {
        centros: HEALTH_CENTERS,
    })
}

/// `GET /especialidades`
pub async fn specialties() -> Json<SpecialtiesResponse> {
    Json(SpecialtiesResponse {
        especialidades: SPECIALTIES,
    })
}
