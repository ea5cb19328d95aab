//! Exam endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::models::{Exam, ExamInput};

#[derive(Serialize)]
pub struct ExamResponse {
    pub mensaje: &'static str,
    pub examen: Exam,
}

#[derive(Serialize)]
pub struct ExamsResponse {
    pub examenes: Vec<Exam>,
    pub total: usize,
}

/// `POST /examenes`
pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<ExamInput>,
) -> Result<Json<ExamResponse>, ApiError> {
    Ok(Json(ExamResponse {
        mensaje: "Examen registrado exitosamente",
        examen: ctx.core.create_exam(input)?,
    }))
}

/// `GET /examenes/:cedula`
pub async fn list(
    State(ctx): State<ApiContext>,
    Path(owner_id): Path<String>,
) -> Result<Json<ExamsResponse>, ApiError> {
    let examenes = ctx.core.list_exams(&owner_id)?;

    Ok(Json(ExamsResponse {
        total: examenes.len(),
        examenes,
    }))
}
