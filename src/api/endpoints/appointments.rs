//! Appointment endpoints.
//!
//! - `POST /citas`: book
//! - `GET /citas?cedula=`: list, optionally one owner's
//! - `GET /citas/:id`: detail
//! - `PUT /citas/:id`: full replace
//! - `PATCH /citas/:id/confirmar`: mark confirmed
//! - `DELETE /citas/:id`: cancel (hard delete)

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::{ApiContext, MessageResponse, OwnerFilter};
use crate::models::{Appointment, AppointmentInput};

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub mensaje: &'static str,
    pub cita: Appointment,
}

#[derive(Serialize)]
pub struct AppointmentDetail {
    pub cita: Appointment,
}

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub citas: Vec<Appointment>,
    pub total: usize,
}

/// `POST /citas`
pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<AppointmentInput>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let cita = ctx.core.create_appointment(input)?;
    tracing::info!(id = cita.id, specialty = %cita.specialty, "Appointment booked");

    Ok(Json(AppointmentResponse {
        mensaje: "Cita agendada exitosamente",
        cita,
    }))
}

/// `GET /citas?cedula=`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(filter): Query<OwnerFilter>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let citas = ctx.core.list_appointments(filter.owner())?;

    Ok(Json(AppointmentsResponse {
        total: citas.len(),
        citas,
    }))
}

/// `GET /citas/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<AppointmentDetail>, ApiError> {
    Ok(Json(AppointmentDetail {
        cita: ctx.core.get_appointment(id)?,
    }))
}

/// `PUT /citas/:id`
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    ApiJson(input): ApiJson<AppointmentInput>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    Ok(Json(AppointmentResponse {
        mensaje: "Cita actualizada",
        cita: ctx.core.update_appointment(id, input)?,
    }))
}

/// `PATCH /citas/:id/confirmar`
pub async fn confirm(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let cita = ctx.core.confirm_appointment(id)?;
    tracing::info!(id, "Appointment confirmed");

    Ok(Json(AppointmentResponse {
        mensaje: "Cita confirmada exitosamente",
        cita,
    }))
}

/// `DELETE /citas/:id`
pub async fn cancel(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    ctx.core.delete_appointment(id)?;
    tracing::info!(id, "Appointment cancelled");

    Ok(Json(MessageResponse {
        mensaje: "Cita cancelada exitosamente",
    }))
}
