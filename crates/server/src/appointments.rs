use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use hms_core::error::{ApiError, ErrorResponse, MessageResponse};
use hms_core::types::{Appointment, Created};
use tracing::{error, info};

use crate::error::{AppError, JsonBody};
use crate::state::AppState;
use crate::validation::{AppointmentRequest, parse_id};

#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    request_body = AppointmentRequest,
    responses(
        (status = 201, description = "Appointment added successfully", body = Created),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 500, description = "Failed to add appointment", body = ErrorResponse)
    )
)]
pub async fn add_appointment(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AppointmentRequest>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let appointment = body.validate()?;

    let id = state
        .appointments
        .add_appointment(&appointment)
        .await
        .map_err(|e| {
            error!(error = %e, "error adding appointment");
            ApiError::Internal("Failed to add appointment".into())
        })?;

    info!(id, appointment_no = %appointment.appointment_no, "appointment added");
    Ok((
        StatusCode::CREATED,
        Json(Created::new("Appointment added successfully", id)),
    ))
}

#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    responses(
        (status = 200, description = "All appointments", body = Vec<Appointment>),
        (status = 500, description = "Failed to fetch appointments", body = ErrorResponse)
    )
)]
pub async fn get_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.appointments.get_appointments().await.map_err(|e| {
        error!(error = %e, "error fetching appointments");
        ApiError::Internal("Failed to fetch appointments".into())
    })?;
    Ok(Json(appointments))
}

#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = i64, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = Appointment),
        (status = 404, description = "Appointment not found", body = MessageResponse),
        (status = 500, description = "Failed to fetch appointment", body = ErrorResponse)
    )
)]
pub async fn get_appointment_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let not_found = || ApiError::NotFound("Appointment not found".into());
    let id = parse_id(&id).ok_or_else(not_found)?;

    let appointment = state
        .appointments
        .get_appointment_by_id(id)
        .await
        .map_err(|e| {
            error!(error = %e, id, "error fetching appointment");
            ApiError::Internal("Failed to fetch appointment".into())
        })?
        .ok_or_else(not_found)?;

    Ok(Json(appointment))
}
