use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use hms_core::error::{ApiError, ErrorResponse, MessageResponse};
use hms_core::types::{Created, GeneralSettings};
use tracing::{error, info};

use crate::error::{AppError, JsonBody};
use crate::state::AppState;
use crate::validation::{GeneralSettingsRequest, parse_id};

const NOT_FOUND: &str = "General settings not found";

#[utoipa::path(
    get,
    path = "/settings/general/{id}",
    tag = "settings",
    params(("id" = i64, Path, description = "General settings ID")),
    responses(
        (status = 200, description = "General settings details", body = GeneralSettings),
        (status = 404, description = "General settings not found", body = MessageResponse),
        (status = 500, description = "Failed to fetch general settings", body = ErrorResponse)
    )
)]
pub async fn get_general_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GeneralSettings>, AppError> {
    let id = parse_id(&id).ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;

    let settings = state
        .settings
        .get_general_settings(id)
        .await
        .map_err(|e| {
            error!(error = %e, id, "error fetching general settings");
            ApiError::Internal("Failed to fetch general settings".into())
        })?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;

    Ok(Json(settings))
}

#[utoipa::path(
    post,
    path = "/settings/general",
    tag = "settings",
    request_body = GeneralSettingsRequest,
    responses(
        (status = 201, description = "General settings saved successfully", body = Created),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 500, description = "Failed to save general settings", body = ErrorResponse)
    )
)]
pub async fn save_general_settings(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<GeneralSettingsRequest>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let data = body.validate()?;

    let id = state
        .settings
        .save_general_settings(&data)
        .await
        .map_err(|e| {
            error!(error = %e, "error saving general settings");
            ApiError::Internal("Failed to save general settings".into())
        })?;

    info!(id, "general settings saved");
    Ok((
        StatusCode::CREATED,
        Json(Created::new("General settings saved successfully", id)),
    ))
}

#[utoipa::path(
    put,
    path = "/settings/general/{id}",
    tag = "settings",
    params(("id" = i64, Path, description = "General settings ID")),
    request_body = GeneralSettingsRequest,
    responses(
        (status = 200, description = "General settings updated successfully", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 404, description = "General settings not found", body = MessageResponse),
        (status = 500, description = "Failed to update general settings", body = ErrorResponse)
    )
)]
pub async fn update_general_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<GeneralSettingsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let data = body.validate()?;
    let id = parse_id(&id).ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;

    let affected = state
        .settings
        .update_general_settings(id, &data)
        .await
        .map_err(|e| {
            error!(error = %e, id, "error updating general settings");
            ApiError::Internal("Failed to update general settings".into())
        })?;

    if affected == 0 {
        return Err(ApiError::NotFound(NOT_FOUND.into()).into());
    }

    info!(id, "general settings updated");
    Ok(Json(MessageResponse::new(
        "General settings updated successfully",
    )))
}
