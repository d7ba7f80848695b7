use std::any::Any;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use hms_core::error::{ApiError, UnhandledEnvelope};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable};

use crate::error::AppError;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::{appointments, settings};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/api-docs", ApiDoc::openapi()))
        .route(
            "/appointments",
            post(appointments::add_appointment).get(appointments::get_appointments),
        )
        .route("/appointments/{id}", get(appointments::get_appointment_by_id))
        .route("/settings/general", post(settings::save_general_settings))
        .route(
            "/settings/general/{id}",
            get(settings::get_general_settings).put(settings::update_general_settings),
        )
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn route_not_found() -> AppError {
    ApiError::RouteNotFound.into()
}

/// Last line of defence: anything that panicked inside a handler.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        Some(s.clone())
    } else {
        err.downcast_ref::<&str>().map(|s| s.to_string())
    };
    error!(details = ?details, "unhandled error in request handler");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(UnhandledEnvelope::new(details)),
    )
        .into_response()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match hms_db::ping(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "database check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn panic_becomes_error_envelope() {
        let resp = handle_panic(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["message"], "Something went wrong!");
        assert_eq!(body["error"]["details"], "boom");
    }

    #[tokio::test]
    async fn opaque_panic_payload_gets_default_details() {
        let resp = handle_panic(Box::new(42_u8));
        let body = body_json(resp).await;
        assert_eq!(
            body["error"]["details"],
            "No additional error details available"
        );
    }

    #[tokio::test]
    async fn panicking_handler_is_caught_by_layer() {
        async fn explode() -> &'static str {
            panic!("handler exploded")
        }

        let app: Router = Router::new()
            .route("/boom", get(explode))
            .layer(CatchPanicLayer::custom(handle_panic));

        let resp = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["details"], "handler exploded");
    }
}
