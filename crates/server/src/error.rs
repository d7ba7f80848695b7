use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hms_core::error::ApiError;
use serde::de::DeserializeOwned;
use tracing::error;

/// Newtype wrapper so we can implement `IntoResponse` in this crate.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body())).into_response()
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

/// JSON body extractor.
///
/// A request without a JSON content type reads as an empty object, so the
/// handler's field checks answer it. A JSON body that cannot be read is an
/// unhandled failure and gets the 500 envelope.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                serde_json::from_value(serde_json::Value::Object(serde_json::Map::new()))
                    .map(Self)
                    .map_err(|e| ApiError::BadRequest(e.to_string()).into())
            }
            Err(rejection) => {
                error!(error = %rejection.body_text(), "failed to read request body");
                Err(ApiError::Unhandled(rejection.body_text()).into())
            }
        }
    }
}
