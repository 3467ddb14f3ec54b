use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nook_core::{decode_body, NookError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::Any;
use tracing::error;

/// JSON body extractor whose rejections become the failure envelope instead
/// of axum's plain-text 4xx replies. The body must be a JSON object.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(ApiJson(decode_body(value)?))
    }
}

pub struct AppError(pub NookError);

impl From<NookError> for AppError {
    fn from(err: NookError) -> Self {
        AppError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(NookError::InvalidBody(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Request error");

        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.0.to_json_error())).into_response()
    }
}

/// Turns a handler panic into the same 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError(NookError::Internal(message)).into_response()
}
