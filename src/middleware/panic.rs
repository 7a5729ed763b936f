use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ErrorBody;

/// Turns a handler panic into a 500 with the standard error envelope so one
/// failing request never takes the server down.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Panic recovered: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )),
    )
        .into_response()
}
