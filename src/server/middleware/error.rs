use std::any::Any;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::error::{AppError, InternalServerError},
};

/// Converts a caught handler panic into the generic 500 envelope.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic payload is logged
/// and never returned to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Request handler panicked: {}", detail)).into_response()
}

/// Fallback for requests that match no route.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No resource found at {}.", uri.path()))
}

/// Fallback for requests whose path matches a route but whose method does not.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    let message = format!("Method {} is not allowed for {}.", method, uri.path());
    tracing::warn!("Method not allowed: {}", message);

    (StatusCode::METHOD_NOT_ALLOWED, Json(ErrorDto::new(message))).into_response()
}
