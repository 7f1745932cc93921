//! Request extractors shared by the controllers.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::AppError, model::validation::Validate, service::game::INVALID_GAME_ID_MESSAGE,
};

/// Game ID taken from the `{id}` path segment.
///
/// Rejects with 400 Bad Request before the handler runs when the segment is not an integer
/// or is less than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i32);

impl<S> FromRequestParts<S> for GameId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_GAME_ID_MESSAGE.to_string()))?;

        parse_game_id(&raw).map(Self)
    }
}

fn parse_game_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(INVALID_GAME_ID_MESSAGE.to_string())),
    }
}

/// JSON body that has passed field validation.
///
/// Malformed JSON is rejected with 400 Bad Request carrying the decoder's message. A body
/// that decodes but breaks a field rule is rejected with the collected validation failures.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}
