//! Request and response processing outside the handlers.
//!
//! Handler failures are rendered by `AppError`'s `IntoResponse` implementation. This module
//! covers the two failure paths that never reach a handler's `Result`: panics and requests
//! that match no route.

pub mod error;
