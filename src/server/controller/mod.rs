//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call the matching service, and map the
//! result to a status code. They hold no business logic; every failure is returned as an
//! `AppError` and rendered by its `IntoResponse` implementation.

pub mod game;
pub mod param;

#[cfg(test)]
mod test;
