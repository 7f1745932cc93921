//! Request and response shapes shared across the HTTP boundary.

pub mod api;
pub mod game;
