//! SeaORM entity models for the games database.

pub mod game;
pub mod prelude;
