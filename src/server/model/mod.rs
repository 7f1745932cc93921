//! Server-side domain models and parameter types.
//!
//! Parameter models are converted from DTOs at the service boundary and into SeaORM active
//! models at the data boundary, so entity types never leak into the API layer. Field validation
//! rules for the input DTOs live alongside them.

pub mod game;
pub mod validation;
