//! Database repository layer.
//!
//! Repositories wrap SeaORM queries behind a CRUD surface. The generic `Repository` covers any
//! entity with a primary key; entity-specific aliases pin it to concrete types. Conversion to
//! parameter models happens in the service layer so the repository stays entity-agnostic.

pub mod game;
pub mod repository;
