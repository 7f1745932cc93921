//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They are
//! responsible for:
//!
//! - **Business Rules**: Rejecting invalid identifiers and missing entities
//! - **Mapping**: Converting DTOs into parameter models and stored entities back into DTOs
//! - **Observability**: Logging successful mutations once they are persisted

pub mod game;
