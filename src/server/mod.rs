//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the games service,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and request extractors
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Generic repository over SeaORM entities
//! - **Model Layer** (`model/`) - Parameter types and field validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Panic and unknown-route handling
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and tracing setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the game controller
//! 2. **Controller** extractors check the path ID and validate the JSON body
//! 3. **Service** rejects invalid IDs and missing games, converts DTOs to params
//! 4. **Data** queries the database through the generic repository
//! 5. **Service** converts the stored entity back into a DTO
//! 6. **Controller** returns the DTO with the matching status code
//! 7. **Error** converts any failure along the way into the error envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
