//! HTTP JSON API for managing a catalogue of games.
//!
//! `model` holds the request and response shapes; `server` holds everything behind the HTTP
//! boundary. The binary in `main.rs` wires them together.

pub mod model;
pub mod server;
