// medically-api lib.rs
//
// This is the main library file for the medically-core HTTP API.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::{create_router, AppState};
