// medically-core data
// This crate handles database access for the medically-core service

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("medically_data needs at least one of the `sqlite` or `postgres` features");

// Database configuration, connection bootstrap and migrations
pub mod database;

// Store implementations for data access
pub mod repository;

// Table layouts and raw rows
pub mod models;
