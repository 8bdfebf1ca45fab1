// medically-core domain
// This crate contains the entities and record services for the medically-core service

// Domain entities
pub mod entities;

// Service error taxonomy
pub mod errors;

// Services that implement the record operations
pub mod services;

// Re-export the data crate modules callers need to wire services up
pub use medically_data::database;
pub use medically_data::repository;

pub use errors::ServiceError;
