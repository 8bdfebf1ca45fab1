// Response bodies that are not domain entities
pub mod common;

pub use common::{CountResponse, DeleteResponse, MessageResponse};
