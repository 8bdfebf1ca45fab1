use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    /// Id of the deleted record
    #[schema(example = 1)]
    pub id: i64,
}

/// Row count of the message table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 3)]
    pub count: i64,
}

/// A single message, used by the health and add-message endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "medically-core at your service!")]
    pub message: String,
}
