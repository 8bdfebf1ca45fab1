use serde::{Deserialize, Serialize};

/// A free-form message, unique by value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(utoipa::ToSchema))]
pub struct Message {
    #[cfg_attr(feature = "with-api", schema(example = "hello"))]
    pub value: Option<String>,
}

impl Message {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}
