use tracing::{info, instrument};

use medically_data::models::MESSAGES;
use medically_data::repository::SharedStore;

use crate::entities::Message;
use crate::errors::ServiceError;

/// Upsert and count over the message table
#[derive(Debug, Clone)]
pub struct MessageService {
    store: SharedStore,
}

impl MessageService {
    /// Create a new message service
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Store `message`, overwriting any message with the same value
    #[instrument(skip(self))]
    pub async fn upsert(&self, message: Message) -> Result<Message, ServiceError> {
        self.store.upsert(&MESSAGES, vec![message.value.clone()]).await?;
        info!("Stored message");
        Ok(message)
    }

    /// Number of stored messages
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, ServiceError> {
        Ok(self.store.count(&MESSAGES).await?)
    }
}
