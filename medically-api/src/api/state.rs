use axum::extract::FromRef;

use medically_data::repository::SharedStore;
use medically_domain::entities::{Clinic, Disease, Med, User};
use medically_domain::services::{MessageService, RecordService};

/// Services shared by every handler.
///
/// Handlers extract the one service they need through `State<...>`.
#[derive(Debug, Clone, FromRef)]
pub struct AppState {
    pub users: RecordService<User>,
    pub meds: RecordService<Med>,
    pub diseases: RecordService<Disease>,
    pub clinics: RecordService<Clinic>,
    pub messages: MessageService,
}

impl AppState {
    /// Build every service over the same store
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: RecordService::new(store.clone()),
            meds: RecordService::new(store.clone()),
            diseases: RecordService::new(store.clone()),
            clinics: RecordService::new(store.clone()),
            messages: MessageService::new(store),
        }
    }
}
