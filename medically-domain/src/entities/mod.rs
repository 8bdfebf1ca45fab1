// Domain entities and their table mapping
pub mod message;
pub mod records;

use medically_data::models::{Row, TableDef};

// Re-export common types for easier imports
pub use message::Message;
pub use records::{Clinic, Disease, Med, User};

/// A record stored as one row of a serial-keyed table.
///
/// Field order in [`Entity::into_values`] and [`Entity::from_row`] follows the
/// columns of [`Entity::table`].
pub trait Entity: Sized + Send + Sync + 'static {
    /// Singular name used in routes and logs
    const NAME: &'static str;

    /// Table the entity lives in
    fn table() -> &'static TableDef;

    /// Store-assigned id, if known
    fn id(&self) -> Option<i64>;

    /// The same record carrying `id`
    fn with_id(self, id: Option<i64>) -> Self;

    /// Column values in table order
    fn into_values(self) -> Vec<Option<String>>;

    /// Rebuild the entity from a stored row
    fn from_row(row: Row) -> Self;
}
