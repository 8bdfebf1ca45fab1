// Storage models shared by every store implementation
pub mod tables;

pub use tables::{Column, TableDef, TableKey, ALL_TABLES, CLINICS, DISEASES, MEDICATIONS, MESSAGES, USERS};

/// A stored row of a serial-keyed table.
///
/// `values` follows the order of [`TableDef::columns`]; `None` is SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Store-assigned identifier
    pub id: i64,

    /// Column values in table order
    pub values: Vec<Option<String>>,
}

impl Row {
    /// Create a row from its id and column values
    pub fn new(id: i64, values: Vec<Option<String>>) -> Self {
        Self { id, values }
    }
}
