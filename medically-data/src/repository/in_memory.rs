use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tracing::debug;

use crate::models::{Row, TableDef, TableKey};
use super::errors::RepositoryError;
use super::store::Store;

/// Rows of one table
#[derive(Debug, Default)]
struct TableData {
    /// Last id handed out; ids are never reused
    last_id: i64,
    /// Serial-keyed rows
    rows: BTreeMap<i64, Vec<Option<String>>>,
    /// Naturally keyed rows, keyed by the first column
    keyed: BTreeMap<String, Vec<Option<String>>>,
}

/// In-memory store with the same constraints as the SQL schema
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<HashMap<&'static str, TableData>>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn check_not_null(table: &TableDef, values: &[Option<String>]) -> Result<(), RepositoryError> {
        match table.first_null_violation(values) {
            Some(column) => Err(RepositoryError::ConstraintViolation(format!(
                "NOT NULL constraint failed: {}.{}",
                table.name, column
            ))),
            None => Ok(()),
        }
    }

    fn check_arity(table: &TableDef, values: &[Option<String>]) -> Result<(), RepositoryError> {
        if values.len() == table.columns.len() {
            Ok(())
        } else {
            Err(RepositoryError::Unknown(format!(
                "table {} has {} columns but {} values were supplied",
                table.name,
                table.columns.len(),
                values.len()
            )))
        }
    }

    fn require_serial(table: &TableDef) -> Result<(), RepositoryError> {
        match table.key {
            TableKey::Serial => Ok(()),
            TableKey::Natural => Err(RepositoryError::Unknown(format!(
                "table {} has no id column",
                table.name
            ))),
        }
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn find_all(&self, table: &'static TableDef) -> Result<Vec<Row>, RepositoryError> {
        Self::require_serial(table)?;
        let tables = self.tables.lock()?;
        let rows = tables
            .get(table.name)
            .map(|data| {
                data.rows
                    .iter()
                    .map(|(id, values)| Row::new(*id, values.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    async fn find(&self, table: &'static TableDef, id: i64) -> Result<Row, RepositoryError> {
        Self::require_serial(table)?;
        let tables = self.tables.lock()?;
        tables
            .get(table.name)
            .and_then(|data| data.rows.get(&id))
            .map(|values| Row::new(id, values.clone()))
            .ok_or_else(|| RepositoryError::row_not_found(table.name, id))
    }

    async fn create(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<Row, RepositoryError> {
        Self::require_serial(table)?;
        Self::check_arity(table, &values)?;
        Self::check_not_null(table, &values)?;

        let mut tables = self.tables.lock()?;
        let data = tables.entry(table.name).or_default();
        data.last_id += 1;
        let id = data.last_id;
        data.rows.insert(id, values.clone());

        debug!("Stored row in memory: table={} id={}", table.name, id);
        Ok(Row::new(id, values))
    }

    async fn save(&self, table: &'static TableDef, row: Row) -> Result<Row, RepositoryError> {
        Self::require_serial(table)?;
        Self::check_arity(table, &row.values)?;

        let mut tables = self.tables.lock()?;
        let slot = tables
            .get_mut(table.name)
            .and_then(|data| data.rows.get_mut(&row.id))
            .ok_or_else(|| RepositoryError::row_not_found(table.name, row.id))?;

        Self::check_not_null(table, &row.values)?;
        *slot = row.values.clone();
        Ok(row)
    }

    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, RepositoryError> {
        Self::require_serial(table)?;
        let mut tables = self.tables.lock()?;
        let removed = tables
            .get_mut(table.name)
            .and_then(|data| data.rows.remove(&id))
            .is_some();
        Ok(u64::from(removed))
    }

    async fn upsert(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<(), RepositoryError> {
        Self::check_arity(table, &values)?;
        Self::check_not_null(table, &values)?;

        let key = values
            .first()
            .cloned()
            .flatten()
            .ok_or_else(|| RepositoryError::ConstraintViolation(format!("missing key for table {}", table.name)))?;

        let mut tables = self.tables.lock()?;
        tables.entry(table.name).or_default().keyed.insert(key, values);
        Ok(())
    }

    async fn count(&self, table: &'static TableDef) -> Result<i64, RepositoryError> {
        let tables = self.tables.lock()?;
        let count = tables
            .get(table.name)
            .map(|data| data.rows.len() + data.keyed.len())
            .unwrap_or(0);
        Ok(count as i64)
    }
}
