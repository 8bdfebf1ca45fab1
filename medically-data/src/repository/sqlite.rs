use std::sync::Arc;
use async_trait::async_trait;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use tracing::debug;

use crate::models::{Row, TableDef};
use super::errors::RepositoryError;
use super::sql::{self, Dialect};
use super::store::Store;

/// Pool type shared with the bootstrap code
pub type SqlitePool = r2d2::Pool<SqliteConnectionManager>;

/// Store backed by an r2d2 pool of SQLite connections.
///
/// rusqlite is blocking, so every call runs on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Arc<SqlitePool>,
}

impl SqliteStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, op: F) -> Result<T, RepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, RepositoryError> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            op(&conn)
        })
        .await?
    }
}

fn read_row(table: &TableDef, row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
    let id = row.get::<_, i64>(0)?;
    let values = (1..=table.columns.len())
        .map(|i| row.get::<_, Option<String>>(i))
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(Row::new(id, values))
}

fn to_params(values: &[Option<String>]) -> Vec<Value> {
    values
        .iter()
        .map(|v| match v {
            Some(text) => Value::Text(text.clone()),
            None => Value::Null,
        })
        .collect()
}

#[async_trait]
impl Store for SqliteStore {
    async fn find_all(&self, table: &'static TableDef) -> Result<Vec<Row>, RepositoryError> {
        debug!("Listing rows from SQLite: table={}", table.name);

        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(&sql::select_all(table))?;
            let rows = stmt.query_map([], |row| read_row(table, row))?;

            let mut result = Vec::new();
            for row in rows {
                result.push(row?);
            }
            Ok(result)
        })
        .await
    }

    async fn find(&self, table: &'static TableDef, id: i64) -> Result<Row, RepositoryError> {
        debug!("Getting row from SQLite: table={} id={}", table.name, id);

        self.with_conn(move |conn| {
            conn.query_row(&sql::select_by_id(table, Dialect::Sqlite), [id], |row| read_row(table, row))
                .optional()?
                .ok_or_else(|| RepositoryError::row_not_found(table.name, id))
        })
        .await
    }

    async fn create(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<Row, RepositoryError> {
        debug!("Inserting row into SQLite: table={}", table.name);

        self.with_conn(move |conn| {
            let id = conn.query_row(
                &sql::insert(table, Dialect::Sqlite),
                params_from_iter(to_params(&values)),
                |row| row.get::<_, i64>(0),
            )?;
            Ok(Row::new(id, values))
        })
        .await
    }

    async fn save(&self, table: &'static TableDef, row: Row) -> Result<Row, RepositoryError> {
        debug!("Updating row in SQLite: table={} id={}", table.name, row.id);

        self.with_conn(move |conn| {
            let mut params = to_params(&row.values);
            params.push(Value::Integer(row.id));

            let affected = conn.execute(&sql::update(table, Dialect::Sqlite), params_from_iter(params))?;
            if affected == 0 {
                return Err(RepositoryError::row_not_found(table.name, row.id));
            }
            Ok(row)
        })
        .await
    }

    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, RepositoryError> {
        debug!("Deleting row from SQLite: table={} id={}", table.name, id);

        self.with_conn(move |conn| {
            let affected = conn.execute(&sql::delete(table, Dialect::Sqlite), [id])?;
            Ok(affected as u64)
        })
        .await
    }

    async fn upsert(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<(), RepositoryError> {
        debug!("Upserting row into SQLite: table={}", table.name);

        self.with_conn(move |conn| {
            conn.execute(&sql::upsert(table, Dialect::Sqlite), params_from_iter(to_params(&values)))?;
            Ok(())
        })
        .await
    }

    async fn count(&self, table: &'static TableDef) -> Result<i64, RepositoryError> {
        self.with_conn(move |conn| {
            let count = conn.query_row(&sql::count(table), [], |row| row.get::<_, i64>(0))?;
            Ok(count)
        })
        .await
    }
}
