use std::sync::Arc;
use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::types::ToSql;
use tracing::debug;

use crate::models::{Row, TableDef};
use super::errors::RepositoryError;
use super::sql::{self, Dialect};
use super::store::Store;

/// Store backed by a deadpool pool of tokio-postgres clients
#[derive(Clone)]
pub struct PostgresStore {
    pool: Arc<Pool>,
}

impl std::fmt::Debug for PostgresStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("PostgresStore")
            .field("size", &status.size)
            .field("available", &status.available)
            .finish()
    }
}

impl PostgresStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

fn read_row(table: &TableDef, row: &tokio_postgres::Row) -> Result<Row, RepositoryError> {
    let id = row.try_get::<_, i64>(0)?;
    let values = (1..=table.columns.len())
        .map(|i| row.try_get::<_, Option<String>>(i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Row::new(id, values))
}

fn as_params(values: &[Option<String>]) -> Vec<&(dyn ToSql + Sync)> {
    values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
}

#[async_trait]
impl Store for PostgresStore {
    async fn find_all(&self, table: &'static TableDef) -> Result<Vec<Row>, RepositoryError> {
        debug!("Listing rows from PostgreSQL: table={}", table.name);

        let client = self.pool.get().await?;
        let rows = client.query(sql::select_all(table).as_str(), &[]).await?;
        rows.iter().map(|row| read_row(table, row)).collect()
    }

    async fn find(&self, table: &'static TableDef, id: i64) -> Result<Row, RepositoryError> {
        debug!("Getting row from PostgreSQL: table={} id={}", table.name, id);

        let client = self.pool.get().await?;
        let row = client
            .query_opt(sql::select_by_id(table, Dialect::Postgres).as_str(), &[&id])
            .await?
            .ok_or_else(|| RepositoryError::row_not_found(table.name, id))?;
        read_row(table, &row)
    }

    async fn create(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<Row, RepositoryError> {
        debug!("Inserting row into PostgreSQL: table={}", table.name);

        let client = self.pool.get().await?;
        let row = client
            .query_one(sql::insert(table, Dialect::Postgres).as_str(), &as_params(&values))
            .await?;
        let id = row.try_get::<_, i64>(0)?;
        Ok(Row::new(id, values))
    }

    async fn save(&self, table: &'static TableDef, row: Row) -> Result<Row, RepositoryError> {
        debug!("Updating row in PostgreSQL: table={} id={}", table.name, row.id);

        let client = self.pool.get().await?;
        let affected = {
            let mut params = as_params(&row.values);
            params.push(&row.id);
            client.execute(sql::update(table, Dialect::Postgres).as_str(), &params).await?
        };
        if affected == 0 {
            return Err(RepositoryError::row_not_found(table.name, row.id));
        }
        Ok(row)
    }

    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, RepositoryError> {
        debug!("Deleting row from PostgreSQL: table={} id={}", table.name, id);

        let client = self.pool.get().await?;
        let affected = client
            .execute(sql::delete(table, Dialect::Postgres).as_str(), &[&id])
            .await?;
        Ok(affected)
    }

    async fn upsert(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<(), RepositoryError> {
        debug!("Upserting row into PostgreSQL: table={}", table.name);

        let client = self.pool.get().await?;
        client
            .execute(sql::upsert(table, Dialect::Postgres).as_str(), &as_params(&values))
            .await?;
        Ok(())
    }

    async fn count(&self, table: &'static TableDef) -> Result<i64, RepositoryError> {
        let client = self.pool.get().await?;
        let row = client.query_one(sql::count(table).as_str(), &[]).await?;
        Ok(row.try_get::<_, i64>(0)?)
    }
}
