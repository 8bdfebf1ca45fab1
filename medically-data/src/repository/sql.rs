//! SQL text for the store operations, shared by the SQLite and PostgreSQL stores.
//!
//! Identifiers are double-quoted because some column names (`desc`) are
//! reserved words in both dialects.

use crate::models::TableDef;

/// Placeholder flavour of the target database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `?1, ?2, ...`
    Sqlite,
    /// `$1, $2, ...`
    Postgres,
}

impl Dialect {
    /// Placeholder for the 1-based parameter `index`
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Sqlite => format!("?{}", index),
            Dialect::Postgres => format!("${}", index),
        }
    }
}

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn column_list(table: &TableDef) -> String {
    table.column_names().map(quote).collect::<Vec<_>>().join(", ")
}

/// `SELECT id, <columns> FROM <table> ORDER BY id`
pub fn select_all(table: &TableDef) -> String {
    format!(
        "SELECT \"id\", {} FROM {} ORDER BY \"id\"",
        column_list(table),
        quote(table.name)
    )
}

/// `SELECT id, <columns> FROM <table> WHERE id = $1`
pub fn select_by_id(table: &TableDef, dialect: Dialect) -> String {
    format!(
        "SELECT \"id\", {} FROM {} WHERE \"id\" = {}",
        column_list(table),
        quote(table.name),
        dialect.placeholder(1)
    )
}

/// `INSERT INTO <table> (<columns>) VALUES ($1, ...) RETURNING id`
pub fn insert(table: &TableDef, dialect: Dialect) -> String {
    let placeholders = (1..=table.columns.len())
        .map(|i| dialect.placeholder(i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING \"id\"",
        quote(table.name),
        column_list(table),
        placeholders
    )
}

/// `UPDATE <table> SET c1 = $1, ... WHERE id = $n+1`
pub fn update(table: &TableDef, dialect: Dialect) -> String {
    let assignments = table
        .column_names()
        .enumerate()
        .map(|(i, name)| format!("{} = {}", quote(name), dialect.placeholder(i + 1)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE \"id\" = {}",
        quote(table.name),
        assignments,
        dialect.placeholder(table.columns.len() + 1)
    )
}

/// `DELETE FROM <table> WHERE id = $1`
pub fn delete(table: &TableDef, dialect: Dialect) -> String {
    format!(
        "DELETE FROM {} WHERE \"id\" = {}",
        quote(table.name),
        dialect.placeholder(1)
    )
}

/// Insert keyed on the first column, overwriting every column on conflict
pub fn upsert(table: &TableDef, dialect: Dialect) -> String {
    let placeholders = (1..=table.columns.len())
        .map(|i| dialect.placeholder(i))
        .collect::<Vec<_>>()
        .join(", ");
    let key = table.columns.first().map(|c| quote(c.name)).unwrap_or_default();
    let assignments = table
        .column_names()
        .map(|name| format!("{0} = excluded.{0}", quote(name)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {}",
        quote(table.name),
        column_list(table),
        placeholders,
        key,
        assignments
    )
}

/// `SELECT COUNT(*) FROM <table>`
pub fn count(table: &TableDef) -> String {
    format!("SELECT COUNT(*) FROM {}", quote(table.name))
}
