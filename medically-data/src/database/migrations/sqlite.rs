use rusqlite::Connection;
use tracing::info;

use crate::database::DatabaseError;

/// Run SQLite migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Running SQLite migrations");

    create_record_table(conn, "users", "email TEXT NOT NULL,\n            contact TEXT NOT NULL")?;
    create_record_table(conn, "medications", "\"desc\" TEXT NOT NULL")?;
    create_record_table(conn, "diseases", "\"desc\" TEXT NOT NULL")?;
    create_record_table(conn, "clinics", "\"desc\" TEXT NOT NULL")?;
    create_message_table(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Create a serial-keyed table with a required name plus `extra_columns`
fn create_record_table(conn: &Connection, table: &str, extra_columns: &str) -> Result<(), DatabaseError> {
    info!("Creating {} table if not exists", table);

    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            {}
        )",
        table, extra_columns
    );
    conn.execute(&ddl, [])
        .map_err(|e| DatabaseError::MigrationError(format!("Failed to create {}: {}", table, e)))?;

    Ok(())
}

/// Create the single-column message table keyed by its value
fn create_message_table(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Creating message table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS message (
            value TEXT PRIMARY KEY NOT NULL
        )",
        [],
    )
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create message: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_TABLES;

    fn column_names(conn: &Connection, table: &str) -> Vec<String> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info(\"{}\")", table)).unwrap();
        stmt.query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_migrations_create_every_table() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        for table in ALL_TABLES.iter() {
            let columns = column_names(&conn, table.name);
            for column in table.columns {
                assert!(
                    columns.iter().any(|c| c == column.name),
                    "{} is missing column {}",
                    table.name,
                    column.name
                );
            }
        }
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute("INSERT INTO clinics (name, \"desc\") VALUES ('North', 'walk-in')", [])
            .unwrap();

        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM clinics", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
