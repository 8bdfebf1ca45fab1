use tokio_postgres::Client;
use tracing::info;

use crate::database::DatabaseError;

/// Run PostgreSQL database migrations
pub async fn run_migrations(client: &Client) -> Result<(), DatabaseError> {
    info!("Running PostgreSQL migrations");

    create_record_table(client, "users", "email TEXT NOT NULL,\n            contact TEXT NOT NULL").await?;
    create_record_table(client, "medications", "\"desc\" TEXT NOT NULL").await?;
    create_record_table(client, "diseases", "\"desc\" TEXT NOT NULL").await?;
    create_record_table(client, "clinics", "\"desc\" TEXT NOT NULL").await?;
    create_message_table(client).await?;

    info!("PostgreSQL migrations completed successfully");
    Ok(())
}

/// Create a serial-keyed table with a required name plus `extra_columns`
async fn create_record_table(client: &Client, table: &str, extra_columns: &str) -> Result<(), DatabaseError> {
    info!("Creating {} table if not exists", table);

    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            {}
        )",
        table, extra_columns
    );
    client
        .execute(ddl.as_str(), &[])
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("Failed to create {}: {}", table, e)))?;

    Ok(())
}

/// Create the single-column message table keyed by its value
async fn create_message_table(client: &Client) -> Result<(), DatabaseError> {
    info!("Creating message table if not exists");

    client
        .execute(
            "CREATE TABLE IF NOT EXISTS message (
                value TEXT PRIMARY KEY
            )",
            &[],
        )
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("Failed to create message: {}", e)))?;

    Ok(())
}
