use sqlx::SqlitePool;
use tracing::info;

const SCHEMA: &str = include_str!("../schema/hospital.sql");

/// Create the `appointments` and `general_settings` tables when absent.
///
/// Existing tables are left untouched; there is no version tracking.
pub async fn ensure(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() {
            continue;
        }
        sqlx::query(trimmed).execute(pool).await?;
    }

    info!("schema ensured");
    Ok(())
}
