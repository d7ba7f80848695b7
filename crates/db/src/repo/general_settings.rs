use hms_core::types::{GeneralSettings, GeneralSettingsData};
use sqlx::SqlitePool;

use crate::DbError;

type SettingsRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

/// Queries against the `general_settings` table.
///
/// Rows are never deleted and nothing stops several from coexisting.
#[derive(Debug, Clone)]
pub struct GeneralSettingsRepo {
    pool: SqlitePool,
}

impl GeneralSettingsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a settings row by ID.
    pub async fn get_general_settings(&self, id: i64) -> Result<Option<GeneralSettings>, DbError> {
        let row: Option<SettingsRow> = sqlx::query_as(
            "SELECT id, hospital_name, hospital_code, address, phone, email, language, \
             date_time, time_zone FROM general_settings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| GeneralSettings {
            id: r.0,
            hospital_name: r.1,
            hospital_code: r.2,
            address: r.3,
            phone: r.4,
            email: r.5,
            language: r.6,
            date_time: r.7,
            time_zone: r.8,
        }))
    }

    /// Insert a new settings row. Returns the store-assigned ID.
    pub async fn save_general_settings(&self, data: &GeneralSettingsData) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO general_settings (hospital_name, hospital_code, address, phone, email, \
             language, date_time, time_zone) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&data.hospital_name)
        .bind(&data.hospital_code)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.language)
        .bind(&data.date_time)
        .bind(&data.time_zone)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace all fields of one row. Returns the affected-row count; zero means no such ID.
    pub async fn update_general_settings(
        &self,
        id: i64,
        data: &GeneralSettingsData,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE general_settings SET hospital_name = ?, hospital_code = ?, address = ?, \
             phone = ?, email = ?, language = ?, date_time = ?, time_zone = ? WHERE id = ?",
        )
        .bind(&data.hospital_name)
        .bind(&data.hospital_code)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.language)
        .bind(&data.date_time)
        .bind(&data.time_zone)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> GeneralSettingsRepo {
        let pool = crate::connect(&crate::DbConfig::new(":memory:"))
            .await
            .unwrap();
        crate::schema::ensure(&pool).await.unwrap();
        GeneralSettingsRepo::new(pool)
    }

    fn sample(name: &str) -> GeneralSettingsData {
        GeneralSettingsData {
            hospital_name: name.into(),
            hospital_code: "GH-1".into(),
            address: "1 Main St".into(),
            phone: "555-0000".into(),
            email: "info@gh.example".into(),
            language: "en".into(),
            date_time: "2024-01-01T00:00:00Z".into(),
            time_zone: "UTC".into(),
        }
    }

    #[tokio::test]
    async fn save_then_get() {
        let repo = repo().await;
        let id = repo.save_general_settings(&sample("General")).await.unwrap();

        let stored = repo.get_general_settings(id).await.unwrap().unwrap();
        assert_eq!(stored, GeneralSettings::new(id, sample("General")));
    }

    #[tokio::test]
    async fn multiple_rows_may_coexist() {
        let repo = repo().await;
        let a = repo.save_general_settings(&sample("General")).await.unwrap();
        let b = repo.save_general_settings(&sample("General")).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let repo = repo().await;
        let id = repo.save_general_settings(&sample("Old")).await.unwrap();

        let replacement = GeneralSettingsData {
            hospital_name: "New".into(),
            hospital_code: "NH-2".into(),
            address: "2 High St".into(),
            phone: "555-9999".into(),
            email: "desk@nh.example".into(),
            language: "fr".into(),
            date_time: "2025-06-01T12:00:00Z".into(),
            time_zone: "Europe/Paris".into(),
        };
        let affected = repo
            .update_general_settings(id, &replacement)
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let stored = repo.get_general_settings(id).await.unwrap().unwrap();
        assert_eq!(stored, GeneralSettings::new(id, replacement));
    }

    #[tokio::test]
    async fn update_of_missing_row_affects_nothing() {
        let repo = repo().await;
        let affected = repo
            .update_general_settings(99, &sample("Ghost"))
            .await
            .unwrap();
        assert_eq!(affected, 0);
        assert!(repo.get_general_settings(99).await.unwrap().is_none());
    }
}
