use hms_db::repo::{AppointmentRepo, GeneralSettingsRepo};
use sqlx::SqlitePool;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub appointments: AppointmentRepo,
    pub settings: GeneralSettingsRepo,
}

impl AppState {
    /// Hand the one persistence client to every repository.
    pub fn new(db: SqlitePool) -> Self {
        Self {
            appointments: AppointmentRepo::new(db.clone()),
            settings: GeneralSettingsRepo::new(db.clone()),
            db,
        }
    }
}
