use hms_core::types::{Appointment, NewAppointment};
use sqlx::SqlitePool;

use crate::DbError;

type AppointmentRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    f64,
);

const SELECT_ALL: &str = "SELECT id, patient_name, appointment_no, appointment_date, phone, \
     gender, doctor, priority, fee FROM appointments";

const SELECT_BY_ID: &str = "SELECT id, patient_name, appointment_no, appointment_date, phone, \
     gender, doctor, priority, fee FROM appointments WHERE id = ?";

fn from_row(r: AppointmentRow) -> Appointment {
    Appointment {
        id: r.0,
        patient_name: r.1,
        appointment_no: r.2,
        appointment_date: r.3,
        phone: r.4,
        gender: r.5,
        doctor: r.6,
        priority: r.7,
        fee: r.8,
    }
}

/// Queries against the `appointments` table.
#[derive(Debug, Clone)]
pub struct AppointmentRepo {
    pool: SqlitePool,
}

impl AppointmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one appointment. Returns the store-assigned ID.
    pub async fn add_appointment(&self, appointment: &NewAppointment) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO appointments (patient_name, appointment_no, appointment_date, phone, \
             gender, doctor, priority, fee) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&appointment.patient_name)
        .bind(&appointment.appointment_no)
        .bind(&appointment.appointment_date)
        .bind(&appointment.phone)
        .bind(&appointment.gender)
        .bind(&appointment.doctor)
        .bind(&appointment.priority)
        .bind(appointment.fee)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Every appointment, in the store's default order.
    pub async fn get_appointments(&self) -> Result<Vec<Appointment>, DbError> {
        let rows: Vec<AppointmentRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    pub async fn get_appointment_by_id(&self, id: i64) -> Result<Option<Appointment>, DbError> {
        let row: Option<AppointmentRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(from_row))
    }
}
