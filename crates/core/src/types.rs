use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment fields as validated for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_name: String,
    pub appointment_no: String,
    pub appointment_date: String,
    pub phone: String,
    pub gender: String,
    pub doctor: String,
    pub priority: String,
    pub fee: f64,
}

/// A stored appointment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub appointment_no: String,
    #[schema(example = "2024-03-01")]
    pub appointment_date: String,
    pub phone: String,
    pub gender: String,
    pub doctor: String,
    pub priority: String,
    pub fee: f64,
}

impl Appointment {
    pub fn new(id: i64, fields: NewAppointment) -> Self {
        Self {
            id,
            patient_name: fields.patient_name,
            appointment_no: fields.appointment_no,
            appointment_date: fields.appointment_date,
            phone: fields.phone,
            gender: fields.gender,
            doctor: fields.doctor,
            priority: fields.priority,
            fee: fields.fee,
        }
    }
}

/// The eight general settings fields, used for both insert and replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettingsData {
    pub hospital_name: String,
    pub hospital_code: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub language: String,
    pub date_time: String,
    pub time_zone: String,
}

/// A stored general settings row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub id: i64,
    pub hospital_name: String,
    pub hospital_code: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub language: String,
    #[schema(format = DateTime)]
    pub date_time: String,
    pub time_zone: String,
}

impl GeneralSettings {
    pub fn new(id: i64, fields: GeneralSettingsData) -> Self {
        Self {
            id,
            hospital_name: fields.hospital_name,
            hospital_code: fields.hospital_code,
            address: fields.address,
            phone: fields.phone,
            email: fields.email,
            language: fields.language,
            date_time: fields.date_time,
            time_zone: fields.time_zone,
        }
    }
}

/// Response body for a successful create: `{ "message", "id" }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

impl Created {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
