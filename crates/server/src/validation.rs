use hms_core::error::{ApiError, FIELDS_REQUIRED};
use hms_core::types::{GeneralSettingsData, NewAppointment};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Body of `POST /appointments`. Every field is optional at parse time so a
/// missing field becomes a 400 rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub appointment_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[schema(example = "2024-03-01")]
    pub appointment_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub doctor: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "lenient_fee")]
    #[schema(value_type = Option<f64>)]
    pub fee: Option<Fee>,
}

/// Body of `POST /settings/general` and `PUT /settings/general/{id}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettingsRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub hospital_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hospital_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[schema(format = DateTime)]
    pub date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time_zone: Option<String>,
}

/// Collects the names of absent fields while unwrapping present ones.
#[derive(Default)]
struct Presence {
    missing: Vec<&'static str>,
}

impl Presence {
    fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// A JSON number must be non-zero; numeric text only has to be non-empty.
    fn fee(&mut self, name: &'static str, value: Option<Fee>) -> f64 {
        match value {
            Some(Fee::Number(v)) if v != 0.0 && !v.is_nan() => v,
            Some(Fee::Text(v)) => v,
            _ => {
                self.missing.push(name);
                0.0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ApiError> {
        if self.missing.is_empty() {
            Ok(value)
        } else {
            tracing::debug!(missing = ?self.missing, "required fields absent");
            Err(ApiError::BadRequest(FIELDS_REQUIRED.to_string()))
        }
    }
}

impl AppointmentRequest {
    /// All eight fields must be present: strings non-empty, a numeric fee non-zero.
    pub fn validate(self) -> Result<NewAppointment, ApiError> {
        let mut p = Presence::default();
        let appointment = NewAppointment {
            patient_name: p.text("patientName", self.patient_name),
            appointment_no: p.text("appointmentNo", self.appointment_no),
            appointment_date: p.text("appointmentDate", self.appointment_date),
            phone: p.text("phone", self.phone),
            gender: p.text("gender", self.gender),
            doctor: p.text("doctor", self.doctor),
            priority: p.text("priority", self.priority),
            fee: p.fee("fee", self.fee),
        };
        p.finish(appointment)
    }
}

impl GeneralSettingsRequest {
    pub fn validate(self) -> Result<GeneralSettingsData, ApiError> {
        let mut p = Presence::default();
        let data = GeneralSettingsData {
            hospital_name: p.text("hospitalName", self.hospital_name),
            hospital_code: p.text("hospitalCode", self.hospital_code),
            address: p.text("address", self.address),
            phone: p.text("phone", self.phone),
            email: p.text("email", self.email),
            language: p.text("language", self.language),
            date_time: p.text("dateTime", self.date_time),
            time_zone: p.text("timeZone", self.time_zone),
        };
        p.finish(data)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts a string or a bare number (phone numbers, codes) as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|v| match v {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    }))
}

/// A fee as sent by the client. Numeric text such as `"0"` counts as present
/// even when its value is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fee {
    Number(f64),
    Text(f64),
}

/// Accepts a number or a numeric string. Text that is not a number counts as absent.
fn lenient_fee<'de, D>(deserializer: D) -> Result<Option<Fee>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.and_then(|v| match v {
            Scalar::Number(n) => n.as_f64().map(Fee::Number),
            Scalar::Text(s) => s.trim().parse::<f64>().ok().map(Fee::Text),
        }),
    )
}

/// Path IDs the store could never match are answered as not found.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
