use hms_core::error::{ErrorResponse, MessageResponse, UnhandledBody, UnhandledEnvelope};
use hms_core::types::{Appointment, Created, GeneralSettings};
use utoipa::OpenApi;

use crate::routes::HealthResponse;
use crate::validation::{AppointmentRequest, GeneralSettingsRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Management API",
        version = "1.0.0",
        description = "API for managing appointments and general settings"
    ),
    servers((url = "http://localhost:5000")),
    paths(
        crate::appointments::add_appointment,
        crate::appointments::get_appointments,
        crate::appointments::get_appointment_by_id,
        crate::settings::get_general_settings,
        crate::settings::save_general_settings,
        crate::settings::update_general_settings,
        crate::routes::health,
    ),
    components(schemas(
        Appointment,
        AppointmentRequest,
        GeneralSettings,
        GeneralSettingsRequest,
        Created,
        ErrorResponse,
        MessageResponse,
        UnhandledEnvelope,
        UnhandledBody,
        HealthResponse,
    )),
    tags(
        (name = "appointments", description = "Patient appointments"),
        (name = "settings", description = "Hospital general settings"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/appointments",
            "/appointments/{id}",
            "/settings/general",
            "/settings/general/{id}",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        assert_eq!(doc.info.title, "Hospital Management API");

        let servers = doc.servers.expect("servers declared");
        assert_eq!(servers[0].url, "http://localhost:5000");
    }
}
