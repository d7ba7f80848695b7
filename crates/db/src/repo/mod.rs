pub mod appointments;
pub mod general_settings;

pub use appointments::AppointmentRepo;
pub use general_settings::GeneralSettingsRepo;
