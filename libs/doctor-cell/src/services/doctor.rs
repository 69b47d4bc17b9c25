use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::{Disease, Doctor, DoctorCard, DoctorError};
use crate::services::catalog::{mock_booking_doctor, Catalog};

pub struct DoctorService {
    catalog: Catalog,
    default_doctor_id: u32,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_catalog(Catalog::standard(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: &AppConfig) -> Self {
        Self {
            catalog,
            default_doctor_id: config.default_doctor_id,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.catalog.diseases
    }

    /// Get doctor by catalog id
    pub fn get_doctor(&self, doctor_id: &str) -> Result<&Doctor, DoctorError> {
        debug!("Fetching doctor: {}", doctor_id);

        doctor_id
            .parse::<u32>()
            .ok()
            .and_then(|id| self.catalog.doctor(id))
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))
    }

    pub fn get_doctor_card(&self, doctor_id: &str) -> Result<DoctorCard, DoctorError> {
        self.get_doctor(doctor_id).map(DoctorCard::from_doctor)
    }

    /// Resolves a booking target. Never fails: unknown ids degrade to the default doctor.
    pub fn resolve_booking_doctor(&self, doctor_id: &str) -> Doctor {
        if let Ok(doctor) = self.get_doctor(doctor_id) {
            return doctor.clone();
        }

        warn!(
            "Unknown booking doctor id {:?}, falling back to doctor {}",
            doctor_id, self.default_doctor_id
        );

        self.catalog
            .doctor(self.default_doctor_id)
            .cloned()
            .unwrap_or_else(mock_booking_doctor)
    }
}
