use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;
use shared_models::navigation::View;

pub const NO_DOCTORS_FOUND_TITLE: &str = "No doctors found";
pub const NO_DOCTORS_FOUND_HINT: &str =
    "Try adjusting your search criteria or selecting a different condition.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub specialists: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub experience: String,
    pub location: String,
    pub fees: u32,
    pub is_available: bool,
    pub next_slot: String,
    pub image: String,
    /// Disease ids this doctor treats.
    pub diseases: BTreeSet<String>,
}

impl Doctor {
    pub fn treats(&self, disease_id: &str) -> bool {
        self.diseases.contains(disease_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Earliest available, compared as raw `next_slot` text.
    #[default]
    Time,
    Fees,
    Rating,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Time => "Earliest Available",
            SortKey::Fees => "Lowest Fees",
            SortKey::Rating => "Highest Rated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Time => write!(f, "time"),
            SortKey::Fees => write!(f, "fees"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortKey {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(SortKey::Time),
            "fees" => Ok(SortKey::Fees),
            "rating" => Ok(SortKey::Rating),
            other => Err(DoctorError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Inputs of one patient dashboard derivation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorQuery {
    pub disease: Option<String>,
    pub search: String,
    pub sort: SortKey,
}

impl DoctorQuery {
    pub fn new(disease: Option<String>, search: impl Into<String>, sort: SortKey) -> Self {
        Self {
            // An empty id means "no disease selected"
            disease: disease.filter(|id| !id.is_empty()),
            search: search.into(),
            sort,
        }
    }
}

/// Selectable condition tile.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseTile {
    #[serde(flatten)]
    pub disease: Disease,
    pub is_selected: bool,
}

/// A doctor as rendered in search results, with its single book action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorCard {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub availability_label: &'static str,
    pub action_label: &'static str,
    pub action_enabled: bool,
    pub booking_target: Option<View>,
}

impl DoctorCard {
    pub fn from_doctor(doctor: &Doctor) -> Self {
        let (availability_label, action_label) = if doctor.is_available {
            ("Available", "Book Appointment")
        } else {
            ("Busy", "Join Waitlist")
        };

        Self {
            doctor: doctor.clone(),
            availability_label,
            action_label,
            action_enabled: doctor.is_available,
            booking_target: doctor.is_available.then(|| View::booking(doctor.id)),
        }
    }

    /// Fires the book action. Disabled cards go nowhere.
    pub fn book(&self) -> Option<View> {
        self.booking_target.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "doctors", rename_all = "snake_case")]
pub enum DoctorSearchOutcome {
    Matches(Vec<DoctorCard>),
    NoDoctorsFound,
}

impl DoctorSearchOutcome {
    pub fn len(&self) -> usize {
        match self {
            DoctorSearchOutcome::Matches(cards) => cards.len(),
            DoctorSearchOutcome::NoDoctorsFound => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cards(&self) -> &[DoctorCard] {
        match self {
            DoctorSearchOutcome::Matches(cards) => cards,
            DoctorSearchOutcome::NoDoctorsFound => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: NO_DOCTORS_FOUND_TITLE,
            hint: NO_DOCTORS_FOUND_HINT,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOption {
    pub key: SortKey,
    pub label: &'static str,
}

/// Everything the patient dashboard renders for one set of inputs.
#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboardView {
    pub selected_disease: Option<String>,
    pub banner: Option<String>,
    pub tiles: Vec<DiseaseTile>,
    pub search: String,
    pub sort: SortKey,
    pub sort_options: Vec<SortOption>,
    pub summary: String,
    pub results: DoctorSearchOutcome,
    pub empty_state: Option<EmptyState>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound("Doctor not found".to_string()),
            DoctorError::InvalidSortKey(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
