use std::fmt;

use serde::{Deserialize, Serialize};

/// Client-side navigation targets. Serialized as their route path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum View {
    Landing,
    PatientDashboard,
    /// The doctor id is carried verbatim; resolving it is the booking page's job.
    Booking { doctor_id: String },
    DoctorDashboard,
}

impl View {
    pub fn booking(doctor_id: impl ToString) -> Self {
        View::Booking { doctor_id: doctor_id.to_string() }
    }

    pub fn path(&self) -> String {
        match self {
            View::Landing => "/".to_string(),
            View::PatientDashboard => "/patient-dashboard".to_string(),
            View::Booking { doctor_id } => format!("/booking/{}", doctor_id),
            View::DoctorDashboard => "/doctor-dashboard".to_string(),
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(View::Landing),
            "/patient-dashboard" => Some(View::PatientDashboard),
            "/doctor-dashboard" => Some(View::DoctorDashboard),
            _ => path
                .strip_prefix("/booking/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(View::booking),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl From<View> for String {
    fn from(view: View) -> Self {
        view.path()
    }
}

impl TryFrom<String> for View {
    type Error = String;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        View::from_path(&path).ok_or_else(|| format!("Unknown view path: {}", path))
    }
}
