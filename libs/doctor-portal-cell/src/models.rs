// =====================================================================================
// DOCTOR PORTAL MODELS
// =====================================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

pub const NO_APPOINTMENTS_MESSAGE: &str = "No appointments scheduled for today";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
    pub specialty: String,
    pub license: String,
    pub experience: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl AppointmentStatus {
    /// Display text, e.g. "in progress".
    pub fn label(&self) -> String {
        self.to_string().replace('-', " ")
    }

    pub fn can_start(&self) -> bool {
        matches!(self, AppointmentStatus::Upcoming)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::InProgress => write!(f, "in-progress"),
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentEntry {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub status_label: String,
    pub can_start: bool,
}

impl From<&Appointment> for AppointmentEntry {
    fn from(appointment: &Appointment) -> Self {
        Self {
            appointment: appointment.clone(),
            status_label: appointment.status.label(),
            can_start: appointment.status.can_start(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
}

/// The two dashboard switches. They never affect each other or the appointment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalToggles {
    pub is_available: bool,
    pub face_detection: bool,
}

impl Default for PortalToggles {
    fn default() -> Self {
        Self {
            is_available: true,
            face_detection: false,
        }
    }
}

impl PortalToggles {
    pub fn toggle_availability(&mut self) -> bool {
        self.is_available = !self.is_available;
        info!("Doctor availability changed to: {}", self.is_available);
        self.is_available
    }

    pub fn toggle_face_detection(&mut self) -> bool {
        self.face_detection = !self.face_detection;
        info!(
            "Face detection {}",
            if self.face_detection { "enabled" } else { "disabled" }
        );
        self.face_detection
    }

    pub fn availability_label(&self) -> &'static str {
        if self.is_available { "Available" } else { "Unavailable" }
    }

    pub fn face_detection_panel(&self) -> Option<FaceDetectionPanel> {
        self.face_detection.then(FaceDetectionPanel::default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceDetectionPanel {
    pub title: &'static str,
    pub description: &'static str,
}

impl Default for FaceDetectionPanel {
    fn default() -> Self {
        Self {
            title: "Face detection active",
            description: "System will automatically track your entry and exit",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDashboardView {
    pub profile: DoctorProfile,
    pub availability_label: &'static str,
    pub toggles: PortalToggles,
    pub face_detection_panel: Option<FaceDetectionPanel>,
    pub stats: Vec<DashboardStat>,
    pub appointments: Vec<AppointmentEntry>,
    pub empty_message: Option<&'static str>,
}
