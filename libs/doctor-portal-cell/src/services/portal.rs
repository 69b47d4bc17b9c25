// =====================================================================================
// PORTAL SERVICE
// =====================================================================================

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{
    Appointment, AppointmentEntry, AppointmentStatus, DashboardStat, DoctorDashboardView,
    DoctorProfile, PortalToggles, NO_APPOINTMENTS_MESSAGE,
};

pub struct PortalService {
    profile: DoctorProfile,
    stats: Vec<DashboardStat>,
    appointments: Vec<Appointment>,
    toggles: RwLock<PortalToggles>,
}

impl PortalService {
    pub fn new() -> Self {
        Self::with_appointments(standard_appointments())
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            profile: DoctorProfile {
                name: "Dr. Sarah Johnson".to_string(),
                specialty: "General Medicine".to_string(),
                license: "MD-12345".to_string(),
                experience: "15 years".to_string(),
            },
            stats: standard_stats(),
            appointments,
            toggles: RwLock::new(PortalToggles::default()),
        }
    }

    pub async fn toggles(&self) -> PortalToggles {
        *self.toggles.read().await
    }

    pub async fn toggle_availability(&self) -> PortalToggles {
        let mut toggles = self.toggles.write().await;
        toggles.toggle_availability();
        *toggles
    }

    pub async fn toggle_face_detection(&self) -> PortalToggles {
        let mut toggles = self.toggles.write().await;
        toggles.toggle_face_detection();
        *toggles
    }

    pub async fn dashboard(&self) -> DoctorDashboardView {
        let toggles = self.toggles().await;
        debug!("Rendering doctor dashboard with {:?}", toggles);

        DoctorDashboardView {
            profile: self.profile.clone(),
            availability_label: toggles.availability_label(),
            toggles,
            face_detection_panel: toggles.face_detection_panel(),
            stats: self.stats.clone(),
            appointments: self.appointments.iter().map(AppointmentEntry::from).collect(),
            empty_message: self.appointments.is_empty().then_some(NO_APPOINTMENTS_MESSAGE),
        }
    }
}

impl Default for PortalService {
    fn default() -> Self {
        Self::new()
    }
}

fn stat(label: &str, value: &str) -> DashboardStat {
    DashboardStat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn standard_stats() -> Vec<DashboardStat> {
    vec![
        stat("Today's Patients", "12"),
        stat("Completed", "8"),
        stat("Remaining", "4"),
        stat("Revenue", "$1,800"),
    ]
}

fn appointment(id: u32, patient: &str, time: &str, kind: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        patient: patient.to_string(),
        time: time.to_string(),
        appointment_type: kind.to_string(),
        status,
    }
}

pub fn standard_appointments() -> Vec<Appointment> {
    vec![
        appointment(1, "John Doe", "9:00 AM", "Consultation", AppointmentStatus::Completed),
        appointment(2, "Jane Smith", "10:30 AM", "Follow-up", AppointmentStatus::InProgress),
        appointment(3, "Mike Johnson", "2:00 PM", "Check-up", AppointmentStatus::Upcoming),
        appointment(4, "Sarah Williams", "3:30 PM", "Consultation", AppointmentStatus::Upcoming),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toggles_leave_appointments_untouched() {
        let service = PortalService::new();
        let before = service.dashboard().await;

        service.toggle_availability().await;
        service.toggle_face_detection().await;
        let after = service.dashboard().await;

        assert_eq!(before.appointments.len(), after.appointments.len());
        assert_eq!(before.stats, after.stats);
        assert_eq!(after.availability_label, "Unavailable");
        assert!(after.face_detection_panel.is_some());
    }

    #[tokio::test]
    async fn test_only_upcoming_can_start() {
        let view = PortalService::new().dashboard().await;
        let startable: Vec<u32> = view
            .appointments
            .iter()
            .filter(|a| a.can_start)
            .map(|a| a.appointment.id)
            .collect();
        assert_eq!(startable, vec![3, 4]);
        assert!(view.empty_message.is_none());
    }

    #[tokio::test]
    async fn test_empty_schedule_message() {
        let view = PortalService::with_appointments(Vec::new()).dashboard().await;
        assert_eq!(view.empty_message, Some("No appointments scheduled for today"));
    }
}
