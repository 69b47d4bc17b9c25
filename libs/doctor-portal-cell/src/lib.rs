// =====================================================================================
// DOCTOR PORTAL CELL - DAILY DASHBOARD & ATTENDANCE TOGGLES
// =====================================================================================
//
// Serves the doctor's dashboard:
// - Static profile, daily stats and today's appointment list
// - Manual availability toggle
// - Face-detection attendance toggle with its info panel
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Appointment, AppointmentStatus, DoctorDashboardView, DoctorProfile, PortalToggles,
};
pub use router::create_doctor_portal_router;
pub use services::PortalService;
