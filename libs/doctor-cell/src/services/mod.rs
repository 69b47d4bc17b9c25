pub mod catalog;
pub mod dashboard;
pub mod doctor;
pub mod matching;
pub mod selection;

pub use catalog::Catalog;
pub use dashboard::PatientDashboard;
pub use doctor::DoctorService;
pub use selection::DiseaseSelection;
