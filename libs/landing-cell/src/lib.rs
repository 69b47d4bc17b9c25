pub mod handlers;
pub mod models;
pub mod router;

pub use models::LandingPage;
pub use router::landing_routes;
