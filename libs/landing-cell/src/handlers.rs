use axum::Json;
use tracing::debug;

use crate::models::LandingPage;

pub async fn get_landing_page() -> Json<LandingPage> {
    debug!("Serving landing page");
    Json(LandingPage::standard())
}
