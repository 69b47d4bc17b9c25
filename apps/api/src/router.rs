use std::sync::Arc;

use axum::Router;

use appointment_cell::router::booking_routes;
use doctor_cell::router::{disease_routes, doctor_routes};
use doctor_portal_cell::create_doctor_portal_router;
use landing_cell::landing_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .merge(landing_routes(state.clone()))
        .nest("/diseases", disease_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/booking", booking_routes(state.clone()))
        .nest("/doctor-dashboard", create_doctor_portal_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use shared_utils::test_utils::{read_json, TestConfig};

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(TestConfig::default().to_arc());
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        (status, read_json(response).await)
    }

    #[tokio::test]
    async fn test_every_view_is_routed() {
        let (status, json) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["brand"], "DocSmart");

        let (status, json) = get("/doctors/search?disease=fever").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["results"]["doctors"][0]["booking_target"], "/booking/1");

        let (status, json) = get("/booking/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["doctor"]["id"], 1);

        let (status, json) = get("/doctor-dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["availability_label"], "Available");

        let (status, json) = get("/diseases").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 6);
    }
}
