use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use serde_json::{json, Value};

use appointment_cell::models::{BookingConfirmation, BookingError, BookingRequest};
use appointment_cell::router::{booking_routes, booking_routes_with_gateway};
use appointment_cell::services::BookingGateway;
use shared_utils::test_utils::{read_json, TestConfig};

#[derive(Default)]
struct CountingGateway {
    calls: AtomicUsize,
}

#[async_trait]
impl BookingGateway for CountingGateway {
    async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BookingConfirmation::for_request(&request))
    }
}

struct FailingGateway;

#[async_trait]
impl BookingGateway for FailingGateway {
    async fn submit_booking(&self, _request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        Err(BookingError::Gateway("upstream unavailable".to_string()))
    }
}

fn create_test_app() -> Router {
    booking_routes(TestConfig::default().to_arc())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn test_booking_page_defaults() {
    let (status, json) = get(create_test_app(), "/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["doctor"]["name"], "Dr. Sarah Johnson");
    assert_eq!(json["duration"], 15);
    assert_eq!(json["fee"], 150);
    assert_eq!(json["can_book"], false);
    assert!(json["summary"].is_null());
    assert_eq!(json["time_slots"].as_array().unwrap().len(), 16);
    assert_eq!(json["durations"][0]["label"], "10 minutes - $101");
    assert_eq!(json["durations"][0]["fee"], 100);
    assert_eq!(json["back_target"], "/patient-dashboard");
}

#[tokio::test]
async fn test_booking_page_with_selection() {
    let (status, json) = get(create_test_app(), "/2?slot=9:30%20AM&duration=30").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["doctor"]["name"], "Dr. Michael Chen");
    assert_eq!(json["fee"], 400);
    assert_eq!(json["book_label"], "Book Appointment - $400");
    assert_eq!(json["summary"]["time"], "9:30 AM");
    assert_eq!(json["summary"]["date_label"], "Today");
    assert_eq!(json["can_book"], true);
}

#[tokio::test]
async fn test_booking_page_unknown_doctor_falls_back() {
    let app = booking_routes(TestConfig::with_default_doctor(4).to_arc());
    let (status, json) = get(app, "/does-not-exist").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["doctor"]["name"], "Dr. James Wilson");
}

#[tokio::test]
async fn test_booking_page_rejects_unknown_duration() {
    let (status, json) = get(create_test_app(), "/1?duration=20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Unsupported consultation duration: 20");
}

#[tokio::test]
async fn test_book_without_slot_is_rejected() {
    let gateway = Arc::new(CountingGateway::default());
    let app = booking_routes_with_gateway(TestConfig::default().to_arc(), gateway.clone());

    let (status, json) = post(app, "/1", json!({ "duration": 15 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please select a time slot");
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_book_appointment_confirms_and_redirects() {
    let gateway = Arc::new(CountingGateway::default());
    let app = booking_routes_with_gateway(TestConfig::default().to_arc(), gateway.clone());

    let (status, json) = post(
        app,
        "/1",
        json!({
            "slot": "2:30 PM",
            "duration": 10,
            "symptoms": "Mild fever since yesterday",
            "auth": { "mode": "login", "email": "john@example.com", "password": "x" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Appointment booked successfully!");
    assert_eq!(json["slot"], "2:30 PM");
    assert_eq!(json["duration"], 10);
    assert_eq!(json["fee"], 100);
    assert_eq!(json["redirect"], "/patient-dashboard");
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_book_appointment_surfaces_gateway_failure() {
    let app = booking_routes_with_gateway(TestConfig::default().to_arc(), Arc::new(FailingGateway));

    let (status, json) = post(app, "/1", json!({ "slot": "9:00 AM" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Booking could not be completed: upstream unavailable");
}
