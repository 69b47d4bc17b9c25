use std::sync::Arc;

use axum::{body::Body, http::Response};
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub host: String,
    pub port: u16,
    pub default_doctor_id: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            default_doctor_id: 1,
        }
    }
}

impl TestConfig {
    pub fn with_default_doctor(default_doctor_id: u32) -> Self {
        Self {
            default_doctor_id,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: self.host.clone(),
            port: self.port,
            default_doctor_id: self.default_doctor_id,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Collects a router response body and parses it as JSON.
pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&body).expect("response body should be JSON")
}
