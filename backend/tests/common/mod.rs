//! Common test utilities for integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use health_predictor_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with the stock configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// Questionnaire JSON as a browser form would submit it
pub fn low_risk_json() -> String {
    serde_json::json!({
        "age": 35,
        "gender": "male",
        "height": 175.0,
        "weight": 75.0,
        "bloodPressureSys": 115.0,
        "bloodPressureDia": 75.0,
        "cholesterol": 180.0,
        "bloodSugar": 85.0,
        "activityLevel": 1.55,
        "exerciseFreq": 5,
        "dietQuality": 4,
        "sleep": 7.5,
        "waterIntake": 8,
        "stressLevel": 1,
        "smoking": 0,
        "alcohol": 0,
        "healthGoal": "maintain"
    })
    .to_string()
}
