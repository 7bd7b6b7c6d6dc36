//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use sharescope_api::{AppState, build_app};
use sharescope_core::config::{AppConfig, DatabaseConfig};
use sharescope_database::seed::{demo_snapshot, seed};
use sharescope_database::{DatabasePool, SqlAccessStore};
use sharescope_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct writes
    pub db: DatabasePool,
}

impl TestApp {
    /// Create a test application over a migrated, seeded in-memory database
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        seed(db.pool(), &demo_snapshot())
            .await
            .expect("Failed to seed demo data");

        let store = Arc::new(SqlAccessStore::new(db.pool().clone()));
        let router = build_app(AppState::new(config, store));

        Self { router, db }
    }

    /// Make a GET request to the test app
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` of every element in an array body
    pub fn ids(&self) -> Vec<i64> {
        self.field_values("id")
    }

    /// One integer field from every element in an array body
    pub fn field_values(&self, field: &str) -> Vec<i64> {
        self.body
            .as_array()
            .expect("Expected an array body")
            .iter()
            .map(|item| item[field].as_i64().expect("Expected an integer field"))
            .collect()
    }
}
