//! Common test utilities and fixtures for integration tests.
//!
//! Each test gets its own in-memory SQLite database, so tests are fully
//! isolated and need no external services.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use palavra_backend::db::Database;
use palavra_backend::{router, AppState};

/// Test context containing database connection and test router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context backed by an in-memory database.
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
