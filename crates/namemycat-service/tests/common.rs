//! Common test utilities for namemycat integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use axum_test::{TestResponse, TestServer};

use namemycat_core::Name;
use namemycat_service::flash::FLASH_COOKIE;
use namemycat_service::{create_router, AppState, ServiceConfig};
use namemycat_store::{MemoryStore, NameSession, NameStore, StoreError, StoreResult};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The backing store, for inspecting rows directly.
    pub store: MemoryStore,
}

impl TestHarness {
    /// Create a harness over an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Create a harness over a store seeded with `names`.
    pub fn with_names(names: &[&str]) -> Self {
        Self::with_store(MemoryStore::with_names(names.iter().copied()))
    }

    fn with_store(store: MemoryStore) -> Self {
        let server = server_for(Arc::new(store.clone()));
        Self { server, store }
    }

    /// Submit `name` through the form and follow the redirect, carrying the
    /// flash cookie like a browser would.
    pub async fn submit_and_follow(&self, name: &str) -> TestResponse {
        follow_submission(&self.server, name).await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a test server over an arbitrary store.
pub fn server_for(store: Arc<dyn NameStore>) -> TestServer {
    server_for_config(store, ServiceConfig::default())
}

/// Build a test server with custom settings. The listen address and secret
/// are always overridden for tests.
pub fn server_for_config(store: Arc<dyn NameStore>, config: ServiceConfig) -> TestServer {
    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        secret_key: "test-secret".into(),
        ..config
    };

    let state = AppState::new(store, config);
    let router: Router = create_router(state);

    TestServer::new(router).expect("Failed to create test server")
}

/// POST a name, check the redirect, then GET `/` with the flash cookie.
pub async fn follow_submission(server: &TestServer, name: &str) -> TestResponse {
    let response = server.post("/").form(&[("name", name)]).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let flash = response.cookie(FLASH_COOKIE);
    server.get("/").add_cookie(flash).await
}

/// A store whose database is unreachable.
pub struct UnreachableStore;

impl NameStore for UnreachableStore {
    fn session(&self) -> Box<dyn NameSession> {
        Box::new(UnreachableSession)
    }
}

struct UnreachableSession;

#[async_trait]
impl NameSession for UnreachableSession {
    async fn init_schema(&mut self) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn random_name(&mut self) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn insert_name(&mut self, _value: &str) -> StoreResult<Name> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn find_by_value(&mut self, _value: &str) -> StoreResult<Vec<Name>> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn close(&mut self) -> StoreResult<()> {
        Ok(())
    }
}
