#![allow(dead_code)]

use axum::extract::Request;
use axum::extract::connect_info::MockConnectInfo;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use shortcode_ledger::config::Config;
use shortcode_ledger::domain::entities::UrlRecord;
use shortcode_ledger::domain::repositories::UrlRecordRepository;
use shortcode_ledger::infrastructure::geo::FixedIpLocator;
use shortcode_ledger::infrastructure::logging::{
    EventLogger, LogComponent, LogLevel, TracingLogger,
};
use shortcode_ledger::infrastructure::persistence::MemoryStore;
use shortcode_ledger::routes::{app_router, router};
use shortcode_ledger::state::AppState;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;

pub const TEST_BASE_URL: &str = "http://short.test";
pub const TEST_LOCATION: &str = "Springfield, Oregon, United States";
pub const TEST_PEER: &str = "203.0.113.10:40000";

pub fn test_config() -> Config {
    Config {
        base_url: TEST_BASE_URL.to_string(),
        geo_lookup_enabled: false,
        ..Config::default()
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with(test_config())
}

pub fn create_test_state_with(config: Config) -> AppState {
    AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(FixedIpLocator::new(TEST_LOCATION)),
        Arc::new(TracingLogger::new()),
        &config,
    )
}

/// Event logger that keeps every entry for inspection.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(LogLevel, LogComponent, String)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(LogLevel, LogComponent, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _, _)| *l == level)
            .map(|(_, _, message)| message)
            .collect()
    }
}

impl EventLogger for RecordingLogger {
    fn log(&self, level: LogLevel, component: LogComponent, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, component, message.to_string()));
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub fn create_test_state_recording() -> (AppState, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(FixedIpLocator::new(TEST_LOCATION)),
        logger.clone(),
        &test_config(),
    );
    (state, logger)
}

/// Full router with every request arriving from [`TEST_PEER`].
pub fn test_app(state: AppState) -> Router {
    test_app_with_peer(state, TEST_PEER)
}

pub fn test_app_with_peer(state: AppState, peer: &str) -> Router {
    let addr: SocketAddr = peer.parse().unwrap();
    router(state).layer(MockConnectInfo(addr))
}

/// Server for the production service stack, path normalization included.
pub fn test_server_normalized(state: AppState) -> TestServer {
    let addr: SocketAddr = TEST_PEER.parse().unwrap();
    let app = MockConnectInfo(addr).layer(app_router(state));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_test_record(state: &AppState, code: &str, url: &str) {
    let record = UrlRecord::new(code.to_string(), url.to_string(), Utc::now(), 30);
    state.store.insert(record).await.unwrap();
}

/// Inserts a record whose one hour validity ended an hour ago.
pub async fn create_expired_record(state: &AppState, code: &str, url: &str) {
    let record = UrlRecord::new(
        code.to_string(),
        url.to_string(),
        Utc::now() - Duration::hours(2),
        60,
    );
    state.store.insert(record).await.unwrap();
}
