// tests/integration/test_helpers.rs

//! Test helpers: in-memory host providers and a server bound on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tickstat::core::providers::{HostProvider, MaxPlayersProvider};
use tickstat::core::{RateSampler, StatusAggregator, StatusError};
use tickstat::server::StatusServer;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// A host whose live data is set by the test.
pub struct MockHost {
    pub players: parking_lot::Mutex<Vec<String>>,
    pub protocol: i64,
    pub world_time: AtomicI64,
    pub version: String,
    pub weather: AtomicI64,
    pub fail_players: AtomicBool,
    pub panic_players: AtomicBool,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            players: parking_lot::Mutex::new(vec!["Steve".to_string(), "Alex".to_string()]),
            protocol: 686,
            world_time: AtomicI64::new(6000),
            version: "1.21.0".to_string(),
            weather: AtomicI64::new(0),
            fail_players: AtomicBool::new(false),
            panic_players: AtomicBool::new(false),
        }
    }
}

impl HostProvider for MockHost {
    fn online_players(&self) -> Result<Vec<String>, StatusError> {
        if self.panic_players.load(Ordering::SeqCst) {
            panic!("player registry corrupted");
        }
        if self.fail_players.load(Ordering::SeqCst) {
            return Err(StatusError::Internal("player registry unavailable".into()));
        }
        Ok(self.players.lock().clone())
    }

    fn protocol_version(&self) -> Result<i64, StatusError> {
        Ok(self.protocol)
    }

    fn world_time(&self, _dimension: i32) -> Result<i64, StatusError> {
        Ok(self.world_time.load(Ordering::SeqCst))
    }

    fn server_version(&self) -> Result<String, StatusError> {
        Ok(self.version.clone())
    }

    fn weather_code(&self) -> Result<i64, StatusError> {
        Ok(self.weather.load(Ordering::SeqCst))
    }
}

/// A capacity source returning a fixed value, or failing like a missing file.
pub struct FixedMaxPlayers(pub Option<u32>);

impl MaxPlayersProvider for FixedMaxPlayers {
    fn max_players(&self) -> Result<u32, StatusError> {
        self.0
            .ok_or_else(|| StatusError::ConfigRead("server.properties not found".into()))
    }
}

/// A running status server plus handles to the state behind it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub host: Arc<MockHost>,
    pub sampler: Arc<RateSampler>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), StatusError>>,
}

impl TestServer {
    pub async fn start(sampler: Arc<RateSampler>, max_players: Option<u32>) -> Self {
        init_tracing();

        let host = Arc::new(MockHost::default());
        let aggregator = StatusAggregator::new(
            sampler.clone(),
            host.clone(),
            Arc::new(FixedMaxPlayers(max_players)),
            100,
        );
        let server = StatusServer::bind("127.0.0.1", 0, aggregator)
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr().expect("Failed to read local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(server.serve(async move {
            shutdown_rx.await.ok();
        }));

        Self {
            addr,
            host,
            sampler,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get_status(&self) -> reqwest::Response {
        reqwest::get(self.url("/"))
            .await
            .expect("Status request failed")
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.handle
            .await
            .expect("Server task panicked")
            .expect("Server returned an error");
    }
}

/// Set up minimal tracing for tests (ignore error if already initialized).
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("warn"))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
