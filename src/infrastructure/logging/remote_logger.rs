//! Event logger that ships entries to an HTTP log collector.

use std::time::Duration;

use reqwest::StatusCode;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::service::{EventLogger, LogComponent, LogEntry, LogLevel};
use super::tracing_logger::TracingLogger;

/// Upper bound for one delivery attempt.
const SINK_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts each event as JSON to a collector, fire-and-forget.
///
/// Every event is also written locally through [`TracingLogger`]. Delivery
/// runs on a spawned task, so `log` returns immediately; when no tokio
/// runtime is available the remote copy is dropped. Delivery failures are
/// reported through `tracing` only, and `401 Unauthorized` (expired sink
/// credentials) is ignored.
#[derive(Debug, Clone)]
pub struct RemoteLogger {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    local: TracingLogger,
}

impl RemoteLogger {
    /// Creates a logger posting to `endpoint`, with an optional bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(SINK_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.filter(|t| !t.is_empty()),
            local: TracingLogger::new(),
        })
    }

    async fn deliver(
        client: reqwest::Client,
        endpoint: String,
        token: Option<String>,
        entry: LogEntry,
    ) {
        let mut request = client.post(&endpoint).json(&entry);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {}
            Ok(response) if !response.status().is_success() => {
                warn!(status = %response.status(), "Log sink rejected entry");
            }
            Ok(_) => debug!("Log entry delivered"),
            Err(e) => warn!("Log sink unreachable: {}", e),
        }
    }
}

impl EventLogger for RemoteLogger {
    fn log(&self, level: LogLevel, component: LogComponent, message: &str) {
        self.local.log(level, component, message);

        let Ok(handle) = Handle::try_current() else {
            return;
        };

        let entry = LogEntry::new(level, component, message);
        handle.spawn(Self::deliver(
            self.client.clone(),
            self.endpoint.clone(),
            self.token.clone(),
            entry,
        ));
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
