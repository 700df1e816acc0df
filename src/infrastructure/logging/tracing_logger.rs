//! Event logger that writes to the local `tracing` subscriber.

use tracing::{debug, error, info, warn};

use super::service::{EventLogger, LogComponent, LogLevel};

/// Forwards events to `tracing` with the component as a structured field.
///
/// `fatal` has no `tracing` counterpart and is emitted at error level with
/// `fatal = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl EventLogger for TracingLogger {
    fn log(&self, level: LogLevel, component: LogComponent, message: &str) {
        let component = component.as_str();
        match level {
            LogLevel::Debug => debug!(component, "{}", message),
            LogLevel::Info => info!(component, "{}", message),
            LogLevel::Warn => warn!(component, "{}", message),
            LogLevel::Error => error!(component, "{}", message),
            LogLevel::Fatal => error!(component, fatal = true, "{}", message),
        }
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
