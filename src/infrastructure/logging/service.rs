//! Event logger trait and the shape of a log entry.

use serde::Serialize;
use std::fmt;

/// Severity of a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

/// Part of the service an event comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogComponent {
    Controller,
    Handler,
    Service,
    Repository,
    Config,
    Middleware,
}

impl LogComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogComponent::Controller => "controller",
            LogComponent::Handler => "handler",
            LogComponent::Service => "service",
            LogComponent::Repository => "repository",
            LogComponent::Config => "config",
            LogComponent::Middleware => "middleware",
        }
    }
}

impl fmt::Display for LogComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event as sent to an external sink.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub stack: &'static str,
    pub level: LogLevel,
    pub package: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            stack: "backend",
            level,
            package: component,
            message: message.into(),
        }
    }
}

/// Best-effort application event log.
///
/// `log` is synchronous, must not block on I/O and must never fail or panic:
/// logging problems are the logger's own business, never the caller's.
///
/// # Implementations
///
/// - [`crate::infrastructure::logging::TracingLogger`] - local structured log
/// - [`crate::infrastructure::logging::RemoteLogger`] - HTTP sink, mirrored locally
pub trait EventLogger: Send + Sync {
    fn log(&self, level: LogLevel, component: LogComponent, message: &str);

    /// Short name used in health output.
    fn name(&self) -> &'static str;
}
