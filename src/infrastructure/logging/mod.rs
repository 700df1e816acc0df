//! Application event logging.
//!
//! Provides an [`EventLogger`] trait with two implementations:
//! - [`TracingLogger`] - writes to the local `tracing` subscriber
//! - [`RemoteLogger`] - posts entries to an HTTP collector and mirrors them locally

mod remote_logger;
mod service;
mod tracing_logger;

pub use remote_logger::RemoteLogger;
pub use service::{EventLogger, LogComponent, LogEntry, LogLevel};
pub use tracing_logger::TracingLogger;
