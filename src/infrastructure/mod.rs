//! Infrastructure layer for state and external integrations.
//!
//! This layer implements interfaces defined by the domain layer and the
//! collaborators the redirect path depends on.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory registry and click ledger storage
//! - [`geo`] - Visitor address to location resolution
//! - [`logging`] - Best-effort application event logging

pub mod geo;
pub mod logging;
pub mod persistence;
