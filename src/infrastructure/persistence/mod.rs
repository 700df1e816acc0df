//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryStore`] - in-process registry and click ledger storage,
//!   implementing both [`crate::domain::repositories::UrlRecordRepository`]
//!   and [`crate::domain::repositories::ClickRepository`]

pub mod memory_store;

pub use memory_store::MemoryStore;
