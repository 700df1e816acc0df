//! Data Transfer Objects for API requests and responses.
//!
//! Wire field names are camelCase. Requests use Serde for deserialization
//! and validator for input validation.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
