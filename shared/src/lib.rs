//! Shared types for the admin console
//!
//! Wire models returned by the business API, request/response DTOs and the
//! record traits the console's list stores are generic over.

pub mod client;
pub mod models;
pub mod record;

// Re-exports
pub use record::{Record, Searchable, StatusRecord};
pub use serde::{Deserialize, Serialize};
