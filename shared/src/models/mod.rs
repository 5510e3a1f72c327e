//! Data models
//!
//! Shapes returned by the business API. Identifiers are the service's opaque
//! `_id` strings; every optional field tolerates being absent on the wire.

pub mod admin;
pub mod booking;
pub mod catalog;
pub mod customer;
pub mod employee;
pub mod report;

mod de;

// Re-exports
pub use admin::*;
pub use booking::*;
pub use catalog::*;
pub use customer::*;
pub use employee::*;
pub use report::*;
