//! In-memory stand-in for the business API
//!
//! Serves every endpoint the console calls from seeded data held in memory.
//! Tests drive it through `OneshotHttpClient`; the console's demo mode does
//! the same. Individual paths can be made to fail on demand.

pub mod api;
pub mod error;
pub mod seed;
pub mod state;

pub use api::router;
pub use error::MockError;
pub use state::{MockData, MockState};
