//! Client-related request/response types
//!
//! Payloads the console sends to the business API and the small envelopes it
//! gets back from mutation endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{CustomerStatus, EmployeeStatus};

/// Passwords are sent as typed, so only whitespace-only input is refused
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("password is required".into());
        return Err(err);
    }
    Ok(())
}

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Login response
///
/// The service answers with a message and, depending on deployment, a token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// =============================================================================
// Mutation envelopes
// =============================================================================

/// `{ "message": ... }` returned by employee mutations and most faults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Creation payloads
// =============================================================================

/// Add employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
    /// New employees start active
    pub status: EmployeeStatus,
}

/// Add customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
    /// Sign-ups wait for approval
    pub status: CustomerStatus,
}
