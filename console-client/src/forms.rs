//! Form models
//!
//! A form is a fixed list of text fields plus the payload they produce.
//! `FormView` wraps one with the submit lifecycle: validate, send once,
//! report the outcome, and reset on success.

use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use shared::client::{LoginRequest, NewCustomer, NewEmployee};
use shared::models::{CustomerStatus, EmployeeStatus};

use crate::ClientError;

const TRANSPORT_FAILURE: &str = "Something went wrong! Please try again.";

/// Why a form did not submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("A submission is already in progress")]
    Busy,
}

impl FormError {
    fn from_validation(errors: &ValidationErrors, labels: &[(&'static str, &'static str)]) -> Self {
        let fields = errors.field_errors();
        let missing = labels
            .iter()
            .filter(|(key, _)| fields.contains_key(*key))
            .map(|(_, label)| *label)
            .collect();
        FormError::MissingFields(missing)
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// A set of text inputs producing one request payload
pub trait Form: Default + Send {
    type Payload: Validate + Serialize + Send + Sync;

    /// `(payload field, label)` in display order
    const FIELDS: &'static [(&'static str, &'static str)];

    fn field(&self, index: usize) -> &str;

    fn field_mut(&mut self, index: usize) -> Option<&mut String>;

    /// Whether the field should be masked on screen
    fn is_secret(index: usize) -> bool {
        Self::FIELDS
            .get(index)
            .is_some_and(|(key, _)| *key == "password")
    }

    /// Payload with surrounding whitespace removed from every field
    fn payload(&self) -> Self::Payload;

    fn success_message() -> &'static str;

    /// Inline message for a rejected submission
    fn failure_message(error: &ClientError) -> String;
}

// =============================================================================
// Add employee
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

impl Form for EmployeeForm {
    type Payload = NewEmployee;

    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("first_name", "First Name"),
        ("last_name", "Last Name"),
        ("email", "Email"),
        ("role", "Role"),
        ("password", "Password"),
    ];

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.first_name,
            1 => &self.last_name,
            2 => &self.email,
            3 => &self.role,
            4 => &self.password,
            _ => "",
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.role),
            4 => Some(&mut self.password),
            _ => None,
        }
    }

    fn payload(&self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            password: self.password.clone(),
            status: EmployeeStatus::Active,
        }
    }

    fn success_message() -> &'static str {
        "Employee added successfully!"
    }

    fn failure_message(_error: &ClientError) -> String {
        "Failed to add employee. Please try again.".to_string()
    }
}

// =============================================================================
// Add customer
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Form for CustomerForm {
    type Payload = NewCustomer;

    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("first_name", "First Name"),
        ("last_name", "Last Name"),
        ("email", "Email"),
        ("phone", "Phone"),
        ("password", "Password"),
    ];

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.first_name,
            1 => &self.last_name,
            2 => &self.email,
            3 => &self.phone,
            4 => &self.password,
            _ => "",
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.phone),
            4 => Some(&mut self.password),
            _ => None,
        }
    }

    fn payload(&self) -> NewCustomer {
        NewCustomer {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            status: CustomerStatus::Pending,
        }
    }

    fn success_message() -> &'static str {
        "Customer added successfully!"
    }

    fn failure_message(_error: &ClientError) -> String {
        "Failed to add customer. Please try again.".to_string()
    }
}

// =============================================================================
// Login
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    type Payload = LoginRequest;

    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("email", "Email"), ("password", "Password")];

    fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.email,
            1 => &self.password,
            _ => "",
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }

    fn payload(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    fn success_message() -> &'static str {
        "You have logged in successfully!"
    }

    /// The service's own message when it sent one
    fn failure_message(error: &ClientError) -> String {
        match error {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http(_) | ClientError::Cancelled => TRANSPORT_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// Submit lifecycle
// =============================================================================

/// A form plus its submission state
#[derive(Debug, Clone, Default)]
pub struct FormView<F: Form> {
    pub form: F,
    status: FormStatus,
    focus: usize,
}

impl<F: Form> FormView<F> {
    pub fn new() -> Self {
        Self {
            form: F::default(),
            status: FormStatus::Idle,
            focus: 0,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % F::FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + F::FIELDS.len() - 1) % F::FIELDS.len();
    }

    pub fn focused_mut(&mut self) -> Option<&mut String> {
        self.form.field_mut(self.focus)
    }

    /// Validate and enter the submitting state.
    ///
    /// Returns the payload to send, or the reason nothing should be sent.
    /// A validation failure is also shown as the form's inline message.
    pub fn prepare(&mut self) -> Result<F::Payload, FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        let payload = self.form.payload();
        if let Err(errors) = payload.validate() {
            let error = FormError::from_validation(&errors, F::FIELDS);
            self.status = FormStatus::Failed(error.to_string());
            return Err(error);
        }
        self.status = FormStatus::Submitting;
        Ok(payload)
    }

    /// Record the submission outcome.
    ///
    /// Success clears every field. A failure keeps the input so the operator
    /// can correct and resend it.
    pub fn finish<T>(&mut self, result: &Result<T, ClientError>) {
        match result {
            Ok(_) => {
                tracing::info!("form submitted");
                self.form = F::default();
                self.focus = 0;
                self.status = FormStatus::Succeeded(F::success_message().to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "form submission failed");
                self.status = FormStatus::Failed(F::failure_message(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_block_submission() {
        let mut view = FormView::<EmployeeForm>::new();
        view.form.first_name = "Grace".into();
        view.form.email = "   ".into();

        let err = view.prepare().unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(vec!["Last Name", "Email", "Role", "Password"])
        );
        assert!(matches!(view.status(), FormStatus::Failed(msg) if msg.contains("Email")));
        assert_eq!(view.form.first_name, "Grace");
    }

    #[test]
    fn test_payload_is_trimmed_with_default_status() {
        let mut view = FormView::<CustomerForm>::new();
        for i in 0..CustomerForm::FIELDS.len() {
            *view.form.field_mut(i).unwrap() = format!("  value{i} ");
        }
        let payload = view.prepare().unwrap();
        assert_eq!(payload.first_name, "value0");
        assert_eq!(payload.status, CustomerStatus::Pending);
        assert!(view.is_submitting());
        assert_eq!(view.prepare().unwrap_err(), FormError::Busy);
    }

    #[test]
    fn test_password_is_sent_as_typed() {
        let mut view = FormView::<LoginForm>::new();
        view.form.email = " a@b.c ".into();
        view.form.password = " secret ".into();
        let payload = view.prepare().unwrap();
        assert_eq!(payload.email, "a@b.c");
        assert_eq!(payload.password, " secret ");

        let mut blank = FormView::<LoginForm>::new();
        blank.form.email = "a@b.c".into();
        blank.form.password = "  ".into();
        assert_eq!(
            blank.prepare().unwrap_err(),
            FormError::MissingFields(vec!["Password"])
        );
    }

    #[test]
    fn test_success_resets_and_failure_keeps_input() {
        let mut view = FormView::<LoginForm>::new();
        view.form.email = "a@b.c".into();
        view.form.password = "pw".into();
        view.prepare().unwrap();
        view.finish::<()>(&Err(ClientError::Api {
            status: 401,
            message: "Invalid credentials".into(),
        }));
        assert_eq!(view.status(), &FormStatus::Failed("Invalid credentials".into()));
        assert_eq!(view.form.email, "a@b.c");

        view.prepare().unwrap();
        view.finish(&Ok(()));
        assert_eq!(
            view.status(),
            &FormStatus::Succeeded("You have logged in successfully!".into())
        );
        assert!(view.form.email.is_empty());
    }

    #[test]
    fn test_focus_wraps_and_secret_fields() {
        let mut view = FormView::<LoginForm>::new();
        view.focus_prev();
        assert_eq!(view.focus(), 1);
        assert!(LoginForm::is_secret(1));
        assert!(!LoginForm::is_secret(0));
        view.focus_next();
        assert_eq!(view.focus(), 0);
    }
}
