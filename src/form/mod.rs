//! Form schemas and the validated-submit flow
//!
//! Each form is a struct deriving [`validator::Validate`]. [`Schema::check`]
//! reduces the validator's output to the first failing rule per field, in the
//! form's declared field order, which is what gets shown to the user.

pub mod schema;
pub mod submit;

use std::fmt;

use validator::{Validate, ValidationError, ValidationErrors};

pub use schema::{ApplicationForm, JobForm, LoginForm};
pub use submit::{FormController, SubmitState, Submission};

/// A single field-level message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field-level messages for a rejected form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Keep the first error of each field listed in `fields`
    pub fn from_validation(errors: &ValidationErrors, fields: &[&str]) -> Self {
        let by_field = errors.field_errors();
        let collected = fields
            .iter()
            .filter_map(|field| {
                by_field
                    .get(*field)
                    .and_then(|list| list.first())
                    .map(|first| FieldError::new(*field, message_of(first)))
            })
            .collect();
        Self(collected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input:")?;
        for error in &self.0 {
            write!(f, "\n  - {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// A form with a fixed field order for error reporting
pub trait Schema: Validate {
    /// Field names in display order
    const FIELDS: &'static [&'static str];

    /// Validate locally, returning the first failing rule per field
    fn check(&self) -> std::result::Result<(), FieldErrors> {
        self.validate()
            .map_err(|errors| FieldErrors::from_validation(&errors, Self::FIELDS))
    }
}
