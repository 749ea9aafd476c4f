//! Form schemas for admin login, job creation and job applications

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError};

use super::Schema;
use crate::client::models::{LoginRequest, NewApplication, NewJob};

/// Admin login form
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Schema for LoginForm {
    const FIELDS: &'static [&'static str] = &["username", "password"];
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Admin job creation form
#[derive(Debug, Clone, Default, Validate)]
pub struct JobForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company name is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 50, message = "Description must be at least 50 characters"))]
    pub description: String,
}

impl Schema for JobForm {
    const FIELDS: &'static [&'static str] = &["title", "company", "location", "description"];
}

impl JobForm {
    pub fn to_new_job(&self) -> NewJob {
        NewJob {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

/// Public job application form.
///
/// `cv_link` is optional; an empty string means no link.
#[derive(Debug, Clone, Default, Validate)]
pub struct ApplicationForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_applicant_email"))]
    pub email: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub cv_link: String,

    #[validate(length(min = 50, message = "Cover letter must be at least 50 characters"))]
    pub cover_letter: String,
}

impl Schema for ApplicationForm {
    const FIELDS: &'static [&'static str] = &["name", "email", "cv_link", "cover_letter"];
}

impl ApplicationForm {
    /// Build the request body for the job identified by `job_id`
    pub fn to_new_application(&self, job_id: &str) -> NewApplication {
        NewApplication {
            name: self.name.clone(),
            email: self.email.clone(),
            cv_link: Some(self.cv_link.clone()).filter(|link| !link.is_empty()),
            cover_letter: self.cover_letter.clone(),
            job_id: job_id.to_string(),
        }
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Required, then email shape: an empty value only reports "required"
fn validate_applicant_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error("required", "Email address is required"));
    }
    if !value.validate_email() {
        return Err(rule_error("email", "Invalid Email format"));
    }
    Ok(())
}

fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(rule_error("url", "Please enter a valid URL"))
    }
}
