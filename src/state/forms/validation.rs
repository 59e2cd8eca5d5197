//! Pure validation pass over the interview form
//!
//! Validation is recomputed from scratch after every edit and never mutates
//! the form. Errors are data handed to the renderer, not `Err` values.

use super::interview_form::InterviewForm;
use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Please enter valid email";

/// local@domain.tld shape: non-whitespace, "@", non-whitespace, ".", non-whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid"));

/// Per-field error messages. `additional_emails` is positionally aligned with
/// the form's dynamic attendee list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub my_email: Option<&'static str>,
    pub email2: Option<&'static str>,
    pub additional_emails: Vec<Option<&'static str>>,
}

impl ValidationErrors {
    /// True only when every field, including every dynamic entry, is error-free.
    /// The form is submit-eligible exactly when this holds.
    pub fn is_clean(&self) -> bool {
        self.my_email.is_none()
            && self.email2.is_none()
            && self.additional_emails.iter().all(Option::is_none)
    }

    /// Error for the dynamic attendee field at `index`, if any
    pub fn additional_error(&self, index: usize) -> Option<&'static str> {
        self.additional_emails.get(index).copied().flatten()
    }
}

fn validate_exists(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED)
    } else {
        None
    }
}

fn validate_is_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    if EMAIL_RE.is_match(value) {
        None
    } else {
        Some(INVALID_EMAIL)
    }
}

/// Validate the whole form. The two primary fields are required and checked
/// independently; dynamic attendee fields are optional but must be valid
/// emails when filled in.
pub fn validate(form: &InterviewForm) -> ValidationErrors {
    ValidationErrors {
        my_email: validate_exists(form.my_email.as_text())
            .or_else(|| validate_is_email(form.my_email.as_text())),
        email2: validate_exists(form.email2.as_text())
            .or_else(|| validate_is_email(form.email2.as_text())),
        additional_emails: form
            .additional_emails
            .iter()
            .map(|field| validate_is_email(field.as_text()))
            .collect(),
    }
}
