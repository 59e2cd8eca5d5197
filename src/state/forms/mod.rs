//! Form domain layer
//!
//! Type-safe state and validation for the interview scheduling dialog.

mod field;
mod interview_form;
mod validation;

pub use field::{FieldValue, FormField, TimeSlot, MAX_EMAIL_LEN};
pub use interview_form::{
    Form, InterviewForm, BUTTON_CANCEL, BUTTON_SUBMIT, MAX_ADDITIONAL_ATTENDEES,
};
pub use validation::{validate, ValidationErrors, INVALID_EMAIL, REQUIRED};
