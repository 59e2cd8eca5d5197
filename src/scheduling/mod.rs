//! Interview submission flow

mod coordinator;
mod payload;

pub use coordinator::{DialogHost, SubmissionCoordinator, SubmitError};
pub use payload::InterviewPayload;

#[cfg(test)]
pub use coordinator::MockDialogHost;
