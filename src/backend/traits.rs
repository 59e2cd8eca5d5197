//! Trait abstraction for the scheduling backend to enable mocking in tests

use crate::scheduling::InterviewPayload;
use crate::state::{Candidate, UserProfile};
use anyhow::Result;
use async_trait::async_trait;

/// Operations the scheduling backend exposes. The app and the submission
/// coordinator depend on this trait; the binary injects the HTTP client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchedulerApi: Send + Sync {
    /// Check if the backend is reachable
    async fn check_connection(&self) -> bool;

    /// Fetch the signed-in user's profile, invoked once per dialog open
    async fn fetch_current_user(&mut self) -> Result<UserProfile>;

    /// List candidates for the position
    async fn list_candidates(&mut self) -> Result<Vec<Candidate>>;

    /// Record a new interview for a candidate
    async fn add_interview(&mut self, candidate_id: &str, payload: &InterviewPayload)
        -> Result<()>;
}
