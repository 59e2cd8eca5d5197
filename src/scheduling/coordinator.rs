//! Submission coordinator for the scheduling dialog
//!
//! Owns the in-flight flag and the post-submit sequence. The backend client
//! and the dialog host arrive as explicit arguments so the whole flow can be
//! exercised with mocks.

use super::payload::InterviewPayload;
use crate::backend::SchedulerApi;
use crate::state::{validate, Candidate, InterviewForm};
use thiserror::Error;

/// Why a submit attempt did not complete
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("form has validation errors")]
    Invalid,
    #[error("failed to schedule interview: {0:#}")]
    Backend(anyhow::Error),
}

/// UI-side effects of a completed submission. Implemented by the app; mocked
/// in tests to pin down the reset -> close -> advance order.
#[cfg_attr(test, mockall::automock)]
pub trait DialogHost {
    /// Tear down the scheduling dialog
    fn close_dialog(&mut self);
    /// Advance to the next candidate and request the dialog be reopened
    fn open_next(&mut self);
}

/// Drives one dialog instance's submissions
#[derive(Debug, Default)]
pub struct SubmissionCoordinator {
    submitting: bool,
}

impl SubmissionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an add-interview call is in flight. The submit button
    /// renders disabled whenever this is set.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate, build the payload, and run the add-interview call.
    ///
    /// On success the form is reset before the dialog is torn down, so no
    /// stale values can leak into the next open, and the host is told to
    /// close and then advance, exactly once each. On failure the in-flight
    /// flag is cleared and nothing else changes: the dialog stays open for a
    /// retry.
    pub async fn submit<C, H>(
        &mut self,
        form: &mut InterviewForm,
        candidate: &Candidate,
        created_by: &str,
        client: &mut C,
        host: &mut H,
    ) -> Result<(), SubmitError>
    where
        C: SchedulerApi + ?Sized,
        H: DialogHost + ?Sized,
    {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if !validate(form).is_clean() {
            return Err(SubmitError::Invalid);
        }

        self.submitting = true;
        let payload = InterviewPayload::build(form, candidate, created_by);
        tracing::debug!(
            candidate_id = %candidate.id,
            round = payload.round,
            attendees = payload.attendees_list.len(),
            "submitting interview"
        );

        match client.add_interview(&candidate.id, &payload).await {
            Ok(()) => {
                form.reset();
                host.close_dialog();
                host.open_next();
                self.submitting = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(candidate_id = %candidate.id, error = %e, "interview submission failed");
                self.submitting = false;
                Err(SubmitError::Backend(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSchedulerApi;
    use anyhow::anyhow;
    use mockall::Sequence;

    fn candidate() -> Candidate {
        Candidate {
            id: "c1".to_string(),
            name: "Ada".to_string(),
            role: None,
            photo_url: None,
            interviews: vec![],
        }
    }

    fn valid_form() -> InterviewForm {
        let mut form = InterviewForm::seeded("a@b.com");
        form.email2.set_text("c@d.com".to_string());
        form
    }

    #[tokio::test]
    async fn test_success_resets_then_closes_then_advances() {
        let mut form = valid_form();
        form.append_email_field();
        form.additional_emails[0].set_text("e@f.com".to_string());

        let expected = InterviewPayload {
            xai_template: "30-min-interview".to_string(),
            attendees_list: vec![
                "a@b.com".to_string(),
                "c@d.com".to_string(),
                "e@f.com".to_string(),
            ],
            round: 1,
            created_by: "u1".to_string(),
        };
        let mut client = MockSchedulerApi::new();
        client
            .expect_add_interview()
            .withf(move |id, payload| id == "c1" && *payload == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut seq = Sequence::new();
        let mut host = MockDialogHost::new();
        host.expect_close_dialog()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_open_next()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut coordinator = SubmissionCoordinator::new();
        let result = coordinator
            .submit(&mut form, &candidate(), "u1", &mut client, &mut host)
            .await;

        assert!(result.is_ok());
        assert!(!coordinator.is_submitting());
        // Reset happened before teardown: the form is back to seeded defaults
        assert_eq!(form.my_email.as_text(), "a@b.com");
        assert_eq!(form.email2.as_text(), "");
        assert!(form.additional_emails.is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_form_and_never_touches_host() {
        let mut form = valid_form();

        let mut client = MockSchedulerApi::new();
        client
            .expect_add_interview()
            .times(1)
            .returning(|_, _| Err(anyhow!("backend down")));

        let mut host = MockDialogHost::new();
        host.expect_close_dialog().times(0);
        host.expect_open_next().times(0);

        let mut coordinator = SubmissionCoordinator::new();
        let result = coordinator
            .submit(&mut form, &candidate(), "u1", &mut client, &mut host)
            .await;

        assert!(matches!(result, Err(SubmitError::Backend(_))));
        // Flag cleared so the user can retry
        assert!(!coordinator.is_submitting());
        // Form untouched
        assert_eq!(form.email2.as_text(), "c@d.com");
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let mut form = valid_form();

        let mut client = MockSchedulerApi::new();
        let mut calls = 0;
        client.expect_add_interview().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Err(anyhow!("transient"))
            } else {
                Ok(())
            }
        });

        let mut host = MockDialogHost::new();
        host.expect_close_dialog().times(1).return_const(());
        host.expect_open_next().times(1).return_const(());

        let mut coordinator = SubmissionCoordinator::new();
        let first = coordinator
            .submit(&mut form, &candidate(), "u1", &mut client, &mut host)
            .await;
        assert!(first.is_err());

        let second = coordinator
            .submit(&mut form, &candidate(), "u1", &mut client, &mut host)
            .await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_form_blocks_submission() {
        // email2 left empty -> Required
        let mut form = InterviewForm::seeded("a@b.com");

        let mut client = MockSchedulerApi::new();
        client.expect_add_interview().times(0);
        let mut host = MockDialogHost::new();
        host.expect_close_dialog().times(0);
        host.expect_open_next().times(0);

        let mut coordinator = SubmissionCoordinator::new();
        let result = coordinator
            .submit(&mut form, &candidate(), "u1", &mut client, &mut host)
            .await;

        assert!(matches!(result, Err(SubmitError::Invalid)));
        assert!(!coordinator.is_submitting());
    }

    #[tokio::test]
    async fn test_reentrant_submit_is_rejected() {
        let mut form = valid_form();
        let mut client = MockSchedulerApi::new();
        client.expect_add_interview().times(0);
        let mut host = MockDialogHost::new();

        let mut coordinator = SubmissionCoordinator::new();
        coordinator.submitting = true;
        let result = coordinator
            .submit(&mut form, &candidate(), "u1", &mut client, &mut host)
            .await;

        assert!(matches!(result, Err(SubmitError::InFlight)));
        // The guard does not clear a flag it did not set
        assert!(coordinator.is_submitting());
    }

    #[tokio::test]
    async fn test_round_snapshot_taken_at_submit_time() {
        let mut form = valid_form();
        let mut with_history = candidate();
        with_history.interviews = vec![
            crate::state::Interview {
                id: "i1".to_string(),
                round: 1,
                status: "completed".to_string(),
                created_at: chrono::Utc::now(),
            },
            crate::state::Interview {
                id: "i2".to_string(),
                round: 2,
                status: "scheduled".to_string(),
                created_at: chrono::Utc::now(),
            },
        ];

        let mut client = MockSchedulerApi::new();
        client
            .expect_add_interview()
            .withf(|_, payload| payload.round == 3)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut host = MockDialogHost::new();
        host.expect_close_dialog().times(1).return_const(());
        host.expect_open_next().times(1).return_const(());

        let mut coordinator = SubmissionCoordinator::new();
        let result = coordinator
            .submit(&mut form, &with_history, "u1", &mut client, &mut host)
            .await;
        assert!(result.is_ok());
    }
}
