//! Application state definitions

use crate::scheduling::SubmissionCoordinator;
use crate::state::{Candidate, InterviewForm, UserProfile};
use std::collections::VecDeque;

/// State machine for one open scheduling dialog.
///
/// The profile fetch on open is an explicit state: the form is only
/// constructed once the identity is known, so a partially seeded form can
/// never be rendered.
#[derive(Debug)]
pub enum DialogState {
    Loading,
    Ready {
        form: InterviewForm,
        user: UserProfile,
    },
    Failed(String),
}

/// One scheduling dialog instance, created when the dialog opens and
/// discarded when it closes or a submission completes.
#[derive(Debug)]
pub struct SchedulingDialog {
    pub candidate_id: String,
    pub state: DialogState,
    pub coordinator: SubmissionCoordinator,
}

impl SchedulingDialog {
    /// New dialog waiting on the profile fetch
    pub fn loading(candidate_id: String) -> Self {
        Self {
            candidate_id,
            state: DialogState::Loading,
            coordinator: SubmissionCoordinator::new(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Data
    pub candidates: Vec<Candidate>,
    pub selected_candidate: usize,

    // Scheduling dialog (at most one open at a time)
    pub scheduling_dialog: Option<SchedulingDialog>,
    /// Set by the dialog host when a successful submit should open the
    /// dialog again for the next candidate
    pub reopen_requested: bool,

    // Connection and feedback
    pub backend_connected: bool,
    pub(crate) errors: VecDeque<String>,
}

impl AppState {
    /// Currently highlighted candidate, if any
    pub fn selected(&self) -> Option<&Candidate> {
        self.candidates.get(self.selected_candidate)
    }

    pub fn select_next(&mut self) {
        if self.selected_candidate + 1 < self.candidates.len() {
            self.selected_candidate += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_candidate = self.selected_candidate.saturating_sub(1);
    }

    /// Advance the selection for the open-next flow. Returns false when
    /// already at the end of the list.
    pub fn advance_selection(&mut self) -> bool {
        if self.selected_candidate + 1 < self.candidates.len() {
            self.selected_candidate += 1;
            true
        } else {
            false
        }
    }

    /// Queue an error for the error dialog overlay
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    /// Error currently shown, if any
    pub fn current_error(&self) -> Option<&String> {
        self.errors.front()
    }

    /// Dismiss the currently shown error
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
