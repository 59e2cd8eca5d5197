//! Application state and core logic

use crate::backend::{SchedulerApi, SchedulerClient};
use crate::config::TuiConfig;
use crate::scheduling::{DialogHost, SubmitError};
use crate::state::{
    AppState, DialogState, Form, InterviewForm, SchedulingDialog, BUTTON_CANCEL, BUTTON_SUBMIT,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the scheduling backend
    pub backend: SchedulerClient,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback message for the status bar
    pub status_message: Option<String>,
}

/// Dialog-host view of the app state handed to the submission coordinator.
/// Closing tears down the dialog; advancing moves the selection and asks for
/// the dialog to be reopened on the next candidate.
struct AppDialogHost<'a> {
    state: &'a mut AppState,
}

impl DialogHost for AppDialogHost<'_> {
    fn close_dialog(&mut self) {
        self.state.scheduling_dialog = None;
    }

    fn open_next(&mut self) {
        if self.state.advance_selection() {
            self.state.reopen_requested = true;
        }
    }
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let mut backend = SchedulerClient::new(config.api_address)?;
        let mut state = AppState::default();

        state.backend_connected = backend.check_connection().await;
        if state.backend_connected {
            if let Ok(candidates) = backend.list_candidates().await {
                state.candidates = candidates;
            }
        }

        Ok(Self {
            state,
            backend,
            quit: false,
            status_message: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The error dialog swallows everything until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.scheduling_dialog.is_some() {
            self.handle_dialog_key(key).await
        } else {
            self.handle_list_key(key).await
        }
    }

    /// Handle keys in the candidate list
    async fn handle_list_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Enter | KeyCode::Char('s') => self.open_scheduling_dialog().await,
            KeyCode::Char('r') => self.refresh_candidates().await,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the scheduling dialog is open
    async fn handle_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        let mut close_requested = false;
        let mut submit_requested = false;

        {
            let Some(dialog) = self.state.scheduling_dialog.as_mut() else {
                return Ok(());
            };
            let submitting = dialog.coordinator.is_submitting();
            match &mut dialog.state {
                DialogState::Loading => {
                    if key.code == KeyCode::Esc {
                        close_requested = true;
                    }
                }
                DialogState::Failed(_) => {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                        close_requested = true;
                    }
                }
                DialogState::Ready { form, .. } => match key.code {
                    KeyCode::Esc if !submitting => {
                        form.reset();
                        close_requested = true;
                    }
                    KeyCode::Tab => form.next_field(),
                    KeyCode::BackTab => form.prev_field(),
                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        submit_requested = true;
                    }
                    KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        form.append_email_field();
                        // Land on the freshly added field
                        let last_attendee = 2 + form.additional_emails.len();
                        form.set_active_field(last_attendee);
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if let Some(index) = form.active_additional_index() {
                            form.remove_email_field(index);
                        }
                    }
                    KeyCode::Left | KeyCode::Char('h') if form.is_buttons_row_active() => {
                        form.prev_button();
                    }
                    KeyCode::Right | KeyCode::Char('l') if form.is_buttons_row_active() => {
                        form.next_button();
                    }
                    KeyCode::Enter if form.is_buttons_row_active() => {
                        match form.selected_button {
                            BUTTON_CANCEL if !submitting => {
                                form.reset();
                                close_requested = true;
                            }
                            BUTTON_SUBMIT => submit_requested = true,
                            _ => {}
                        }
                    }
                    KeyCode::Enter => form.next_field(),
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                        if form.active_field_index == 0 =>
                    {
                        form.time.toggle_slot();
                    }
                    KeyCode::Char(c) if !form.is_buttons_row_active() => {
                        form.get_active_field_mut().push_char(c);
                    }
                    KeyCode::Backspace if !form.is_buttons_row_active() => {
                        form.get_active_field_mut().pop_char();
                    }
                    _ => {}
                },
            }
        }

        if close_requested {
            self.state.scheduling_dialog = None;
        }
        if submit_requested {
            self.begin_scheduling().await;
        }
        Ok(())
    }

    /// Open the scheduling dialog for the selected candidate. The dialog
    /// stays in Loading until the profile fetch resolves; a fetch failure
    /// shows an error state instead of a half-seeded form.
    async fn open_scheduling_dialog(&mut self) {
        let Some(candidate) = self.state.selected() else {
            self.push_error("No candidate selected");
            return;
        };
        let candidate_id = candidate.id.clone();
        tracing::info!(%candidate_id, "opening scheduling dialog");
        self.state.scheduling_dialog = Some(SchedulingDialog::loading(candidate_id));

        match self.backend.fetch_current_user().await {
            Ok(profile) => {
                if let Some(dialog) = self.state.scheduling_dialog.as_mut() {
                    dialog.state = DialogState::Ready {
                        form: InterviewForm::seeded(&profile.email),
                        user: profile,
                    };
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile fetch failed");
                if let Some(dialog) = self.state.scheduling_dialog.as_mut() {
                    dialog.state =
                        DialogState::Failed(format!("Failed to load your profile: {e:#}"));
                }
            }
        }
    }

    /// Run the submit flow for the open dialog
    async fn begin_scheduling(&mut self) {
        let Some(mut dialog) = self.state.scheduling_dialog.take() else {
            return;
        };

        let Some(candidate) = self
            .state
            .candidates
            .iter()
            .find(|c| c.id == dialog.candidate_id)
            .cloned()
        else {
            self.push_error("Candidate is no longer available");
            return;
        };

        let outcome = {
            let DialogState::Ready { form, user } = &mut dialog.state else {
                self.state.scheduling_dialog = Some(dialog);
                return;
            };
            let created_by = user.user_id.clone();
            let mut host = AppDialogHost {
                state: &mut self.state,
            };
            dialog
                .coordinator
                .submit(form, &candidate, &created_by, &mut self.backend, &mut host)
                .await
        };

        match outcome {
            Ok(()) => {
                self.status_message = Some(format!("Interview scheduled for {}", candidate.name));
                // Refresh so round counts reflect the new interview
                self.refresh_candidates().await;
                if self.state.reopen_requested {
                    self.state.reopen_requested = false;
                    self.open_scheduling_dialog().await;
                }
            }
            Err(SubmitError::Backend(e)) => {
                self.push_error(format!("{e:#}"));
                self.state.scheduling_dialog = Some(dialog);
            }
            Err(SubmitError::Invalid | SubmitError::InFlight) => {
                // Keep the dialog; the disabled button already tells the story
                self.state.scheduling_dialog = Some(dialog);
            }
        }
    }

    /// Reload the candidate list from the backend
    async fn refresh_candidates(&mut self) {
        match self.backend.list_candidates().await {
            Ok(candidates) => {
                self.state.backend_connected = true;
                if self.state.selected_candidate >= candidates.len() && !candidates.is_empty() {
                    self.state.selected_candidate = candidates.len() - 1;
                }
                self.state.candidates = candidates;
            }
            Err(e) => {
                self.state.backend_connected = false;
                self.push_error(format!("{e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Candidate, UserProfile};

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {id}"),
            role: None,
            photo_url: None,
            interviews: vec![],
        }
    }

    fn test_app() -> App {
        App {
            state: AppState {
                candidates: vec![candidate("c1"), candidate("c2")],
                ..Default::default()
            },
            backend: SchedulerClient::new(None).unwrap(),
            quit: false,
            status_message: None,
        }
    }

    fn ready_dialog(candidate_id: &str) -> SchedulingDialog {
        let mut dialog = SchedulingDialog::loading(candidate_id.to_string());
        dialog.state = DialogState::Ready {
            form: InterviewForm::seeded("me@example.com"),
            user: UserProfile {
                email: "me@example.com".to_string(),
                user_id: "u1".to_string(),
            },
        };
        dialog
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn form_of(app: &App) -> &InterviewForm {
        match &app.state.scheduling_dialog.as_ref().unwrap().state {
            DialogState::Ready { form, .. } => form,
            other => panic!("expected Ready dialog, got {other:?}"),
        }
    }

    mod dialog_host {
        use super::*;

        #[test]
        fn test_close_discards_dialog() {
            let mut state = AppState {
                scheduling_dialog: Some(ready_dialog("c1")),
                ..Default::default()
            };
            let mut host = AppDialogHost { state: &mut state };
            host.close_dialog();
            assert!(state.scheduling_dialog.is_none());
        }

        #[test]
        fn test_open_next_advances_and_requests_reopen() {
            let mut state = AppState {
                candidates: vec![candidate("c1"), candidate("c2")],
                ..Default::default()
            };
            let mut host = AppDialogHost { state: &mut state };
            host.open_next();
            assert_eq!(state.selected_candidate, 1);
            assert!(state.reopen_requested);
        }

        #[test]
        fn test_open_next_at_end_of_list_is_noop() {
            let mut state = AppState {
                candidates: vec![candidate("c1")],
                ..Default::default()
            };
            let mut host = AppDialogHost { state: &mut state };
            host.open_next();
            assert_eq!(state.selected_candidate, 0);
            assert!(!state.reopen_requested);
        }
    }

    mod list_keys {
        use super::*;

        #[tokio::test]
        async fn test_q_quits() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_j_and_k_move_selection() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            assert_eq!(app.state.selected_candidate, 1);
            app.handle_key(key(KeyCode::Char('k'))).await.unwrap();
            assert_eq!(app.state.selected_candidate, 0);
        }
    }

    mod dialog_keys {
        use super::*;

        #[tokio::test]
        async fn test_typing_edits_active_field() {
            let mut app = test_app();
            app.state.scheduling_dialog = Some(ready_dialog("c1"));
            // Move from the slot row to myemail, then type
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(form_of(&app).my_email.as_text(), "me@example.cox");
        }

        #[tokio::test]
        async fn test_space_toggles_slot_on_slot_row() {
            let mut app = test_app();
            app.state.scheduling_dialog = Some(ready_dialog("c1"));
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(
                form_of(&app).time_slot(),
                crate::state::TimeSlot::SixtyMinute
            );
        }

        #[tokio::test]
        async fn test_ctrl_a_adds_field_and_focuses_it() {
            let mut app = test_app();
            app.state.scheduling_dialog = Some(ready_dialog("c1"));
            app.handle_key(ctrl('a')).await.unwrap();
            let form = form_of(&app);
            assert_eq!(form.additional_emails.len(), 1);
            assert_eq!(form.active_additional_index(), Some(0));
        }

        #[tokio::test]
        async fn test_ctrl_d_removes_focused_attendee() {
            let mut app = test_app();
            app.state.scheduling_dialog = Some(ready_dialog("c1"));
            app.handle_key(ctrl('a')).await.unwrap();
            app.handle_key(ctrl('d')).await.unwrap();
            assert!(form_of(&app).additional_emails.is_empty());
        }

        #[tokio::test]
        async fn test_esc_closes_dialog() {
            let mut app = test_app();
            app.state.scheduling_dialog = Some(ready_dialog("c1"));
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.scheduling_dialog.is_none());
        }

        #[tokio::test]
        async fn test_cancel_button_closes_dialog() {
            let mut app = test_app();
            app.state.scheduling_dialog = Some(ready_dialog("c1"));
            // BackTab to the buttons row, select Cancel, press Enter
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.scheduling_dialog.is_none());
        }

        #[tokio::test]
        async fn test_error_dialog_swallows_keys_until_dismissed() {
            let mut app = test_app();
            app.push_error("boom");
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            assert_eq!(app.state.selected_candidate, 0);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.current_error().is_none());
        }
    }
}
