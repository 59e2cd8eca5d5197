//! UI module for rendering the TUI

mod candidates;
mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (main_area, status_area) = layout::create_layout(area);

    candidates::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays: scheduling dialog first, error dialog on top
    if let Some(dialog) = &app.state.scheduling_dialog {
        let candidate = app
            .state
            .candidates
            .iter()
            .find(|c| c.id == dialog.candidate_id);
        components::render_interview_dialog(frame, dialog, candidate);
    }

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
