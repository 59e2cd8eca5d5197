//! Interview scheduling dialog component

use super::base::{centered_rect, render_dialog, DialogConfig};
use crate::state::{
    validate, Candidate, DialogState, InterviewForm, SchedulingDialog, TimeSlot, BUTTON_CANCEL,
    BUTTON_SUBMIT,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 66;

/// Render the scheduling dialog overlay for its current lifecycle state
pub fn render_interview_dialog(
    frame: &mut Frame,
    dialog: &SchedulingDialog,
    candidate: Option<&Candidate>,
) {
    match &dialog.state {
        DialogState::Loading => render_dialog(
            frame,
            DialogConfig {
                title: "Schedule an Interview",
                title_color: Color::Cyan,
                border_color: Color::Cyan,
                message: "Loading your profile...",
                hint: Some(vec![
                    Span::styled("Esc", Style::default().fg(Color::Cyan)),
                    Span::raw(" cancel"),
                ]),
                ..Default::default()
            },
        ),
        DialogState::Failed(message) => render_dialog(
            frame,
            DialogConfig {
                title: "Schedule an Interview",
                title_color: Color::Red,
                border_color: Color::Red,
                message: message.as_str(),
                hint: Some(vec![
                    Span::raw("Press "),
                    Span::styled(
                        "Esc",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" to close"),
                ]),
                ..Default::default()
            },
        ),
        DialogState::Ready { form, .. } => {
            render_form(frame, form, dialog, candidate);
        }
    }
}

fn render_form(
    frame: &mut Frame,
    form: &InterviewForm,
    dialog: &SchedulingDialog,
    candidate: Option<&Candidate>,
) {
    let errors = validate(form);
    let attendee_rows = form.additional_emails.len() as u16;

    // candidate line + spacer + slot row + attendees header + explanation +
    // two primary fields + dynamic rows + add hint + buttons + footer
    let content_height = 5 + 2 * 3 + attendee_rows * 3 + 1 + BUTTON_HEIGHT + 1;
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, content_height + 2);

    frame.render_widget(Clear, dialog_area);
    let block = Block::default()
        .title(" Schedule an Interview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let mut constraints = vec![
        Constraint::Length(1), // candidate card
        Constraint::Length(1), // spacer
        Constraint::Length(1), // time slot radio row
        Constraint::Length(1), // attendees header
        Constraint::Length(1), // explanation
        Constraint::Length(3), // myemail
        Constraint::Length(3), // email2
    ];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(attendee_rows as usize));
    constraints.push(Constraint::Length(1)); // add-more hint
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1)); // footer note

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_candidate_line(frame, chunks[0], candidate);
    render_slot_row(frame, chunks[2], form);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Attendees:",
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Provide email addresses for everyone involved with the interview.",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[4],
    );

    draw_field(
        frame,
        chunks[5],
        &form.my_email,
        form.active_field_index == 1,
        errors.my_email,
    );
    draw_field(
        frame,
        chunks[6],
        &form.email2,
        form.active_field_index == 2,
        errors.email2,
    );

    for (i, field) in form.additional_emails.iter().enumerate() {
        draw_field(
            frame,
            chunks[7 + i],
            field,
            form.active_field_index == 3 + i,
            errors.additional_error(i),
        );
    }

    let hint_chunk = chunks[7 + attendee_rows as usize];
    render_attendee_hint(frame, hint_chunk, form);

    let buttons_chunk = chunks[8 + attendee_rows as usize];
    render_buttons_row(frame, buttons_chunk, form, dialog, errors.is_clean());

    let footer_chunk = chunks[9 + attendee_rows as usize];
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Begin Scheduling emails all attendees to coordinate availability.",
            Style::default().fg(Color::DarkGray),
        ))),
        footer_chunk,
    );
}

fn render_candidate_line(frame: &mut Frame, area: Rect, candidate: Option<&Candidate>) {
    let line = match candidate {
        Some(candidate) => {
            let mut spans = vec![Span::styled(
                candidate.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(role) = &candidate.role {
                spans.push(Span::styled(
                    format!("  {role}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                format!("  round {}", candidate.next_round()),
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        }
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_slot_row(frame: &mut Frame, area: Rect, form: &InterviewForm) {
    let is_active = form.active_field_index == 0;
    let label_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("Length: ", label_style)];
    for slot in [TimeSlot::ThirtyMinute, TimeSlot::SixtyMinute] {
        let marker = if form.time_slot() == slot {
            "(•) "
        } else {
            "( ) "
        };
        let style = if form.time_slot() == slot {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker}{}  ", slot.label()), style));
    }
    if is_active {
        spans.push(Span::styled(
            "(Space toggles)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_attendee_hint(frame: &mut Frame, area: Rect, form: &InterviewForm) {
    let mut spans = Vec::new();
    if form.can_add_attendee() {
        spans.push(Span::styled("Ctrl+A", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            " add attendee  ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    if form.active_additional_index().is_some() {
        spans.push(Span::styled("Ctrl+D", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            " remove this attendee",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_buttons_row(
    frame: &mut Frame,
    area: Rect,
    form: &InterviewForm,
    dialog: &SchedulingDialog,
    is_clean: bool,
) {
    let on_buttons = form.is_buttons_row_active();
    let submitting = dialog.coordinator.is_submitting();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(22),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Cancel",
        on_buttons && form.selected_button == BUTTON_CANCEL,
        !submitting,
    );
    let submit_label = if submitting {
        "Scheduling..."
    } else {
        "Begin Scheduling"
    };
    render_button(
        frame,
        chunks[1],
        submit_label,
        on_buttons && form.selected_button == BUTTON_SUBMIT,
        is_clean && !submitting,
    );
}
