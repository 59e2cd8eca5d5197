//! Candidate list view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the candidate list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.candidates.is_empty() {
        draw_empty(frame, area, app);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .candidates
        .iter()
        .map(|candidate| {
            let mut spans = vec![Span::styled(
                format!("{:<24}", candidate.name),
                Style::default().fg(Color::White),
            )];
            if let Some(role) = &candidate.role {
                spans.push(Span::styled(
                    format!("{role:<28}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let interviews = candidate.interviews.len();
            let label = if interviews == 1 {
                "1 interview".to_string()
            } else {
                format!("{interviews} interviews")
            };
            spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.selected_candidate));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_empty(frame: &mut Frame, area: Rect, app: &App) {
    let message = if app.state.backend_connected {
        "No candidates for this position yet."
    } else {
        "Backend unreachable. Press r to retry."
    };
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
