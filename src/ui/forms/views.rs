//! Pending and success views

use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Attempt in flight: the submit button turns into a spinner with the "sending" label
pub fn draw_pending(frame: &mut Frame, area: Rect, sending: &str, spinner_frame: usize) {
    let button_area = Rect {
        height: area.height.min(BUTTON_HEIGHT),
        ..area
    };
    render_button(
        frame,
        button_area,
        sending,
        ButtonState::Sending {
            frame: spinner_frame,
        },
    );
}

/// Confirmation with the "new inquiry" action
pub fn draw_success(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    new_inquiry: &str,
    is_focused: bool,
) {
    let action_style = if is_focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("✔ {message}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("[Enter] {new_inquiry}"), action_style)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(content, area);
}
