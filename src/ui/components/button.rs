//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    /// Holds keyboard focus
    Focused,
    /// Unchosen option, e.g. the other role
    Dimmed,
    /// Attempt in flight; spinner advances with `frame`
    Sending { frame: usize },
}

impl ButtonState {
    fn border_style(self) -> Style {
        match self {
            ButtonState::Focused => Style::default().fg(Color::Green),
            ButtonState::Sending { .. } => Style::default().fg(Color::Yellow),
            ButtonState::Idle | ButtonState::Dimmed => Style::default().fg(Color::DarkGray),
        }
    }

    fn text_style(self) -> Style {
        match self {
            ButtonState::Focused => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            ButtonState::Sending { .. } => Style::default().fg(Color::Yellow),
            ButtonState::Dimmed => Style::default().fg(Color::DarkGray),
            ButtonState::Idle => Style::default(),
        }
    }

    fn caption(self, label: &str) -> String {
        match self {
            ButtonState::Sending { frame } => {
                format!(" {} {label} ", SPINNER[frame % SPINNER.len()])
            }
            _ => format!(" {label} "),
        }
    }
}

/// Render a bordered button
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let paragraph = Paragraph::new(state.caption(label))
        .style(state.text_style())
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.border_style());

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_pads_label() {
        assert_eq!(ButtonState::Idle.caption("Notify Me"), " Notify Me ");
        assert_eq!(ButtonState::Focused.caption("Notify Me"), " Notify Me ");
    }

    #[test]
    fn test_sending_caption_cycles_spinner() {
        assert_eq!(
            ButtonState::Sending { frame: 0 }.caption("Sending..."),
            " ⠋ Sending... "
        );
        assert_eq!(
            ButtonState::Sending { frame: 11 }.caption("Sending..."),
            " ⠙ Sending... "
        );
    }

    #[test]
    fn test_focus_and_sending_are_distinct() {
        assert_ne!(
            ButtonState::Focused.border_style(),
            ButtonState::Sending { frame: 0 }.border_style()
        );
        assert_eq!(
            ButtonState::Idle.border_style(),
            ButtonState::Dimmed.border_style()
        );
        assert_ne!(ButtonState::Idle.text_style(), ButtonState::Dimmed.text_style());
    }
}
