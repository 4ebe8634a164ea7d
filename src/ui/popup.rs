//! Welcome popup

use super::components::{render_dialog, DialogConfig};
use crate::state::PopupState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const TITLE: &str = "Welcome to AgroVita";
const MESSAGE: &str = "🌱 Purely Bio-Natural\n\nBuilding the future of Bharat's soil with \
                       lab-tested formulas.\n\nISO 9001 · 100% Organic";

/// Draw the popup while it slides in or waits for dismissal
pub fn draw(frame: &mut Frame, popup: &PopupState) {
    if !popup.is_visible() {
        return;
    }

    render_dialog(
        frame,
        DialogConfig {
            title: TITLE,
            title_color: Color::Green,
            border_color: Color::Green,
            message: MESSAGE,
            hint: Some(vec![
                Span::styled(
                    "[ Explore Experience ]",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Enter/Esc", Style::default().fg(Color::DarkGray)),
            ]),
            max_width: 56,
            y_offset: popup.slide_offset.round() as u16,
        },
    );
}
