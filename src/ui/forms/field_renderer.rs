//! Field rendering utilities for forms

use crate::i18n::LocalizationBundle;
use crate::leads::SubmissionFailure;
use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field; the localized placeholder is the block title
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    bundle: &LocalizationBundle,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Green)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), style),
            Span::styled(cursor, Style::default().fg(Color::Green)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.kind.placeholder(bundle)))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Inline banner for the last failed attempt, localized at draw time
pub fn draw_error_banner(
    frame: &mut Frame,
    area: Rect,
    failure: Option<SubmissionFailure>,
    bundle: &LocalizationBundle,
) {
    let Some(failure) = failure else {
        return;
    };

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "⚠ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(failure.message(bundle), Style::default().fg(Color::Red)),
    ]))
    .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
}
