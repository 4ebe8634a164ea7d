//! Hero section: pitch, launch-notification form and gallery

use super::components::{render_button, ButtonState, BUTTON_HEIGHT};
use super::forms::{draw_error_banner, draw_field, draw_pending, draw_success};
use crate::app::App;
use crate::state::{Form, FormRow, FormView, LeadForm, Section, GALLERY};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the hero section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    draw_pitch(frame, chunks[0], app);
    draw_gallery(frame, chunks[1], app);
}

fn draw_pitch(frame: &mut Frame, area: Rect, app: &App) {
    let bundle = app.state.localizer.bundle();
    let focused = app.state.focus == Section::Hero;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tag
            Constraint::Length(1),
            Constraint::Length(2), // Tagline
            Constraint::Min(2),    // Sub copy
            Constraint::Length(8), // Notify form
        ])
        .split(inner);

    let tag = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", bundle.tag),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )));
    frame.render_widget(tag, chunks[0]);

    let tagline = Paragraph::new(bundle.tagline)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(tagline, chunks[2]);

    let sub = Paragraph::new(bundle.sub)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(sub, chunks[3]);

    draw_notify_form(frame, chunks[4], app, focused);
}

fn draw_notify_form(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let bundle = app.state.localizer.bundle();
    let form = &app.state.hero_form;

    match form.view() {
        FormView::Pending => {
            draw_pending(frame, area, bundle.sending, app.spinner_frame());
        }
        FormView::Success => {
            draw_success(
                frame,
                area,
                bundle.success_message,
                bundle.new_inquiry,
                focused,
            );
        }
        FormView::Input => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),             // Email
                    Constraint::Length(BUTTON_HEIGHT), // Notify button
                    Constraint::Min(1),                // Error banner
                ])
                .split(area);

            let row = form.active_row();
            draw_field(
                frame,
                chunks[0],
                &form.email,
                bundle,
                focused && matches!(row, FormRow::Field(_)),
            );
            let button = if focused && row == FormRow::Submit {
                ButtonState::Focused
            } else {
                ButtonState::Idle
            };
            render_button(frame, chunks[1], bundle.notify_button, button);
            draw_error_banner(frame, chunks[2], form.state().failure(), bundle);
        }
    }
}

fn draw_gallery(frame: &mut Frame, area: Rect, app: &App) {
    let carousel = &app.state.carousel;
    let item = carousel.current();

    let dots: Vec<Span> = (0..GALLERY.len())
        .map(|idx| {
            if idx == carousel.active {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item.sub, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            format!("🖼  {}", item.url),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(dots),
    ];

    let card = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}
