//! Layout components (navigation bar, status bar)

use crate::app::App;
use crate::i18n::Language;
use crate::platform::{LANGUAGE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FormView, Section};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Floating WhatsApp contact link
pub const WHATSAPP_LINK: &str = "https://wa.me/919510304547";

const BRAND: &str = "🌿 AgroVita Organics";

/// Split the frame into navigation bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation bar
            Constraint::Min(0),    // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the navigation bar: brand on the left, language toggle on the right
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let bar_style = Style::default().bg(Color::Black);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {BRAND}"),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .style(bar_style);
    frame.render_widget(brand, area);

    let current = app.state.localizer.current();
    let mut spans = Vec::new();
    for lang in [Language::En, Language::Hi] {
        let style = if lang == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", lang.label()), style));
        spans.push(Span::raw(" "));
    }

    let toggle = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(toggle, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // WhatsApp link and quit hint on the right
    let right = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("WhatsApp {WHATSAPP_LINK}"),
            Style::default().fg(Color::Green),
        ),
        Span::styled("  ^C:quit ", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Right)
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(right, area);
}

/// Get keyboard hints for the focused section
fn get_view_hints(app: &App) -> String {
    if app.state.popup.is_visible() {
        return "Enter/Esc:explore".to_string();
    }

    let section = match app.state.focus {
        Section::Hero => "PgDn:contact",
        Section::Contact => "PgUp:home",
    };
    let form = app.state.form(app.state.focus.into());

    match form.view() {
        FormView::Input => {
            let role = if app.state.focus == Section::Contact {
                "  ←/→:role"
            } else {
                ""
            };
            format!(
                "{section}  Tab:next{role}  {SUBMIT_SHORTCUT}:submit  {LANGUAGE_SHORTCUT}:language"
            )
        }
        FormView::Pending => format!("{section}  {LANGUAGE_SHORTCUT}:language"),
        FormView::Success => format!("{section}  Enter:new  {LANGUAGE_SHORTCUT}:language"),
    }
}
