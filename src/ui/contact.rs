//! Contact section: company details and the inquiry form

use super::components::{render_button, ButtonState, BUTTON_HEIGHT};
use super::forms::{draw_error_banner, draw_field, draw_pending, draw_success};
use super::layout::WHATSAPP_LINK;
use crate::app::App;
use crate::i18n::LocalizationBundle;
use crate::leads::UserRole;
use crate::state::{FieldKind, Form, FormRow, FormView, InquiryForm, LeadForm, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_details(frame, chunks[0], app.state.localizer.bundle());
    draw_inquiry_form(frame, chunks[1], app);
}

fn draw_details(frame: &mut Frame, area: Rect, bundle: &LocalizationBundle) {
    let label = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(Span::styled("📍", label)),
        Line::from(bundle.contact.address),
        Line::from(""),
        Line::from(Span::styled("✉", label)),
        Line::from(bundle.contact.mail),
        Line::from(""),
        Line::from(Span::styled("☎", label)),
        Line::from(bundle.contact.phone),
        Line::from(Span::styled(
            WHATSAPP_LINK,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let details = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" AgroVita Organics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(details, area);
}

fn draw_inquiry_form(frame: &mut Frame, area: Rect, app: &App) {
    let bundle = app.state.localizer.bundle();
    let focused = app.state.focus == Section::Contact;
    let form = &app.state.contact_form;

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", bundle.form_title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match form.view() {
        FormView::Pending => {
            draw_pending(frame, inner, bundle.sending, app.spinner_frame());
        }
        FormView::Success => {
            draw_success(
                frame,
                inner,
                bundle.success_message,
                bundle.new_inquiry,
                focused,
            );
        }
        FormView::Input => draw_inputs(frame, inner, form, bundle, focused),
    }
}

fn draw_inputs(
    frame: &mut Frame,
    area: Rect,
    form: &InquiryForm,
    bundle: &LocalizationBundle,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Role selector
            Constraint::Length(3),             // Name | Email
            Constraint::Length(3),             // Phone | City
            Constraint::Min(3),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(2),             // Error banner
        ])
        .split(area);

    let row = form.active_row();
    let is_active = |target: FormRow| focused && row == target;

    // Role selector: the unchosen role is dimmed
    let role_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);
    for (idx, (role, label)) in [
        (UserRole::Farmer, bundle.farmer),
        (UserRole::Dealer, bundle.dealer),
    ]
    .into_iter()
    .enumerate()
    {
        let state = match (form.user_role == role, is_active(FormRow::Role)) {
            (true, true) => ButtonState::Focused,
            (true, false) => ButtonState::Idle,
            (false, _) => ButtonState::Dimmed,
        };
        render_button(frame, role_chunks[idx], label, state);
    }

    for (chunk, kinds) in [
        (chunks[1], [FieldKind::FullName, FieldKind::Email]),
        (chunks[2], [FieldKind::Phone, FieldKind::City]),
    ] {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunk);
        for (column, kind) in columns.iter().zip(kinds) {
            if let Some(field) = form.get_field(kind) {
                draw_field(frame, *column, field, bundle, is_active(FormRow::Field(kind)));
            }
        }
    }

    draw_field(
        frame,
        chunks[3],
        &form.message,
        bundle,
        is_active(FormRow::Field(FieldKind::Message)),
    );

    let submit = if is_active(FormRow::Submit) {
        ButtonState::Focused
    } else {
        ButtonState::Idle
    };
    render_button(frame, chunks[4], bundle.submit, submit);

    draw_error_banner(frame, chunks[5], form.state().failure(), bundle);
}
