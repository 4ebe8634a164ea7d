//! Application state and core logic

use crate::config::AppConfig;
use crate::i18n::{Language, Localizer};
use crate::leads::{DispatchError, FormType, SubmissionController};
use crate::relay::{EmailJsRelay, NotificationRelay};
use crate::state::{
    AppState, Form, FormRow, FormSlot, FormView, InquiryForm, LeadForm, NotifyForm, Section,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Result of a relay dispatch, reported back to the event loop
#[derive(Debug)]
pub struct DispatchSettled {
    pub slot: FormSlot,
    pub result: Result<(), DispatchError>,
}

/// What a key press asks the focused form to do
enum FormAction {
    Handled,
    Submit,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// When the page was opened, drives the pending spinner
    started: Instant,
    settled_tx: UnboundedSender<DispatchSettled>,
    settled_rx: UnboundedReceiver<DispatchSettled>,
}

impl App {
    /// Create the app with the EmailJS relay
    pub fn new(config: &AppConfig) -> Result<Self> {
        let relay = EmailJsRelay::new(config.relay_endpoint.clone())?;
        tracing::info!(endpoint = relay.endpoint(), "email relay ready");
        let language = config.initial_language()?;
        let mut app = Self::with_relay(config, Arc::new(relay));
        app.state.localizer = Localizer::new(language);
        Ok(app)
    }

    /// Create the app around any relay implementation
    pub fn with_relay(config: &AppConfig, relay: Arc<dyn NotificationRelay>) -> Self {
        let timeout = config.relay_timeout();
        let hero = NotifyForm::new(
            SubmissionController::new(
                FormType::LaunchNotification,
                config.relay.clone(),
                Arc::clone(&relay),
            )
            .with_timeout(timeout),
        );
        let contact = InquiryForm::new(
            SubmissionController::new(FormType::Inquiry, config.relay.clone(), relay)
                .with_timeout(timeout),
        );
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::new(hero, contact),
            quit: false,
            started: Instant::now(),
            settled_tx,
            settled_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance timers and apply finished dispatches
    pub fn tick(&mut self, terminal_height: u16) {
        self.state.popup.update(terminal_height);
        self.state.carousel.update();
        self.drain_settled();
    }

    /// Whether either form is waiting on the relay
    pub fn has_pending_dispatch(&self) -> bool {
        [FormSlot::Hero, FormSlot::Contact]
            .into_iter()
            .any(|slot| self.state.form(slot).view() == FormView::Pending)
    }

    /// Frame index for the pending spinner
    pub fn spinner_frame(&self) -> usize {
        (self.started.elapsed().as_millis() / 100) as usize
    }

    /// Apply every dispatch result that has arrived
    pub fn drain_settled(&mut self) {
        while let Ok(settled) = self.settled_rx.try_recv() {
            self.state.form_mut(settled.slot).settle(settled.result);
        }
    }

    /// Start an attempt on one form; the relay work runs on its own task
    fn submit(&mut self, slot: FormSlot) {
        let Some(pending) = self.state.form_mut(slot).submit() else {
            return;
        };
        let attempt_id = pending.attempt_id();
        tracing::debug!(
            %attempt_id,
            form = pending.payload().form_type.label(),
            "spawning relay dispatch"
        );
        let tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::spawn(pending.run()).await {
                Ok(result) => result,
                Err(join_err) => Err(DispatchError::TaskFailed(join_err.to_string())),
            };
            if tx.send(DispatchSettled { slot, result }).is_err() {
                tracing::warn!(%attempt_id, "dispatch settled after the page closed");
            }
        });
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Welcome popup is modal while shown
        if self.state.popup.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.popup.dismiss();
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.state.localizer.set_language(Language::En),
            KeyCode::F(2) => self.state.localizer.set_language(Language::Hi),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.localizer.toggle();
            }
            KeyCode::PageUp => self.state.focus = Section::Hero,
            KeyCode::PageDown => self.state.focus = Section::Contact,
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                let slot = self.state.focus.into();
                if self.state.form(slot).view() == FormView::Input {
                    self.submit(slot);
                }
            }
            _ => self.handle_form_key(key),
        }
    }

    /// Handle keys for the form in the focused section
    fn handle_form_key(&mut self, key: KeyEvent) {
        let slot: FormSlot = self.state.focus.into();
        let form = self.state.form_mut(slot);

        let action = match form.view() {
            // Resubmission is disabled until the relay answers
            FormView::Pending => FormAction::Handled,
            FormView::Success => {
                if key.code == KeyCode::Enter {
                    form.new_inquiry();
                }
                FormAction::Handled
            }
            FormView::Input => match key.code {
                KeyCode::Tab => {
                    form.next_field();
                    FormAction::Handled
                }
                KeyCode::BackTab => {
                    form.prev_field();
                    FormAction::Handled
                }
                KeyCode::Left | KeyCode::Right if form.active_row() == FormRow::Role => {
                    form.toggle_role();
                    FormAction::Handled
                }
                KeyCode::Enter => match form.active_row() {
                    FormRow::Role => {
                        form.toggle_role();
                        FormAction::Handled
                    }
                    FormRow::Field(_) if form.is_active_field_multiline() => {
                        form.input_char('\n');
                        FormAction::Handled
                    }
                    FormRow::Field(_) | FormRow::Submit => FormAction::Submit,
                },
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    form.input_char(c);
                    FormAction::Handled
                }
                KeyCode::Backspace => {
                    form.backspace();
                    FormAction::Handled
                }
                _ => FormAction::Handled,
            },
        };

        if let FormAction::Submit = action {
            self.submit(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelayConfig;
    use crate::leads::{SubmissionFailure, SubmissionState, ValidationError};
    use crate::relay::MockNotificationRelay;
    use crate::state::PopupPhase;

    fn ready_config() -> AppConfig {
        AppConfig {
            relay: RelayConfig {
                service_id: "service_test".to_string(),
                admin_template_id: "template_admin".to_string(),
                user_template_id: "template_user".to_string(),
                public_key: "pk_test".to_string(),
            },
            ..Default::default()
        }
    }

    fn app_with_calls(calls: usize) -> App {
        let mut relay = MockNotificationRelay::new();
        relay
            .expect_send()
            .times(calls)
            .returning(|_, _, _, _| Ok(()));
        App::with_relay(&ready_config(), Arc::new(relay))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Wait for the next spawned dispatch and apply it
    async fn settle_next(app: &mut App) {
        let settled = app.settled_rx.recv().await.unwrap();
        app.state.form_mut(settled.slot).settle(settled.result);
    }

    mod keys {
        use super::*;

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = app_with_calls(0);
            assert!(!app.should_quit());
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_language_keys() {
            let mut app = app_with_calls(0);
            press(&mut app, KeyCode::F(2));
            assert_eq!(app.state.localizer.current(), Language::Hi);
            press(&mut app, KeyCode::F(1));
            assert_eq!(app.state.localizer.current(), Language::En);
            app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
            assert_eq!(app.state.localizer.current(), Language::Hi);
        }

        #[tokio::test]
        async fn test_page_keys_move_focus() {
            let mut app = app_with_calls(0);
            press(&mut app, KeyCode::PageDown);
            assert_eq!(app.state.focus, Section::Contact);
            press(&mut app, KeyCode::PageUp);
            assert_eq!(app.state.focus, Section::Hero);
        }

        #[tokio::test]
        async fn test_popup_is_modal() {
            let mut app = app_with_calls(0);
            app.state.popup.phase = PopupPhase::Visible;

            type_text(&mut app, "abc");
            assert!(app.state.hero_form.email.is_empty());

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.popup.phase, PopupPhase::Dismissed);

            type_text(&mut app, "abc");
            assert_eq!(app.state.hero_form.email.as_text(), "abc");
        }

        #[tokio::test]
        async fn test_role_row_toggles_with_arrows() {
            let mut app = app_with_calls(0);
            press(&mut app, KeyCode::PageDown);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.contact_form.active_row(), FormRow::Role);

            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.contact_form.user_role(), crate::leads::UserRole::Dealer);
        }

        #[tokio::test]
        async fn test_enter_in_message_adds_newline() {
            let mut app = app_with_calls(0);
            press(&mut app, KeyCode::PageDown);
            app.state.contact_form.active_field_index = 5;
            type_text(&mut app, "line one");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "line two");
            assert_eq!(app.state.contact_form.message.as_text(), "line one\nline two");
            assert_eq!(app.state.contact_form.state(), SubmissionState::Idle);
        }
    }

    mod submissions {
        use super::*;

        #[tokio::test]
        async fn test_hero_enter_dispatches_and_clears() {
            let mut app = app_with_calls(2);
            type_text(&mut app, "farmer@example.com");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.hero_form.view(), FormView::Pending);
            assert!(app.has_pending_dispatch());

            settle_next(&mut app).await;

            assert!(!app.has_pending_dispatch());
            assert_eq!(app.state.hero_form.state(), SubmissionState::Success);
            assert!(app.state.hero_form.email.is_empty());

            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.hero_form.view(), FormView::Input);
        }

        #[tokio::test]
        async fn test_forms_are_independent() {
            let mut app = app_with_calls(2);
            type_text(&mut app, "farmer@example.com");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.hero_form.view(), FormView::Pending);

            press(&mut app, KeyCode::PageDown);
            type_text(&mut app, "Ramesh");
            assert_eq!(app.state.contact_form.view(), FormView::Input);
            assert_eq!(app.state.contact_form.full_name.as_text(), "Ramesh");

            settle_next(&mut app).await;
            assert_eq!(app.state.hero_form.view(), FormView::Success);
            assert_eq!(app.state.contact_form.state(), SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_pending_form_ignores_resubmit() {
            let mut app = app_with_calls(2);
            type_text(&mut app, "farmer@example.com");
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

            settle_next(&mut app).await;
            assert_eq!(app.state.hero_form.state(), SubmissionState::Success);
        }

        #[tokio::test]
        async fn test_language_switch_relocalizes_error() {
            let mut app = app_with_calls(0);
            press(&mut app, KeyCode::PageDown);
            app.state.contact_form.active_field_index = 2;
            type_text(&mut app, "not-an-email");
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

            let failure = app.state.contact_form.state().failure().unwrap();
            assert_eq!(
                failure,
                SubmissionFailure::Validation(ValidationError::InvalidEmail)
            );
            assert_eq!(
                failure.message(app.state.localizer.bundle()),
                Language::En.bundle().errors.invalid_email
            );

            press(&mut app, KeyCode::F(2));

            assert_eq!(app.state.contact_form.state().failure(), Some(failure));
            assert_eq!(
                failure.message(app.state.localizer.bundle()),
                Language::Hi.bundle().errors.invalid_email
            );
        }

        #[tokio::test]
        async fn test_missing_configuration_surfaces_system_error() {
            let relay = MockNotificationRelay::new();
            let mut app = App::with_relay(&AppConfig::default(), Arc::new(relay));
            type_text(&mut app, "farmer@example.com");
            press(&mut app, KeyCode::Enter);

            assert_eq!(
                app.state.hero_form.state().failure(),
                Some(SubmissionFailure::MissingConfiguration)
            );
            assert_eq!(app.state.hero_form.email.as_text(), "farmer@example.com");
        }

        #[tokio::test]
        async fn test_tick_applies_settled_dispatch() {
            let mut app = app_with_calls(2);
            type_text(&mut app, "farmer@example.com");
            press(&mut app, KeyCode::Enter);

            for _ in 0..50 {
                tokio::task::yield_now().await;
                app.tick(24);
                if app.state.hero_form.view() != FormView::Pending {
                    break;
                }
            }
            assert_eq!(app.state.hero_form.view(), FormView::Success);
        }
    }
}
