//! Per-form submission controller
//!
//! One attempt runs in two halves so the UI never waits on the relay:
//! [`SubmissionController::begin`] validates, checks the relay credentials
//! and returns a [`PendingDispatch`] that can be spawned onto the runtime;
//! [`SubmissionController::finish`] applies the settled result. The
//! controller owns the form's [`SubmissionState`] and is the only thing that
//! mutates it.

use super::error::{DispatchError, SubmissionFailure};
use super::payload::{FormType, LeadFields, SubmissionPayload};
use super::validation::validate;
use crate::config::{RelayConfig, DEFAULT_RELAY_TIMEOUT};
use crate::relay::NotificationRelay;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Lifecycle of one form's submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmissionFailure),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn failure(&self) -> Option<SubmissionFailure> {
        match self {
            SubmissionState::Error(failure) => Some(*failure),
            _ => None,
        }
    }
}

/// Drives submissions for a single form
pub struct SubmissionController {
    form_type: FormType,
    state: SubmissionState,
    config: RelayConfig,
    relay: Arc<dyn NotificationRelay>,
    timeout: Duration,
    attempt_id: Option<Uuid>,
}

impl fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("form_type", &self.form_type)
            .field("state", &self.state)
            .field("timeout", &self.timeout)
            .field("attempt_id", &self.attempt_id)
            .finish_non_exhaustive()
    }
}

impl SubmissionController {
    pub fn new(form_type: FormType, config: RelayConfig, relay: Arc<dyn NotificationRelay>) -> Self {
        Self {
            form_type,
            state: SubmissionState::Idle,
            config,
            relay,
            timeout: DEFAULT_RELAY_TIMEOUT,
            attempt_id: None,
        }
    }

    /// Bound each relay send by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Validate and prepare an attempt
    ///
    /// Returns `None` when nothing should be dispatched: an attempt is
    /// already in flight, validation failed, or the relay is not configured.
    /// The last two leave the state at `Error`.
    pub fn begin(&mut self, fields: &LeadFields) -> Option<PendingDispatch> {
        if self.state.is_submitting() {
            tracing::warn!(
                form = self.form_type.label(),
                attempt_id = ?self.attempt_id,
                "submit ignored, an attempt is already in flight"
            );
            return None;
        }
        self.state = SubmissionState::Idle;

        let attempt_id = Uuid::new_v4();

        if let Err(err) = validate(self.form_type, fields) {
            tracing::warn!(%attempt_id, form = self.form_type.label(), %err, "submission rejected");
            self.state = SubmissionState::Error(err.into());
            return None;
        }

        if let Err(err) = self.config.ensure_ready() {
            tracing::error!(%attempt_id, form = self.form_type.label(), %err, "relay is not configured");
            self.state = SubmissionState::Error(err.into());
            return None;
        }

        self.state = SubmissionState::Submitting;
        self.attempt_id = Some(attempt_id);

        tracing::info!(%attempt_id, form = self.form_type.label(), "dispatching submission");

        Some(PendingDispatch {
            attempt_id,
            payload: SubmissionPayload::from_fields(self.form_type, fields),
            config: self.config.clone(),
            relay: Arc::clone(&self.relay),
            timeout: self.timeout,
        })
    }

    /// Apply the settled dispatch result
    ///
    /// Returns true when the attempt succeeded and the form should reset its
    /// inputs. Relay failures keep the inputs so the lead can retry.
    pub fn finish(&mut self, result: Result<(), DispatchError>) -> bool {
        if !self.state.is_submitting() {
            tracing::warn!(form = self.form_type.label(), "dispatch settled with no attempt in flight");
            return false;
        }
        let attempt_id = self.attempt_id.take();

        match result {
            Ok(()) => {
                tracing::info!(attempt_id = ?attempt_id, form = self.form_type.label(), "submission delivered");
                self.state = SubmissionState::Success;
                true
            }
            Err(err) => {
                tracing::error!(
                    attempt_id = ?attempt_id,
                    form = self.form_type.label(),
                    error = %err,
                    "submission dispatch failed"
                );
                self.state = SubmissionState::Error(SubmissionFailure::from(&err));
                false
            }
        }
    }

    /// Run a whole attempt inline
    #[allow(dead_code)] // the page spawns begin/run/finish instead
    pub async fn submit(&mut self, fields: &LeadFields) -> bool {
        match self.begin(fields) {
            Some(pending) => {
                let result = pending.run().await;
                self.finish(result)
            }
            None => false,
        }
    }

    /// Leave a terminal state ("new inquiry")
    pub fn dismiss(&mut self) {
        if matches!(self.state, SubmissionState::Success | SubmissionState::Error(_)) {
            self.state = SubmissionState::Idle;
        }
    }
}

/// A validated attempt ready to hit the relay
pub struct PendingDispatch {
    attempt_id: Uuid,
    payload: SubmissionPayload,
    config: RelayConfig,
    relay: Arc<dyn NotificationRelay>,
    timeout: Duration,
}

impl PendingDispatch {
    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }

    /// Send the admin alert and the lead acknowledgment concurrently
    ///
    /// Both sends settle before the result is decided; either failing fails
    /// the attempt.
    pub async fn run(self) -> Result<(), DispatchError> {
        let relay = self.relay.as_ref();
        let admin = send_bounded(
            relay,
            &self.config,
            &self.config.admin_template_id,
            &self.payload,
            self.timeout,
        );
        let user = send_bounded(
            relay,
            &self.config,
            &self.config.user_template_id,
            &self.payload,
            self.timeout,
        );

        match tokio::join!(admin, user) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(admin_err), user_result) => {
                if let Err(user_err) = user_result {
                    tracing::warn!(
                        attempt_id = %self.attempt_id,
                        error = %user_err,
                        "acknowledgment send failed as well"
                    );
                }
                Err(admin_err)
            }
            (Ok(()), Err(user_err)) => Err(user_err),
        }
    }
}

async fn send_bounded(
    relay: &dyn NotificationRelay,
    config: &RelayConfig,
    template_id: &str,
    payload: &SubmissionPayload,
    timeout: Duration,
) -> Result<(), DispatchError> {
    let send = relay.send(&config.service_id, template_id, payload, &config.public_key);
    match tokio::time::timeout(timeout, send).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(source)) => Err(DispatchError::Relay {
            template: template_id.to_string(),
            source,
        }),
        Err(_) => Err(DispatchError::TimedOut {
            template: template_id.to_string(),
            timeout,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{UserRole, ValidationError};
    use crate::relay::{MockNotificationRelay, RelayError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    const ADMIN: &str = "template_admin";
    const USER: &str = "template_user";

    fn ready_config() -> RelayConfig {
        RelayConfig {
            service_id: "service_test".to_string(),
            admin_template_id: ADMIN.to_string(),
            user_template_id: USER.to_string(),
            public_key: "pk_test".to_string(),
        }
    }

    fn inquiry_fields() -> LeadFields {
        LeadFields {
            full_name: "Kiran Shah".to_string(),
            email: "kiran@example.com".to_string(),
            phone: "9510304547".to_string(),
            city: "Petlad".to_string(),
            message: String::new(),
            user_role: UserRole::Dealer,
        }
    }

    type SentCall = (String, String, SubmissionPayload, String);

    /// Mock that records every send and answers from `reply`
    fn recording_relay<F>(expected_calls: usize, reply: F) -> (Arc<Mutex<Vec<SentCall>>>, MockNotificationRelay)
    where
        F: Fn(&str) -> Result<(), RelayError> + Send + 'static,
    {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&sent);
        let mut relay = MockNotificationRelay::new();
        relay
            .expect_send()
            .times(expected_calls)
            .returning(move |service, template, payload, key| {
                log.lock().unwrap().push((
                    service.to_string(),
                    template.to_string(),
                    payload.clone(),
                    key.to_string(),
                ));
                reply(template)
            });
        (sent, relay)
    }

    fn rejected() -> RelayError {
        RelayError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        }
    }

    /// Admin send returns at once; the acknowledgment waits for `release`
    #[derive(Default)]
    struct GatedRelay {
        calls: AtomicUsize,
        release: Notify,
        reject_admin: bool,
    }

    #[async_trait]
    impl NotificationRelay for GatedRelay {
        async fn send(
            &self,
            _service_id: &str,
            template_id: &str,
            _payload: &SubmissionPayload,
            _public_key: &str,
        ) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if template_id == USER {
                self.release.notified().await;
            } else if self.reject_admin {
                return Err(rejected());
            }
            Ok(())
        }
    }

    /// Never answers
    struct SilentRelay;

    #[async_trait]
    impl NotificationRelay for SilentRelay {
        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            _payload: &SubmissionPayload,
            _public_key: &str,
        ) -> Result<(), RelayError> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    mod happy_path {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submission_sends_both_templates() {
            let (sent, relay) = recording_relay(2, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            assert!(controller.submit(&inquiry_fields()).await);
            assert_eq!(controller.state(), SubmissionState::Success);

            let sent = sent.lock().unwrap();
            let mut templates: Vec<&str> = sent.iter().map(|call| call.1.as_str()).collect();
            templates.sort_unstable();
            assert_eq!(templates, vec![ADMIN, USER]);

            for (service, _, payload, key) in sent.iter() {
                assert_eq!(service, "service_test");
                assert_eq!(key, "pk_test");
                assert_eq!(payload, &sent[0].2);
            }
            assert_eq!(sent[0].2.form_type, FormType::Inquiry);
            assert_eq!(sent[0].2.user_role, UserRole::Dealer);
            assert_eq!(sent[0].2.message, "No message provided.");
        }

        #[tokio::test]
        async fn test_begin_enters_submitting() {
            let (_, relay) = recording_relay(0, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            let pending = controller.begin(&inquiry_fields()).unwrap();
            assert_eq!(controller.state(), SubmissionState::Submitting);
            assert_eq!(pending.payload().email, "kiran@example.com");
        }

        #[tokio::test]
        async fn test_waits_for_both_sends_before_settling() {
            let relay = Arc::new(GatedRelay::default());
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), relay.clone());

            let pending = controller.begin(&inquiry_fields()).unwrap();
            let handle = tokio::spawn(pending.run());

            for _ in 0..10 {
                tokio::task::yield_now().await;
            }
            assert_eq!(relay.calls.load(Ordering::SeqCst), 2);
            assert!(!handle.is_finished());
            assert_eq!(controller.state(), SubmissionState::Submitting);

            relay.release.notify_one();
            let result = handle.await.unwrap();
            assert!(controller.finish(result));
            assert_eq!(controller.state(), SubmissionState::Success);
        }

        #[tokio::test]
        async fn test_dismiss_returns_to_idle() {
            let (_, relay) = recording_relay(2, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));
            controller.submit(&inquiry_fields()).await;

            controller.dismiss();
            assert_eq!(controller.state(), SubmissionState::Idle);
        }
    }

    mod rejected_before_dispatch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_email_makes_no_calls() {
            let (_, relay) = recording_relay(0, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            let fields = LeadFields {
                email: "kiran.example.com".to_string(),
                ..inquiry_fields()
            };
            assert!(!controller.submit(&fields).await);
            assert_eq!(
                controller.state(),
                SubmissionState::Error(SubmissionFailure::Validation(ValidationError::InvalidEmail))
            );
        }

        #[tokio::test]
        async fn test_invalid_phone_makes_no_calls() {
            let (_, relay) = recording_relay(0, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            let fields = LeadFields {
                phone: "12345".to_string(),
                ..inquiry_fields()
            };
            assert!(controller.begin(&fields).is_none());
            assert_eq!(
                controller.state().failure(),
                Some(SubmissionFailure::Validation(ValidationError::InvalidPhone))
            );
        }

        #[tokio::test]
        async fn test_missing_configuration_makes_no_calls() {
            let (_, relay) = recording_relay(0, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, RelayConfig::default(), Arc::new(relay));

            assert!(!controller.submit(&inquiry_fields()).await);
            assert_eq!(
                controller.state(),
                SubmissionState::Error(SubmissionFailure::MissingConfiguration)
            );
        }

        #[tokio::test]
        async fn test_unresolved_placeholder_makes_no_calls() {
            let (_, relay) = recording_relay(0, |_| Ok(()));
            let config = RelayConfig {
                service_id: "undefined".to_string(),
                ..ready_config()
            };
            let mut controller =
                SubmissionController::new(FormType::LaunchNotification, config, Arc::new(relay));

            let fields = LeadFields {
                email: "farmer@example.com".to_string(),
                ..Default::default()
            };
            assert!(!controller.submit(&fields).await);
            assert_eq!(
                controller.state().failure(),
                Some(SubmissionFailure::MissingConfiguration)
            );
        }

        #[tokio::test]
        async fn test_duplicate_begin_is_refused() {
            let (_, relay) = recording_relay(0, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            let first = controller.begin(&inquiry_fields());
            assert!(first.is_some());
            assert!(controller.begin(&inquiry_fields()).is_none());
            assert_eq!(controller.state(), SubmissionState::Submitting);
        }

        #[tokio::test]
        async fn test_retry_after_error_clears_error_slot() {
            let (_, relay) = recording_relay(2, |_| Ok(()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            let bad = LeadFields {
                email: String::new(),
                ..inquiry_fields()
            };
            controller.submit(&bad).await;
            assert!(controller.state().failure().is_some());

            assert!(controller.submit(&inquiry_fields()).await);
            assert_eq!(controller.state(), SubmissionState::Success);
        }
    }

    mod relay_failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_one_rejection_fails_attempt_after_both_calls() {
            let (sent, relay) =
                recording_relay(2, |template| if template == USER { Err(rejected()) } else { Ok(()) });
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            assert!(!controller.submit(&inquiry_fields()).await);
            assert_eq!(
                controller.state(),
                SubmissionState::Error(SubmissionFailure::RelayRejected)
            );
            assert_eq!(sent.lock().unwrap().len(), 2);
        }

        #[tokio::test]
        async fn test_rejection_settles_only_after_other_send() {
            let relay = Arc::new(GatedRelay {
                reject_admin: true,
                ..Default::default()
            });
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), relay.clone());

            let pending = controller.begin(&inquiry_fields()).unwrap();
            let handle = tokio::spawn(pending.run());

            for _ in 0..10 {
                tokio::task::yield_now().await;
            }
            assert_eq!(relay.calls.load(Ordering::SeqCst), 2);
            assert!(!handle.is_finished());
            assert_eq!(controller.state(), SubmissionState::Submitting);

            relay.release.notify_one();
            let result = handle.await.unwrap();
            assert!(matches!(
                result,
                Err(DispatchError::Relay { ref template, .. }) if template == ADMIN
            ));
            assert!(!controller.finish(result));
            assert_eq!(
                controller.state(),
                SubmissionState::Error(SubmissionFailure::RelayRejected)
            );
        }

        #[tokio::test]
        async fn test_both_rejections_fail_attempt() {
            let (_, relay) = recording_relay(2, |_| Err(rejected()));
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            let pending = controller.begin(&inquiry_fields()).unwrap();
            let result = pending.run().await;
            assert!(matches!(
                result,
                Err(DispatchError::Relay { ref template, .. }) if template == ADMIN
            ));
            assert!(!controller.finish(result));
            assert_eq!(controller.state().failure(), Some(SubmissionFailure::RelayRejected));
        }

        #[tokio::test]
        async fn test_silent_relay_times_out() {
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(SilentRelay))
                    .with_timeout(Duration::from_millis(20));

            let pending = controller.begin(&inquiry_fields()).unwrap();
            let result = pending.run().await;
            let Err(err @ DispatchError::TimedOut { .. }) = &result else {
                panic!("expected a timeout, got {result:?}");
            };
            assert!(err.to_string().contains("20ms"), "{err}");

            controller.finish(result);
            assert_eq!(controller.state().failure(), Some(SubmissionFailure::RelayRejected));
        }

        #[test]
        fn test_finish_without_attempt_is_ignored() {
            let relay = MockNotificationRelay::new();
            let mut controller =
                SubmissionController::new(FormType::Inquiry, ready_config(), Arc::new(relay));

            assert!(!controller.finish(Ok(())));
            assert_eq!(controller.state(), SubmissionState::Idle);
        }
    }
}
