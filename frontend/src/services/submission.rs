//! Contact form submission: status tracking and the relay seam.
//!
//! [`SubmissionStatus`] is a four-state machine driven by [`SubmissionStatus::begin`],
//! [`SubmissionStatus::resolve`] and [`SubmissionStatus::reset`]. The network call
//! itself sits behind [`FormRelay`] so the flow can run against an in-memory
//! relay in tests.

use crate::config::{
    RelayConfig, FORM_UNAVAILABLE_MESSAGE, NETWORK_ERROR_MESSAGE, REJECTED_FALLBACK_MESSAGE,
};
use crate::types::{AppResult, ContactFormInput, RelayOutcome, RelayResponse};

// =============================================================================
// Status
// =============================================================================

/// Status of the contact form.
///
/// ```text
/// Idle ──begin──▶ Submitting ──Accepted──▶ Succeeded ──reset──▶ Idle
///                   ▲      └──Rejected/TransportError──▶ Failed
///                   └──────────────begin───────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Failed { .. })
    }

    /// Error text, empty unless the last attempt failed.
    pub fn error_message(&self) -> &str {
        match self {
            SubmissionStatus::Failed { message } => message.as_str(),
            _ => "",
        }
    }

    /// Enter `Submitting`, dropping any previous error.
    pub fn begin(&mut self) {
        *self = SubmissionStatus::Submitting;
    }

    /// Apply the outcome of an attempt. Returns `true` when the form
    /// fields should be cleared.
    pub fn resolve(&mut self, outcome: RelayOutcome) -> bool {
        match outcome {
            RelayOutcome::Accepted => {
                *self = SubmissionStatus::Succeeded;
                true
            }
            RelayOutcome::Rejected { message }
            | RelayOutcome::TransportError { message }
            | RelayOutcome::Unconfigured { message } => {
                *self = SubmissionStatus::Failed { message };
                false
            }
        }
    }

    /// Clear success and error. An in-flight submission is left alone.
    pub fn reset(&mut self) {
        if !self.is_submitting() {
            *self = SubmissionStatus::Idle;
        }
    }
}

// =============================================================================
// Relay
// =============================================================================

/// Body sent to the relay: the form's named fields plus `access_key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayPayload {
    pub fields: Vec<(&'static str, String)>,
}

impl RelayPayload {
    pub fn new(input: &ContactFormInput, access_key: &str) -> Self {
        let mut fields: Vec<(&'static str, String)> = input
            .fields()
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect();
        fields.push(("access_key", access_key.to_string()));
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Something that can deliver a payload to the form relay and return its
/// parsed answer. Transport and decode failures come back as `Err`.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn post(&self, payload: &RelayPayload) -> AppResult<RelayResponse>;
}

/// Turn the relay's answer into an outcome.
pub fn classify(result: AppResult<RelayResponse>) -> RelayOutcome {
    match result {
        Ok(RelayResponse { success: true, .. }) => RelayOutcome::Accepted,
        Ok(RelayResponse { success: false, message }) => RelayOutcome::Rejected {
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
        },
        Err(e) => {
            log::error!("❌ Form relay unreachable: {}", e);
            RelayOutcome::TransportError {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

/// Send one contact form submission. Makes exactly one relay call and
/// never retries.
pub async fn submit_contact<R: FormRelay>(
    relay: &R,
    input: &ContactFormInput,
    access_key: &str,
) -> RelayOutcome {
    let payload = RelayPayload::new(input, access_key);
    log::info!("📨 Sending contact request ({} fields)", payload.fields.len());

    let outcome = classify(relay.post(&payload).await);
    match &outcome {
        RelayOutcome::Accepted => log::info!("✅ Contact request accepted"),
        RelayOutcome::Rejected { message } => log::warn!("⚠️  Relay rejected request: {}", message),
        RelayOutcome::TransportError { .. } | RelayOutcome::Unconfigured { .. } => {}
    }
    outcome
}

/// The form a submission reads its values from and clears on success.
pub trait FormFields {
    fn read(&self) -> AppResult<ContactFormInput>;
    fn clear(&self);
}

/// One full attempt: check configuration, read the form, send it, and clear
/// the form if the relay accepted it. No request goes out without a key.
pub async fn run_submission<F: FormFields, R: FormRelay>(
    form: &F,
    config: AppResult<RelayConfig>,
    relay: &R,
) -> RelayOutcome {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            return RelayOutcome::Unconfigured {
                message: FORM_UNAVAILABLE_MESSAGE.to_string(),
            };
        }
    };

    let input = match form.read() {
        Ok(input) => input,
        Err(e) => {
            log::error!("❌ {}", e);
            return RelayOutcome::TransportError {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            };
        }
    };

    let outcome = submit_contact(relay, &input, &config.access_key).await;
    if outcome == RelayOutcome::Accepted {
        form.clear();
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Relay double: answers with a canned result and records payloads.
    struct StubRelay {
        answer: AppResult<RelayResponse>,
        sent: RefCell<Vec<RelayPayload>>,
    }

    impl StubRelay {
        fn answering(answer: AppResult<RelayResponse>) -> Self {
            Self { answer, sent: RefCell::new(Vec::new()) }
        }
    }

    impl FormRelay for StubRelay {
        async fn post(&self, payload: &RelayPayload) -> AppResult<RelayResponse> {
            self.sent.borrow_mut().push(payload.clone());
            self.answer.clone()
        }
    }

    /// Form double: hands out fixed values and remembers being cleared.
    struct FakeForm {
        values: AppResult<ContactFormInput>,
        cleared: Cell<bool>,
    }

    impl FakeForm {
        fn filled() -> Self {
            Self { values: Ok(input()), cleared: Cell::new(false) }
        }
    }

    impl FormFields for FakeForm {
        fn read(&self) -> AppResult<ContactFormInput> {
            self.values.clone()
        }

        fn clear(&self) {
            self.cleared.set(true);
        }
    }

    fn config() -> AppResult<RelayConfig> {
        RelayConfig::from_sources(Some("key-123"), None)
    }

    fn input() -> ContactFormInput {
        ContactFormInput {
            name: "Иван Иванов".into(),
            phone: "+7 (900) 123-45-67".into(),
            email: String::new(),
            message: "Две скумбрии".into(),
        }
    }

    /// Drive a full attempt the way the form handler does.
    fn run(relay: &StubRelay, status: &mut SubmissionStatus) -> bool {
        status.begin();
        assert!(status.is_submitting());
        let outcome = block_on(submit_contact(relay, &input(), "key-123"));
        status.resolve(outcome)
    }

    fn assert_exclusive(status: &SubmissionStatus) {
        assert!(!(status.is_success() && status.is_error()));
    }

    #[test]
    fn test_success_clears_fields() {
        let relay = StubRelay::answering(Ok(RelayResponse { success: true, message: None }));
        let mut status = SubmissionStatus::default();

        let clear = run(&relay, &mut status);

        assert!(clear);
        assert_eq!(status, SubmissionStatus::Succeeded);
        assert!(!status.is_submitting());
        assert!(!status.is_error());
        assert_eq!(status.error_message(), "");
        assert_exclusive(&status);
    }

    #[test]
    fn test_transport_failure() {
        let relay = StubRelay::answering(Err(AppError::Network("connection refused".into())));
        let mut status = SubmissionStatus::default();

        let clear = run(&relay, &mut status);

        assert!(!clear);
        assert!(status.is_error());
        assert!(!status.is_success());
        assert!(!status.is_submitting());
        assert_eq!(status.error_message(), NETWORK_ERROR_MESSAGE);
        assert_exclusive(&status);
    }

    #[test]
    fn test_timeout_and_decode_are_transport_failures() {
        for err in [AppError::Timeout(20_000), AppError::Decode("<html>".into())] {
            let relay = StubRelay::answering(Err(err));
            let mut status = SubmissionStatus::default();
            run(&relay, &mut status);
            assert_eq!(status.error_message(), NETWORK_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_rejection_uses_server_message() {
        let relay = StubRelay::answering(Ok(RelayResponse {
            success: false,
            message: Some("invalid key".into()),
        }));
        let mut status = SubmissionStatus::default();

        run(&relay, &mut status);

        assert_eq!(status, SubmissionStatus::Failed { message: "invalid key".into() });
        assert!(status.is_error());
    }

    #[test]
    fn test_rejection_without_message_falls_back() {
        for message in [None, Some(String::new())] {
            let relay = StubRelay::answering(Ok(RelayResponse { success: false, message }));
            let mut status = SubmissionStatus::default();
            run(&relay, &mut status);
            assert_eq!(status.error_message(), REJECTED_FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_single_call_with_access_key() {
        let relay = StubRelay::answering(Err(AppError::Network("down".into())));
        let mut status = SubmissionStatus::default();
        run(&relay, &mut status);

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].get("access_key"), Some("key-123"));
        assert_eq!(sent[0].get("name"), Some("Иван Иванов"));
        assert_eq!(sent[0].get("email"), Some(""));
    }

    #[test]
    fn test_resubmit_from_error() {
        let mut status = SubmissionStatus::Failed { message: "boom".into() };
        status.begin();
        assert_eq!(status, SubmissionStatus::Submitting);
        assert!(!status.is_error());
        assert_eq!(status.error_message(), "");
    }

    #[test]
    fn test_reset() {
        let mut succeeded = SubmissionStatus::Succeeded;
        succeeded.reset();
        assert_eq!(succeeded, SubmissionStatus::Idle);

        let mut failed = SubmissionStatus::Failed { message: "x".into() };
        failed.reset();
        assert_eq!(failed, SubmissionStatus::Idle);
        assert_eq!(failed.error_message(), "");

        let mut submitting = SubmissionStatus::Submitting;
        submitting.reset();
        assert!(submitting.is_submitting());
    }

    #[test]
    fn test_payload_order() {
        let payload = RelayPayload::new(&input(), "k");
        let names: Vec<_> = payload.fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["name", "phone", "email", "message", "access_key"]);
    }

    #[test]
    fn test_whitespace_message_is_kept() {
        let outcome = classify(Ok(RelayResponse { success: false, message: Some("  ".into()) }));
        assert_eq!(outcome, RelayOutcome::Rejected { message: "  ".into() });
    }

    #[test]
    fn test_missing_key_sends_nothing() {
        let relay = StubRelay::answering(Ok(RelayResponse { success: true, message: None }));
        let form = FakeForm::filled();
        let mut status = SubmissionStatus::default();
        status.begin();

        let outcome = block_on(run_submission(&form, RelayConfig::from_sources(None, None), &relay));
        assert!(matches!(outcome, RelayOutcome::Unconfigured { .. }));
        status.resolve(outcome);

        assert_eq!(status, SubmissionStatus::Failed { message: FORM_UNAVAILABLE_MESSAGE.into() });
        assert!(relay.sent.borrow().is_empty());
        assert!(!form.cleared.get());
    }

    #[test]
    fn test_accepted_submission_clears_form() {
        let relay = StubRelay::answering(Ok(RelayResponse { success: true, message: None }));
        let form = FakeForm::filled();

        let outcome = block_on(run_submission(&form, config(), &relay));

        assert_eq!(outcome, RelayOutcome::Accepted);
        assert!(form.cleared.get());
        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(relay.sent.borrow()[0].get("access_key"), Some("key-123"));
    }

    #[test]
    fn test_failed_submission_keeps_form() {
        let relay = StubRelay::answering(Ok(RelayResponse {
            success: false,
            message: Some("invalid key".into()),
        }));
        let form = FakeForm::filled();

        let outcome = block_on(run_submission(&form, config(), &relay));

        assert_eq!(outcome, RelayOutcome::Rejected { message: "invalid key".into() });
        assert!(!form.cleared.get());
    }

    #[test]
    fn test_unreadable_form_is_transport_error() {
        let relay = StubRelay::answering(Ok(RelayResponse { success: true, message: None }));
        let form = FakeForm {
            values: Err(AppError::Dom("detached".into())),
            cleared: Cell::new(false),
        };

        let outcome = block_on(run_submission(&form, config(), &relay));

        assert_eq!(outcome.message(), Some(NETWORK_ERROR_MESSAGE));
        assert!(relay.sent.borrow().is_empty());
    }
}
