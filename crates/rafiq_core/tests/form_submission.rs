//! Form lifecycle: eager error clearing, submit guard, collaborator outcomes.

use async_trait::async_trait;
use rafiq_core::{
    Field, FormKind, FormState, FormValues, SimulatedSubmitter, Submission, SubmissionError,
    SubmitRejected, Submitter,
};
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Resolves immediately with a fixed outcome and counts calls.
struct StubSubmitter {
    outcome: Result<(), SubmissionError>,
    calls: Cell<usize>,
    last: RefCell<Option<FormValues>>,
}

impl StubSubmitter {
    fn ok() -> Self {
        Self::with(Ok(()))
    }

    fn failing() -> Self {
        Self::with(Err(SubmissionError::Rejected("bad credentials".into())))
    }

    fn with(outcome: Result<(), SubmissionError>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }
}

#[async_trait(?Send)]
impl Submitter for StubSubmitter {
    async fn submit(&self, _kind: FormKind, values: &FormValues) -> Result<(), SubmissionError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(values.clone());
        self.outcome.clone()
    }
}

fn filled_login() -> FormState {
    let mut form = FormState::new(FormKind::Login);
    form.set_text(Field::Email, "student@rafiq.education");
    form.set_text(Field::Password, "secret1");
    form
}

fn filled_signup() -> FormState {
    let mut form = FormState::new(FormKind::Signup);
    form.set_text(Field::FirstName, "Jennifer");
    form.set_text(Field::LastName, "Park");
    form.set_text(Field::Email, "jen@example.com");
    form.set_text(Field::Username, "jen_park");
    form.set_text(Field::Password, "Abcdef1!");
    form.set_text(Field::ConfirmPassword, "Abcdef1!");
    form.set_flag(Field::AgreeToTerms, true);
    form.set_flag(Field::AgreeToPrivacy, true);
    form
}

#[test]
fn new_form_is_blank_and_idle() {
    let form = FormState::new(FormKind::Signup);
    assert_eq!(form.submission(), Submission::Idle);
    assert!(form.errors().is_empty());
    assert_eq!(form.text(Field::Email), "");
    assert!(!form.flag(Field::AgreeToTerms));
}

#[test]
fn editing_clears_that_fields_error_even_if_still_invalid() {
    let mut form = FormState::new(FormKind::Login);
    assert!(!form.validate());
    assert!(form.error(Field::Email).is_some());
    assert!(form.error(Field::Password).is_some());

    form.set_text(Field::Email, "still-not-an-email");
    assert_eq!(form.error(Field::Email), None);
    assert_eq!(form.error(Field::Password), Some("Password is required"));

    assert!(!form.validate());
    assert_eq!(form.error(Field::Email), Some("Please enter a valid email address"));
}

#[test]
fn invalid_submit_only_touches_errors() {
    let mut form = FormState::new(FormKind::Login);
    form.set_text(Field::Email, "nope");

    let rejected = form.begin_submit().unwrap_err();
    assert!(matches!(rejected, SubmitRejected::Invalid(ref e) if e.len() == 2));
    assert_eq!(form.submission(), Submission::Idle);
    assert_eq!(form.text(Field::Email), "nope");
}

#[tokio::test]
async fn invalid_submit_never_calls_collaborator() {
    let stub = StubSubmitter::ok();
    let mut form = filled_signup();
    form.set_flag(Field::AgreeToTerms, false);

    let state = form.submit(&stub).await;

    assert_eq!(state, Submission::Idle);
    assert_eq!(stub.calls.get(), 0);
    let fields: Vec<_> = form.errors().keys().copied().collect();
    assert_eq!(fields, vec![Field::AgreeToTerms]);
}

#[tokio::test]
async fn valid_signup_succeeds() {
    let stub = StubSubmitter::ok();
    let mut form = filled_signup();

    let state = form.submit(&stub).await;

    assert_eq!(state, Submission::Succeeded);
    assert!(form.is_succeeded());
    assert_eq!(stub.calls.get(), 1);
    let sent = stub.last.borrow().clone().unwrap();
    assert_eq!(sent.text(Field::Username), "jen_park");
    assert!(sent.flag(Field::AgreeToPrivacy));
}

#[tokio::test]
async fn second_submit_while_submitting_is_ignored() {
    let stub = StubSubmitter::ok();
    let mut form = filled_login();

    let snapshot = form.begin_submit().unwrap();
    assert_eq!(snapshot.text(Field::Email), "student@rafiq.education");
    assert!(form.is_busy());

    assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
    assert_eq!(form.submit(&stub).await, Submission::Submitting);
    assert_eq!(stub.calls.get(), 0);

    form.finish_submit(Ok(()));
    assert_eq!(form.submission(), Submission::Succeeded);
}

#[tokio::test]
async fn failure_sets_general_error_and_keeps_values() {
    let stub = StubSubmitter::failing();
    let mut form = filled_login();

    let state = form.submit(&stub).await;

    assert_eq!(state, Submission::Failed);
    assert_eq!(
        form.general_error(),
        Some("Invalid email or password. Please try again.")
    );
    assert_eq!(form.text(Field::Email), "student@rafiq.education");
    assert_eq!(form.text(Field::Password), "secret1");
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn failed_form_can_resubmit() {
    let mut form = filled_signup();
    form.submit(&StubSubmitter::failing()).await;
    assert_eq!(
        form.general_error(),
        Some("Registration failed. Please try again.")
    );

    let retry = StubSubmitter::ok();
    assert_eq!(form.submit(&retry).await, Submission::Succeeded);
    assert_eq!(form.general_error(), None);
    assert_eq!(retry.calls.get(), 1);
}

#[tokio::test]
async fn simulated_submitter_waits_then_accepts() {
    let submitter = SimulatedSubmitter::new(Duration::from_millis(20));
    let mut form = filled_login();

    let started = std::time::Instant::now();
    assert_eq!(form.submit(&submitter).await, Submission::Succeeded);
    assert!(started.elapsed() >= Duration::from_millis(20));
    assert_eq!(SimulatedSubmitter::default().delay(), Duration::from_secs(2));
}
