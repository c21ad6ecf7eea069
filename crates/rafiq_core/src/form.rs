//! Per-screen form state: values, field errors and the submission lifecycle.

use crate::error::SubmissionError;
use crate::submit::Submitter;
use crate::validation::{validate, ErrorMap, Field, FormKind, FormValues};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("{} field(s) invalid", .0.len())]
    Invalid(ErrorMap),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    kind: FormKind,
    values: FormValues,
    errors: ErrorMap,
    submission: Submission,
    general_error: Option<String>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: FormValues::blank(kind),
            errors: ErrorMap::new(),
            submission: Submission::Idle,
            general_error: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn text(&self, field: Field) -> &str {
        self.values.text(field)
    }

    pub fn flag(&self, field: Field) -> bool {
        self.values.flag(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.submission == Submission::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.submission == Submission::Succeeded
    }

    /// Editing a field drops its error whether or not the new value is valid.
    /// Errors only come back through a full re-submit.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.values.set_text(field, value);
        self.errors.remove(&field);
    }

    pub fn set_flag(&mut self, field: Field, value: bool) {
        self.values.set_flag(field, value);
        self.errors.remove(&field);
    }

    /// Full pass; replaces the whole error map. True when nothing failed.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(self.kind, &self.values);
        self.errors.is_empty()
    }

    /// First half of a submit. On success the form is `Submitting` and the returned snapshot
    /// goes to the collaborator. Invalid input leaves the lifecycle untouched.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitRejected> {
        if self.is_busy() {
            debug!(kind = ?self.kind, "submit ignored: already submitting");
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if !self.validate() {
            debug!(kind = ?self.kind, invalid = self.errors.len(), "submit blocked by validation");
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }
        self.submission = Submission::Submitting;
        self.general_error = None;
        Ok(self.values.clone())
    }

    /// Second half of a submit. Field values are kept on failure.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        match outcome {
            Ok(()) => {
                info!(kind = ?self.kind, "submit succeeded");
                self.submission = Submission::Succeeded;
            }
            Err(e) => {
                warn!(kind = ?self.kind, error = %e, "submit failed");
                self.submission = Submission::Failed;
                self.general_error = Some(self.failure_message().to_string());
            }
        }
    }

    pub async fn submit(&mut self, submitter: &dyn Submitter) -> Submission {
        let snapshot = match self.begin_submit() {
            Ok(s) => s,
            Err(_) => return self.submission,
        };
        let outcome = submitter.submit(self.kind, &snapshot).await;
        self.finish_submit(outcome);
        self.submission
    }

    fn failure_message(&self) -> &'static str {
        match self.kind {
            FormKind::Login => "Invalid email or password. Please try again.",
            FormKind::Signup => "Registration failed. Please try again.",
        }
    }
}
