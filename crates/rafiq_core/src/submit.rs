//! Submit collaborator: the seam where a real auth backend plugs in.

use crate::error::SubmissionError;
use crate::validation::{FormKind, FormValues};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// One call per submit action. Futures are not `Send`: the UI runs on a single thread.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, kind: FormKind, values: &FormValues) -> Result<(), SubmissionError>;
}

/// Stand-in backend: waits `delay`, then accepts.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, kind: FormKind, _values: &FormValues) -> Result<(), SubmissionError> {
        debug!(?kind, delay_ms = self.delay.as_millis() as u64, "simulated submit");
        if !self.delay.is_zero() {
            futures_timer::Delay::new(self.delay).await;
        }
        Ok(())
    }
}
