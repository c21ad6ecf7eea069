//! Rafiq client core: theme persistence, form validation and submission state.
//! No UI dependency; the Dioxus frontend drives these types.

pub mod config;
pub mod error;
pub mod form;
pub mod storage;
pub mod submit;
pub mod theme;
pub mod validation;

pub use config::Config;
pub use error::{ParseThemeError, StorageError, SubmissionError};
pub use form::{FormState, Submission, SubmitRejected};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use submit::{SimulatedSubmitter, Submitter};
pub use theme::{resolve_theme, SubscriptionId, Theme, ThemeStore, ThemeSurface};
pub use validation::{validate, ErrorMap, Field, FieldValue, FormKind, FormValues};
