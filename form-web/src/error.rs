//! Error types for the form checker.
//!
//! The classifiers themselves never fail: a missing pose is `None` and a
//! partial pose still yields a verdict. Errors only arise where host input
//! is decoded (flat landmark arrays, exercise names, target overrides).

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A specialized `Result` type for host-input decoding.
pub type FormResult<T> = Result<T, FormError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormError {
    /// Flat landmark array has the wrong number of values
    #[error("invalid landmark data length: {actual} (expected 99 or 132)")]
    InvalidFrameLength {
        /// Number of values received
        actual: usize,
    },

    /// Exercise name outside the supported catalogue
    #[error("unknown exercise: '{0}'")]
    UnknownExercise(String),

    /// Classification requested before any exercise was selected
    #[error("no exercise selected")]
    NoExerciseSelected,

    /// Target override document could not be parsed
    #[error("invalid form targets: {0}")]
    InvalidTargets(#[from] serde_json::Error),

    /// Verdict could not be converted for the host
    #[error("failed to serialize verdict: {0}")]
    Serialization(String),
}

impl From<FormError> for JsValue {
    fn from(err: FormError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
