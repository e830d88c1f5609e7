//! Errores del core. `StepError` es el tipo por defecto de `StepChain`; un
//! caller puede usar su propio tipo vía `StepChain::<_, MiError>`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepError {
    #[error("assertion failed: expected {expected}, actual {actual}")] AssertionFailed { expected: String, actual: String },
    #[error("step failed: {0}")] Failed(String),
    #[error("serialization: {0}")] Serialization(#[from] serde_json::Error),
}

impl StepError {
    /// Atajo para `StepError::Failed`.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }
}
