//! Steps de longitud de texto.
//!
//! - `StringLength`: el texto se fija al construir el step (producer).
//! - `ContextLength`: mide el contexto actual (transform `S -> usize`).
//!
//! La longitud se cuenta en caracteres, no en bytes.

use stepchain_core::{ProducerStep, StepError, TransformStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLength {
    pub text: String,
}

impl StringLength {
    pub fn of(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl ProducerStep<usize, StepError> for StringLength {
    fn produce(self) -> Result<usize, StepError> {
        Ok(self.len())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextLength;

impl ContextLength {
    pub fn of_context() -> Self {
        Self
    }
}

impl<S: AsRef<str>> TransformStep<S, usize, StepError> for ContextLength {
    fn transform(self, context: S) -> Result<usize, StepError> {
        Ok(context.as_ref().chars().count())
    }
}
