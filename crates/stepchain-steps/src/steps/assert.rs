//! AssertEquals (Consumer)
//!
//! Compara el contexto con un valor esperado fijado al construir el step y
//! devuelve `StepError::AssertionFailed` cuando difieren. El error corta la
//! cadena como cualquier otro fallo de step.

use std::fmt::Debug;

use log::debug;
use stepchain_core::{ConsumerStep, StepError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertEquals<T> {
    pub expected: T,
}

impl<T> AssertEquals<T> {
    pub fn new(expected: T) -> Self {
        Self { expected }
    }
}

impl<T, A> ConsumerStep<A, StepError> for AssertEquals<T>
    where T: Debug,
          A: PartialEq<T> + Debug
{
    fn accept(self, context: &A) -> Result<(), StepError> {
        debug!("assert equals: expected={:?} actual={:?}", self.expected, context);
        if *context == self.expected {
            Ok(())
        } else {
            Err(StepError::AssertionFailed { expected: format!("{:?}", self.expected),
                                             actual: format!("{context:?}") })
        }
    }
}
