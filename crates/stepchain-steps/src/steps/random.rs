//! RandomString (Producer)
//!
//! Genera `length` caracteres hexadecimales en minúscula tomados de UUIDs v4.
//! Cuando se piden más de 32 caracteres se concatenan UUIDs adicionales.

use log::trace;
use stepchain_core::{ProducerStep, StepError};
use uuid::Uuid;

const HEX_PER_UUID: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomString {
    pub length: usize,
}

impl RandomString {
    pub fn of_length(length: usize) -> Self {
        Self { length }
    }

    /// Genera el valor sin pasar por una `StepChain`. Si no se puede reservar
    /// memoria para `length` caracteres devuelve `StepError::Failed`.
    pub fn generate(&self) -> Result<String, StepError> {
        let mut out = String::new();
        out.try_reserve_exact(self.length)
           .map_err(|e| StepError::failed(format!("random string of {} chars: {e}", self.length)))?;
        while out.len() < self.length {
            let chunk = Uuid::new_v4().simple().to_string();
            let take = (self.length - out.len()).min(HEX_PER_UUID);
            out.push_str(&chunk[..take]);
        }
        trace!("random string generated (len={})", self.length);
        Ok(out)
    }
}

impl ProducerStep<String, StepError> for RandomString {
    fn produce(self) -> Result<String, StepError> {
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(RandomString::of_length(0).generate().unwrap(), "");
    }

    #[test]
    fn long_strings_span_several_uuids() {
        let s = RandomString::of_length(70).generate().unwrap();
        assert_eq!(s.len(), 70);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn two_draws_differ() {
        let gen = RandomString::of_length(16);
        assert_ne!(gen.generate().unwrap(), gen.generate().unwrap());
    }

    #[test]
    fn unreservable_length_fails_instead_of_aborting() {
        let err = RandomString::of_length(usize::MAX).produce().unwrap_err();
        assert!(matches!(err, StepError::Failed(ref msg) if msg.starts_with("random string of")));
    }
}
