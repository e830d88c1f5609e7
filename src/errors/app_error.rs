use stepchain_core::StepError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error(transparent)]
    Step(#[from] StepError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Código de salida del binario: 2 para configuración, 1 para el resto.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Step(_) | AppError::Serialization(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_variant_format() {
        let err = AppError::Config("mala configuración".into());
        assert_eq!(err.to_string(), "Error de configuración: mala configuración");
    }

    #[test]
    fn test_step_variant_is_transparent() {
        let err: AppError = StepError::AssertionFailed { expected: "10".into(), actual: "9".into() }.into();
        assert_eq!(err.to_string(), "assertion failed: expected 10, actual 9");
        assert!(matches!(err, AppError::Step(ref e) if e.is_assertion()));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::Config("x".into()).exit_code(), 2);
        assert_eq!(AppError::from(StepError::failed("x")).exit_code(), 1);
    }
}
