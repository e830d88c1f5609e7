use serde::{Deserialize, Serialize};

/// Contexto inicial explícito de una cadena creada sin valor.
///
/// Se serializa como `null`, lo mismo que el contexto inicial de
/// `StepSequence::run_from_empty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Empty;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_serializes_as_null() {
        assert_eq!(serde_json::to_value(Empty).unwrap(), serde_json::Value::Null);
        let back: Empty = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(back, Empty);
    }
}
