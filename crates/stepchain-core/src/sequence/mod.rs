//! Secuencia dinámica de steps.
//!
//! Alternativa a `StepChain` cuando la lista de steps se arma en runtime: el
//! contexto es un `serde_json::Value` y cada step es un `StepOp` (unión
//! etiquetada de las cuatro formas). Las reglas son las mismas: orden
//! estricto de inserción y corte en el primer error.

mod op;

pub use op::StepOp;

use serde_json::Value;

use crate::errors::StepError;
use crate::step::{StepKind, TransformStep};

/// Lista ordenada de `StepOp` ejecutable sobre un contexto JSON.
pub struct StepSequence<E = StepError> {
    ops: Vec<StepOp<E>>,
}

impl StepSequence {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }
}

impl<E> Default for StepSequence<E> {
    fn default() -> Self {
        Self { ops: Vec::new() }
    }
}

impl<E> StepSequence<E> {
    /// Añade un step al final (estilo builder).
    pub fn then(mut self, op: StepOp<E>) -> Self {
        self.ops.push(op);
        self
    }

    pub fn push(&mut self, op: StepOp<E>) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Formas de los steps en orden de ejecución.
    pub fn kinds(&self) -> Vec<StepKind> {
        self.ops.iter().map(StepOp::kind).collect()
    }

    /// Ejecuta todos los steps en orden a partir de `initial`. El primer
    /// error se devuelve sin ejecutar los steps restantes.
    pub fn run(self, initial: Value) -> Result<Value, E> {
        self.ops.into_iter().try_fold(initial, |context, op| op.apply(context))
    }

    /// Igual que `run` partiendo del contexto vacío (`null`).
    pub fn run_from_empty(self) -> Result<Value, E> {
        self.run(Value::Null)
    }
}

impl<E> FromIterator<StepOp<E>> for StepSequence<E> {
    fn from_iter<I: IntoIterator<Item = StepOp<E>>>(iter: I) -> Self {
        Self { ops: iter.into_iter().collect() }
    }
}

/// Una secuencia completa se comporta como un único transform dentro de una
/// `StepChain<Value, E>`.
impl<E> TransformStep<Value, Value, E> for StepSequence<E> {
    fn transform(self, context: Value) -> Result<Value, E> {
        self.run(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_sequence_returns_initial() {
        let seq = StepSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.run(json!({"k": 1})).unwrap(), json!({"k": 1}));
    }

    #[test]
    fn collects_from_iterator() {
        let seq: StepSequence = (1..=3).map(|i| StepOp::transform(move |v| Ok(json!(v.as_i64().unwrap_or(0) + i))))
                                       .collect();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.run(json!(0)).unwrap(), json!(6));
    }
}
