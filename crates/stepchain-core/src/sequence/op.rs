use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::StepError;
use crate::step::StepKind;

/// Step de una `StepSequence`, etiquetado por su forma.
pub enum StepOp<E = StepError> {
    Action(Box<dyn FnOnce() -> Result<(), E>>),
    Consumer(Box<dyn FnOnce(&Value) -> Result<(), E>>),
    Producer(Box<dyn FnOnce() -> Result<Value, E>>),
    Transform(Box<dyn FnOnce(Value) -> Result<Value, E>>),
}

impl<E> StepOp<E> {
    pub fn action<F>(f: F) -> Self
        where F: FnOnce() -> Result<(), E> + 'static
    {
        StepOp::Action(Box::new(f))
    }

    pub fn consumer<F>(f: F) -> Self
        where F: FnOnce(&Value) -> Result<(), E> + 'static
    {
        StepOp::Consumer(Box::new(f))
    }

    pub fn producer<F>(f: F) -> Self
        where F: FnOnce() -> Result<Value, E> + 'static
    {
        StepOp::Producer(Box::new(f))
    }

    pub fn transform<F>(f: F) -> Self
        where F: FnOnce(Value) -> Result<Value, E> + 'static
    {
        StepOp::Transform(Box::new(f))
    }

    pub fn kind(&self) -> StepKind {
        match self {
            StepOp::Action(_) => StepKind::Action,
            StepOp::Consumer(_) => StepKind::Consumer,
            StepOp::Producer(_) => StepKind::Producer,
            StepOp::Transform(_) => StepKind::Transform,
        }
    }

    /// Aplica el step a `context` y devuelve el contexto siguiente.
    pub fn apply(self, context: Value) -> Result<Value, E> {
        match self {
            StepOp::Action(f) => {
                f()?;
                Ok(context)
            }
            StepOp::Consumer(f) => {
                f(&context)?;
                Ok(context)
            }
            StepOp::Producer(f) => f(),
            StepOp::Transform(f) => f(context),
        }
    }
}

// -------------------------------------------------------------
// Variantes tipadas: (de)serializan el contexto en el borde del step.
// -------------------------------------------------------------
impl<E> StepOp<E> where E: From<serde_json::Error> + 'static
{
    /// Consumer sobre el contexto decodificado como `T`.
    pub fn consumer_typed<T, F>(f: F) -> Self
        where T: DeserializeOwned + 'static,
              F: FnOnce(&T) -> Result<(), E> + 'static
    {
        StepOp::consumer(move |ctx: &Value| {
            let typed = T::deserialize(ctx)?;
            f(&typed)
        })
    }

    /// Producer de un valor serializable.
    pub fn producer_typed<R, F>(f: F) -> Self
        where R: Serialize + 'static,
              F: FnOnce() -> Result<R, E> + 'static
    {
        StepOp::producer(move || Ok(serde_json::to_value(f()?)?))
    }

    /// Transform con entrada `T` y salida `R`, ambos vía serde.
    pub fn transform_typed<T, R, F>(f: F) -> Self
        where T: DeserializeOwned + 'static,
              R: Serialize + 'static,
              F: FnOnce(T) -> Result<R, E> + 'static
    {
        StepOp::transform(move |ctx: Value| {
            let typed: T = serde_json::from_value(ctx)?;
            Ok(serde_json::to_value(f(typed)?)?)
        })
    }
}

impl<E> std::fmt::Debug for StepOp<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StepOp::{}", self.kind())
    }
}
