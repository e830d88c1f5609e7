//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad de un solo propósito con sus parámetros fijados al
//! construirla. Según cómo trate el contexto de la cadena tiene una de cuatro
//! formas:
//! - `ActionStep`: no lee ni reemplaza el contexto.
//! - `ConsumerStep<T>`: lee el contexto sin cambiarlo.
//! - `ProducerStep<R>`: ignora el contexto y lo reemplaza por un `R`.
//! - `TransformStep<T, R>`: lee el contexto y lo reemplaza por un `R`.
//!
//! Las closures con la firma correspondiente implementan los traits
//! automáticamente, así que un step objeto y una closure son intercambiables.

mod kind;
mod shapes;

pub use kind::StepKind;
pub use shapes::{ActionStep, ConsumerStep, ProducerStep, TransformStep};
