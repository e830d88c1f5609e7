//! stepchain-steps: steps objeto reutilizables
//!
//! Cada step fija sus parámetros al construirse y expone una única operación
//! con una de las cuatro formas del core:
//! - `RandomString` (producer): cadena aleatoria de longitud fija.
//! - `Sleep` (action): bloquea el hilo actual durante una duración.
//! - `StringLength` (producer) y `ContextLength` (transform): longitud en
//!   caracteres de un texto fijo o del contexto.
//! - `AssertEquals` (consumer): falla si el contexto difiere del valor esperado.

pub mod steps;

pub use steps::assert::AssertEquals;
pub use steps::length::{ContextLength, StringLength};
pub use steps::random::RandomString;
pub use steps::sleep::Sleep;
