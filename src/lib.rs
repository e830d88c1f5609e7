//! stepchain Rust Library
//!
//! Este crate agrupa lo que necesita el binario de demostración:
//! - `config`: configuración desde variables de entorno (.env opcional).
//! - `errors`: errores de aplicación.
//! - `demo`: el escenario producer -> action -> transform -> consumer.
//!
//! El encadenamiento en sí vive en `stepchain-core` y los steps
//! reutilizables en `stepchain-steps`.

pub mod config;
pub mod demo;
pub mod errors;
