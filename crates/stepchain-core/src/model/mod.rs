//! Modelos neutrales del contexto.

pub mod empty;

pub use empty::Empty;
