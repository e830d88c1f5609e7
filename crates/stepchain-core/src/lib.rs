//! stepchain-core: encadenamiento secuencial de steps con contexto tipado.
//!
//! Piezas principales:
//! - `step`: las cuatro formas de step (`ActionStep`, `ConsumerStep`,
//!   `ProducerStep`, `TransformStep`) y el enum `StepKind`.
//! - `chain`: `StepChain<T, E>`, el ejecutor que transporta el contexto y
//!   cambia su tipo en cada producer/transform.
//! - `sequence`: `StepSequence`, variante dinámica sobre `serde_json::Value`
//!   construida en runtime a partir de `StepOp`.
//! - `errors`: `StepError`, error por defecto de los steps.
pub mod chain;
pub mod errors;
pub mod model;
pub mod sequence;
pub mod step;

pub use chain::StepChain;
pub use errors::StepError;
pub use model::Empty;
pub use sequence::{StepOp, StepSequence};
pub use step::{ActionStep, ConsumerStep, ProducerStep, StepKind, TransformStep};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fluent_chain_changes_context_type() {
		let out = StepChain::new().apply_producer(|| Ok(vec![1, 2, 3]))
		                          .and_then(|c| c.apply_transform(|v: Vec<i32>| Ok(v.len())))
		                          .and_then(|c| c.apply_consumer(|n: &usize| if *n == 3 { Ok(()) } else { Err(StepError::failed("len")) }))
		                          .map(StepChain::into_context);
		assert_eq!(out.ok(), Some(3));
	}

	#[test]
	fn sequence_runs_as_transform_inside_chain() {
		let seq = StepSequence::new().then(StepOp::transform(|v| Ok(serde_json::json!({ "wrapped": v }))));
		let chain = StepChain::with(serde_json::json!(7)).apply_transform(seq).expect("sequence ok");
		assert_eq!(chain.context()["wrapped"], serde_json::json!(7));
	}
}
