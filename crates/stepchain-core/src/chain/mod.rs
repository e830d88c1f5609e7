//! Cadena de steps con contexto tipado.
//!
//! `StepChain<T, E>` sostiene un único valor de contexto de tipo `T`. Cada
//! `apply_*` consume la cadena y devuelve otra, parametrizada por el tipo de
//! contexto resultante, de modo que las llamadas se encadenan con `?`:
//!
//! ```
//! use stepchain_core::{StepChain, StepError};
//!
//! fn len_of_ten() -> Result<usize, StepError> {
//!     let chain = StepChain::new().apply_producer(|| Ok(10))?
//!                                 .apply_action(|| Ok(()))?
//!                                 .apply_transform(|_: i32| Ok("0123456789".len()))?
//!                                 .apply_consumer(|n: &usize| if *n == 10 { Ok(()) } else { Err(StepError::failed("len")) })?;
//!     Ok(chain.into_context())
//! }
//! assert_eq!(len_of_ten().unwrap(), 10);
//! ```

mod executor;

pub use executor::StepChain;
