use std::fmt;
use std::marker::PhantomData;

use crate::errors::StepError;
use crate::model::Empty;
use crate::step::{ActionStep, ConsumerStep, ProducerStep, TransformStep};

/// Ejecutor secuencial que transporta un contexto tipado entre steps.
///
/// El parámetro `E` es el error que devuelven los steps; se propaga tal cual
/// al caller (sin envolver), y el primer error corta la cadena porque el
/// caller no obtiene una nueva cadena sobre la que seguir aplicando steps.
///
/// La cadena se consume en cada paso, así que una misma instancia no puede
/// compartirse entre callers concurrentes.
pub struct StepChain<T, E = StepError> {
    context: T,
    _err: PhantomData<fn() -> E>,
}

impl StepChain<Empty> {
    /// Cadena sin contexto inicial (contexto = `Empty`).
    #[inline]
    pub fn new() -> Self {
        Self::from_context(Empty)
    }
}

impl<T> StepChain<T> {
    /// Cadena con contexto inicial y el error por defecto (`StepError`).
    #[inline]
    pub fn with(initial: T) -> Self {
        Self::from_context(initial)
    }
}

impl<E> Default for StepChain<Empty, E> {
    fn default() -> Self {
        Self::from_context(Empty)
    }
}

impl<T, E> StepChain<T, E> {
    /// Crea la cadena para cualquier tipo de error; útil como
    /// `StepChain::<_, MiError>::from_context(valor)`.
    #[inline]
    pub fn from_context(initial: T) -> Self {
        Self { context: initial,
               _err: PhantomData }
    }

    /// Contexto actual.
    #[inline]
    pub fn context(&self) -> &T {
        &self.context
    }

    /// Descarta la cadena y devuelve su contexto.
    #[inline]
    pub fn into_context(self) -> T {
        self.context
    }

    /// Ejecuta un step que no ve el contexto. El contexto no cambia.
    #[inline]
    pub fn apply_action<S>(self, step: S) -> Result<Self, E>
        where S: ActionStep<E>
    {
        step.run()?;
        Ok(self)
    }

    /// Ejecuta un step que lee el contexto. El contexto no cambia.
    #[inline]
    pub fn apply_consumer<S>(self, step: S) -> Result<Self, E>
        where S: ConsumerStep<T, E>
    {
        step.accept(&self.context)?;
        Ok(self)
    }

    /// Ejecuta un step que produce un contexto nuevo de tipo `R`; el
    /// contexto previo se descarta.
    #[inline]
    pub fn apply_producer<R, S>(self, step: S) -> Result<StepChain<R, E>, E>
        where S: ProducerStep<R, E>
    {
        let next = step.produce()?;
        Ok(StepChain::from_context(next))
    }

    /// Entrega el contexto al step y lo reemplaza por lo que éste produce.
    #[inline]
    pub fn apply_transform<R, S>(self, step: S) -> Result<StepChain<R, E>, E>
        where S: TransformStep<T, R, E>
    {
        let next = step.transform(self.context)?;
        Ok(StepChain::from_context(next))
    }
}

impl<T: fmt::Debug, E> fmt::Debug for StepChain<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepChain").field("context", &self.context).finish()
    }
}

impl<T: Clone, E> Clone for StepChain<T, E> {
    fn clone(&self) -> Self {
        Self::from_context(self.context.clone())
    }
}
