/// Step sin acceso al contexto y sin salida (p. ej. una espera).
pub trait ActionStep<E> {
    fn run(self) -> Result<(), E>;
}

/// Step que lee el contexto actual sin reemplazarlo (p. ej. una aserción).
pub trait ConsumerStep<T, E> {
    fn accept(self, context: &T) -> Result<(), E>;
}

/// Step que ignora el contexto y produce uno nuevo.
pub trait ProducerStep<R, E> {
    fn produce(self) -> Result<R, E>;
}

/// Step que consume el contexto actual y produce uno nuevo, posiblemente de
/// otro tipo.
pub trait TransformStep<T, R, E> {
    fn transform(self, context: T) -> Result<R, E>;
}

// -------------------------------------------------------------
// Adaptadores: cualquier closure con la firma adecuada es un step.
// -------------------------------------------------------------
impl<F, E> ActionStep<E> for F where F: FnOnce() -> Result<(), E>
{
    fn run(self) -> Result<(), E> {
        self()
    }
}

impl<F, T, E> ConsumerStep<T, E> for F where F: FnOnce(&T) -> Result<(), E>
{
    fn accept(self, context: &T) -> Result<(), E> {
        self(context)
    }
}

impl<F, R, E> ProducerStep<R, E> for F where F: FnOnce() -> Result<R, E>
{
    fn produce(self) -> Result<R, E> {
        self()
    }
}

impl<F, T, R, E> TransformStep<T, R, E> for F where F: FnOnce(T) -> Result<R, E>
{
    fn transform(self, context: T) -> Result<R, E> {
        self(context)
    }
}
