use crate::core::error::{GrapeError, GrapeResult};
use async_trait::async_trait;
use futures::future::{self, BoxFuture, FutureExt};
use std::any::Any;
use std::marker::PhantomData;

/// Type-erased value threaded between grapes inside a pipeline.
pub(crate) type AnyValue = Box<dyn Any + Send>;

/// Trait implemented by every pipeline stage.
///
/// A grape receives its input by value and returns a new value; it must not rely
/// on the pipeline copying data between stages.
#[async_trait]
pub trait Grape<I, O>: Send + Sync + 'static
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Name used in logs and in [`Pipeline::grape_names`](crate::core::pipeline::Pipeline::grape_names).
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    async fn process(&self, input: I) -> GrapeResult<O>;
}

/// Object-safe view of a grape with its input and output types erased.
pub(crate) trait ErasedGrape: Send + Sync {
    fn name(&self) -> &'static str;

    fn process_any(&self, input: AnyValue) -> BoxFuture<'_, GrapeResult<AnyValue>>;
}

pub(crate) struct Erased<G, I, O> {
    grape: G,
    _types: PhantomData<fn(I) -> O>,
}

impl<G, I, O> Erased<G, I, O> {
    pub(crate) fn new(grape: G) -> Self {
        Self {
            grape,
            _types: PhantomData,
        }
    }
}

impl<G, I, O> ErasedGrape for Erased<G, I, O>
where
    G: Grape<I, O>,
    I: Send + 'static,
    O: Send + 'static,
{
    fn name(&self) -> &'static str {
        self.grape.name()
    }

    fn process_any(&self, input: AnyValue) -> BoxFuture<'_, GrapeResult<AnyValue>> {
        match input.downcast::<I>() {
            Ok(input) => self
                .grape
                .process(*input)
                .map(|result| result.map(|output| Box::new(output) as AnyValue))
                .boxed(),
            Err(_) => future::ready(Err(GrapeError::generic(format!(
                "{} received a value of an unexpected type, expected {}",
                self.grape.name(),
                std::any::type_name::<I>()
            ))))
            .boxed(),
        }
    }
}

/// Strip the module path and generic arguments from a type name.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
