//! Ordered, append-only chain of grapes.

use crate::core::error::{GrapeError, GrapeResult};
use crate::core::grape::{AnyValue, Erased, ErasedGrape, Grape};
use futures::FutureExt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Sequential pipeline taking `I` and producing `O`.
///
/// Grapes are stored type-erased; [`Pipeline::add`] pins each grape's input type to
/// the current output type so a mis-chained pipeline does not compile.
pub struct Pipeline<I, O = I> {
    grapes: Vec<Arc<dyn ErasedGrape>>,
    _types: PhantomData<fn(I) -> O>,
}

impl<I> Default for Pipeline<I, I>
where
    I: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Pipeline<I, I>
where
    I: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            grapes: Vec::new(),
            _types: PhantomData,
        }
    }
}

impl<I, O> Pipeline<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Append a grape; the returned pipeline owns the same stage sequence.
    pub fn add<N, G>(self, grape: G) -> Pipeline<I, N>
    where
        G: Grape<O, N>,
        N: Send + 'static,
    {
        let mut grapes = self.grapes;
        grapes.push(Arc::new(Erased::<G, O, N>::new(grape)));
        Pipeline {
            grapes,
            _types: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.grapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grapes.is_empty()
    }

    /// Grape names in execution order.
    pub fn grape_names(&self) -> Vec<&'static str> {
        self.grapes.iter().map(|grape| grape.name()).collect()
    }

    /// Thread `input` through every grape in order, stopping at the first failure.
    ///
    /// Never panics because of a grape: panics are converted into errors, see
    /// [`GrapeError::from_panic`].
    pub async fn run(&self, input: I) -> GrapeResult<O> {
        let mut current: AnyValue = Box::new(input);

        for (index, grape) in self.grapes.iter().enumerate() {
            let name = grape.name();
            tracing::debug!(stage = index, grape = name, "running grape");
            current = match invoke(grape.as_ref(), current).await {
                Ok(next) => next,
                Err(err) => {
                    tracing::warn!(
                        stage = index,
                        grape = name,
                        kind = err.name(),
                        code = %err.code,
                        "grape failed: {}",
                        err.message
                    );
                    return Err(err);
                }
            };
        }

        tracing::debug!(stages = self.grapes.len(), "pipeline completed");
        current.downcast::<O>().map(|output| *output).map_err(|_| {
            GrapeError::generic(format!(
                "pipeline produced a value of an unexpected type, expected {}",
                std::any::type_name::<O>()
            ))
        })
    }
}

/// Run one grape, converting a panic at any point of the call into an error.
async fn invoke(grape: &dyn ErasedGrape, input: AnyValue) -> GrapeResult<AnyValue> {
    let future = match panic::catch_unwind(AssertUnwindSafe(|| grape.process_any(input))) {
        Ok(future) => future,
        Err(payload) => return Err(GrapeError::from_panic(payload)),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(GrapeError::from_panic(payload)),
    }
}
