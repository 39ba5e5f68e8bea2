//! Error types for sampling sessions.

use std::convert::Infallible;

use thiserror::Error;

/// Error variants raised while building or running a [`SamplingSession`](crate::SamplingSession).
///
/// `S` is the error type of the [`SelectionSink`](crate::SelectionSink) driven by the
/// session. Construction never involves a sink, so it defaults to [`Infallible`].
#[derive(Debug, Error)]
pub enum Error<S = Infallible> {
    /// More elements were requested than the population holds.
    #[error("invalid argument: cannot select {sample} elements from a population of {population}")]
    InvalidArgument { sample: usize, population: usize },

    /// The cursor ran dry before the declared population size was reached.
    #[error("population exhausted after {consumed} of {declared} declared elements")]
    ExhaustedSource { consumed: usize, declared: usize },

    /// The selection sink reported a failure.
    #[error("selection sink failed")]
    Sink(#[source] S),
}

/// A specialized Result type for sampling operations.
pub type Result<T, S = Infallible> = std::result::Result<T, Error<S>>;

impl Error {
    /// Re-type a sink-free error so it can be returned alongside sink failures.
    pub(crate) fn with_sink<S>(self) -> Error<S> {
        match self {
            Error::InvalidArgument { sample, population } => {
                Error::InvalidArgument { sample, population }
            }
            Error::ExhaustedSource { consumed, declared } => {
                Error::ExhaustedSource { consumed, declared }
            }
            Error::Sink(never) => match never {},
        }
    }
}
