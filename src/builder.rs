use crate::error::{Error, Result};
use crate::random::{DrawCounter, UniformSource};
use crate::session::SamplingSession;

/// Builder for [`SamplingSession`].
///
/// Created via [`SessionBuilder::new`] or [`crate::builder`].
pub struct SessionBuilder<R = fastrand::Rng> {
    sample: usize,
    rng: R,
}

impl SessionBuilder {
    /// Start configuring a session that selects `sample` elements.
    ///
    /// The random source defaults to a [`fastrand::Rng`] seeded from the
    /// thread-local generator.
    pub fn new(sample: usize) -> Self {
        Self {
            sample,
            rng: fastrand::Rng::new(),
        }
    }

    /// Seed the default generator for a reproducible pass.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }
}

impl<R> SessionBuilder<R> {
    /// Replace the random source.
    pub fn rng<R2: UniformSource>(self, rng: R2) -> SessionBuilder<R2> {
        SessionBuilder {
            sample: self.sample,
            rng,
        }
    }

    /// Consume the builder and bind it to a population of `population`
    /// elements read from `cursor`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the sample is larger than the
    /// population. A cursor shorter than `population` is only detected while
    /// sampling.
    pub fn build<C>(self, cursor: C, population: usize) -> Result<SamplingSession<C::IntoIter, R>>
    where
        C: IntoIterator,
    {
        if self.sample > population {
            return Err(Error::InvalidArgument {
                sample: self.sample,
                population,
            });
        }
        Ok(SamplingSession {
            cursor: cursor.into_iter(),
            population,
            remaining: population,
            to_select: self.sample,
            position: 0,
            rng: DrawCounter::new(self.rng),
        })
    }

    /// Like [`build`](Self::build), taking the population size from the cursor.
    pub fn build_exact<C>(self, cursor: C) -> Result<SamplingSession<C::IntoIter, R>>
    where
        C: IntoIterator,
        C::IntoIter: ExactSizeIterator,
    {
        let cursor = cursor.into_iter();
        let population = cursor.len();
        self.build(cursor, population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_sample_is_rejected() {
        let err = SessionBuilder::new(4).build_exact(0..3).err().unwrap();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                sample: 4,
                population: 3
            }
        ));
    }

    #[test]
    fn declared_population_is_used() {
        let session = crate::builder(2).build(vec![1, 2, 3], 3).unwrap();
        assert_eq!(session.population(), 3);
        assert_eq!(session.sample_size(), 2);
    }

    #[test]
    fn same_seed_same_selection() {
        let run = |seed| {
            SessionBuilder::new(15)
                .seed(seed)
                .build_exact(0..2_000)
                .unwrap()
                .collect()
                .unwrap()
        };
        assert_eq!(run(10), run(10));
        assert_ne!(run(10), run(11));
    }
}
