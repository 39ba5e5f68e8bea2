use std::convert::Infallible;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::random::{DrawCounter, UniformSource};
use crate::sink::{Selection, SelectionSink};
use crate::skip::{MethodA, MethodD};

/// Counters describing one completed sampling pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Selections delivered to the sink.
    pub selected: usize,
    /// Elements passed over between selections.
    pub skipped: usize,
    /// Uniform variates drawn from the random source.
    pub draws: u64,
    /// Selections whose skip came from Algorithm D.
    pub method_d: usize,
    /// Selections whose skip came from Algorithm A.
    pub method_a: usize,
}

enum Phase {
    D(MethodD),
    A(MethodA),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::D(_) => "D",
            Phase::A(_) => "A",
        }
    }
}

/// A single forward pass that selects `n` of `N` elements uniformly at random.
///
/// The session owns its cursor and random source. [`sample`](Self::sample)
/// consumes it, so every pass needs a fresh session from a
/// [`SessionBuilder`](crate::SessionBuilder).
pub struct SamplingSession<I, R = fastrand::Rng> {
    pub(crate) cursor: I,
    pub(crate) population: usize,
    pub(crate) remaining: usize,
    pub(crate) to_select: usize,
    pub(crate) position: usize,
    pub(crate) rng: DrawCounter<R>,
}

impl<I, R> SamplingSession<I, R>
where
    I: Iterator,
    R: UniformSource,
{
    /// Declared population size `N`.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Number of elements this session will select.
    pub fn sample_size(&self) -> usize {
        self.to_select
    }

    /// Run the pass, delivering each selection to `sink` as it is made.
    ///
    /// Algorithm D produces skips while the population is large relative to
    /// the sample; Algorithm A finishes the remainder. A session with nothing
    /// to select returns immediately without touching the random source.
    pub fn sample<K>(mut self, mut sink: K) -> Result<Stats, K::Error>
    where
        K: SelectionSink<I::Item>,
    {
        let mut stats = Stats::default();
        if self.to_select == 0 {
            debug!(population = self.population, "nothing to sample");
            return Ok(stats);
        }

        let mut phase = match MethodD::start(self.remaining, self.to_select, &mut self.rng) {
            Some(d) => Phase::D(d),
            None => Phase::A(MethodA::new(self.remaining, self.to_select)),
        };
        debug!(
            population = self.population,
            sample = self.to_select,
            method = phase.name(),
            "sampling started"
        );

        while self.to_select > 0 {
            phase = match phase {
                Phase::D(d) if !d.is_active() => {
                    debug!(
                        remaining = self.remaining,
                        to_select = self.to_select,
                        "switching to method A"
                    );
                    let tail = d.into_tail();
                    debug_assert_eq!(tail.to_select(), self.to_select);
                    Phase::A(tail)
                }
                phase => phase,
            };

            let skip = match &mut phase {
                Phase::D(d) => {
                    stats.method_d += 1;
                    d.next_skip(&mut self.rng)
                }
                Phase::A(a) => {
                    stats.method_a += 1;
                    a.next_skip(&mut self.rng)
                }
            };

            let selection = self.advance(skip).map_err(Error::with_sink)?;
            trace!(index = selection.index, skip = selection.skip, "selected");
            self.remaining = self.remaining.saturating_sub(skip + 1);
            self.to_select -= 1;
            stats.selected += 1;
            stats.skipped += selection.skip;
            sink.on_selected(selection).map_err(Error::Sink)?;
        }

        stats.draws = self.rng.draws;
        debug!(
            selected = stats.selected,
            skipped = stats.skipped,
            draws = stats.draws,
            method_d = stats.method_d,
            method_a = stats.method_a,
            "sampling finished"
        );
        Ok(stats)
    }

    /// Run the pass with an infallible callback.
    pub fn for_each(self, mut f: impl FnMut(Selection<I::Item>)) -> Result<Stats> {
        self.sample(|selection| {
            f(selection);
            Ok::<_, Infallible>(())
        })
    }

    /// Run the pass and gather every selection in index order.
    pub fn collect(self) -> Result<Vec<Selection<I::Item>>> {
        // the declared sample size is only trusted as far as the cursor's own hint
        let mut selections = Vec::with_capacity(self.to_select.min(self.cursor.size_hint().0));
        self.for_each(|selection| selections.push(selection))?;
        Ok(selections)
    }

    /// Pass over `skip` elements and return the one after them.
    ///
    /// If the cursor runs out partway through the skip, the last element it
    /// produced is selected instead, and the returned selection's `skip` is
    /// the distance actually passed over rather than the requested one.
    fn advance(&mut self, skip: usize) -> Result<Selection<I::Item>> {
        let Some(mut element) = self.cursor.next() else {
            return Err(Error::ExhaustedSource {
                consumed: self.position,
                declared: self.population,
            });
        };
        let mut index = self.position;
        self.position += 1;

        let mut passed = 0;
        while passed < skip {
            match self.cursor.next() {
                Some(next) => {
                    element = next;
                    index = self.position;
                    self.position += 1;
                    passed += 1;
                }
                None => {
                    warn!(
                        consumed = self.position,
                        declared = self.population,
                        "population ended inside a skip, selecting its last element"
                    );
                    break;
                }
            }
        }

        Ok(Selection {
            element,
            index,
            skip: passed,
        })
    }
}
