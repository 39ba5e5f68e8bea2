//! Uniform random sampling without replacement in a single forward pass.
//!
//! A [`SamplingSession`] selects `n` distinct elements from a population of `N`
//! elements read through a forward-only cursor. Instead of drawing a random
//! number per element, it computes how many elements to *skip* before each
//! selection, so only the selected elements cost random draws.
//!
//! Skips come from two cooperating methods (Vitter, 1987):
//! - **Algorithm D** generates each skip by rejection sampling in O(1) expected
//!   time and runs while the population is large relative to the sample.
//! - **Algorithm A** inverts the skip distribution by sequential search, and
//!   finishes the pass once Algorithm D stops paying off.
//!
//! # Example
//!
//! ```
//! use sequential_sample::SessionBuilder;
//!
//! let session = SessionBuilder::new(3)
//!     .seed(42)
//!     .build_exact(100..200)
//!     .unwrap();
//!
//! session
//!     .for_each(|s| println!("{} at index {} after skipping {}", s.element, s.index, s.skip))
//!     .unwrap();
//! ```

mod builder;
mod error;
mod random;
mod session;
mod sink;
mod skip;

pub use builder::SessionBuilder;
pub use error::{Error, Result};
pub use random::{FromFn, UniformSource, from_fn};
pub use session::{SamplingSession, Stats};
pub use sink::{Selection, SelectionSink};

/// Shorthand for [`SessionBuilder::new`].
pub fn builder(sample: usize) -> SessionBuilder {
    SessionBuilder::new(sample)
}

/// Select `sample` indices out of `0..population`, in increasing order.
pub fn sample_indices<R: UniformSource>(
    population: usize,
    sample: usize,
    rng: R,
) -> Result<Vec<usize>> {
    let selections = SessionBuilder::new(sample)
        .rng(rng)
        .build_exact(0..population)?
        .collect()?;
    Ok(selections.into_iter().map(|s| s.element).collect())
}
