/// A source of independent uniform variates in `[0, 1)`.
///
/// The skip calculators consume randomness only through this trait, so a caller
/// that wants reproducible output injects a seeded generator per session.
pub trait UniformSource {
    /// Draw the next variate, advancing the generator.
    fn draw(&mut self) -> f64;
}

impl UniformSource for fastrand::Rng {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.f64()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// A [`UniformSource`] backed by a closure. Created by [`from_fn`].
pub struct FromFn<F>(F);

/// Wrap a closure returning values in `[0, 1)` as a [`UniformSource`].
///
/// ```
/// let mut script = [0.5, 0.25].into_iter().cycle();
/// let mut source = sequential_sample::from_fn(move || script.next().unwrap_or(0.0));
/// # use sequential_sample::UniformSource;
/// assert_eq!(source.draw(), 0.5);
/// assert_eq!(source.draw(), 0.25);
/// ```
pub fn from_fn<F: FnMut() -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut() -> f64> UniformSource for FromFn<F> {
    #[inline]
    fn draw(&mut self) -> f64 {
        (self.0)()
    }
}

pub(crate) struct DrawCounter<R> {
    inner: R,
    pub(crate) draws: u64,
}

impl<R> DrawCounter<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }
}

impl<R: UniformSource> UniformSource for DrawCounter<R> {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.draws += 1;
        self.inner.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastrand_draws_stay_in_unit_interval() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..10_000 {
            let v = rng.draw();
            assert!((0.0..1.0).contains(&v), "draw {v} out of range");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = fastrand::Rng::with_seed(99);
        let mut b = fastrand::Rng::with_seed(99);
        let xs: Vec<f64> = (0..16).map(|_| a.draw()).collect();
        let ys: Vec<f64> = (0..16).map(|_| (&mut b).draw()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn counter_tracks_draws() {
        let mut counter = DrawCounter::new(from_fn(|| 0.5));
        for _ in 0..3 {
            assert_eq!(counter.draw(), 0.5);
        }
        assert_eq!(counter.draws, 3);
    }
}
