//! Skip calculators.
//!
//! Both methods answer the same question: given `N` remaining elements of which
//! `n` must still be selected, how many elements are passed over before the next
//! selection? The answer `S` follows the distribution
//!
//! ```text
//! P(S = s) = C(N - s - 1, n - 1) / C(N, n),    0 <= s <= N - n
//! ```
//!
//! [`MethodA`] inverts that distribution by sequential search and costs O(N / n)
//! per selection. [`MethodD`] generates `S` by rejection from a continuous
//! envelope in O(1) expected time, and is only profitable while `N` is large
//! relative to `n`.
//!
//! Non-integer powers are written as `exp(ln(x) * p)` so that traces are
//! reproducible against the published formulation of the algorithm.
//!
//! See J. S. Vitter, "An efficient algorithm for sequential random sampling",
//! ACM TOMS 13(1), 1987.

use crate::random::UniformSource;

/// Reciprocal of the (negated) `alpha` tuning parameter of Algorithm D.
///
/// Algorithm D keeps running while `ALPHA_INV * n < N`.
pub(crate) const ALPHA_INV: usize = 13;

#[inline]
fn pow_ln(x: f64, exponent: f64) -> f64 {
    (x.ln() * exponent).exp()
}

/// Sequential search over the skip distribution.
#[derive(Debug, Clone)]
pub(crate) struct MethodA {
    remaining: usize,
    to_select: usize,
    top: f64,
    remaining_real: f64,
}

impl MethodA {
    pub(crate) fn new(remaining: usize, to_select: usize) -> Self {
        debug_assert!(to_select <= remaining);
        Self {
            remaining,
            to_select,
            top: (remaining - to_select) as f64,
            remaining_real: remaining as f64,
        }
    }

    pub(crate) fn to_select(&self) -> usize {
        self.to_select
    }

    /// Compute the next skip and commit it. Must not be called once `to_select` is zero.
    pub(crate) fn next_skip<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> usize {
        debug_assert!(self.to_select > 0);

        if self.to_select == 1 {
            let v = rng.draw();
            let skip = ((self.remaining_real * v).floor() as usize).min(self.remaining - 1);
            self.remaining -= skip + 1;
            self.remaining_real = self.remaining as f64;
            self.to_select = 0;
            return skip;
        }

        let v = rng.draw();
        let mut skip = 0;
        let mut quot = self.top / self.remaining_real;
        while quot > v {
            skip += 1;
            self.top -= 1.0;
            self.remaining_real -= 1.0;
            quot = quot * self.top / self.remaining_real;
        }
        // the selected element itself
        self.remaining_real -= 1.0;
        self.remaining -= skip + 1;
        self.to_select -= 1;
        skip
    }
}

/// Rejection sampling of the skip distribution.
///
/// The struct carries Algorithm D's running state between selections: the
/// candidate variate `v_prime`, the bound `qu1 = N - n + 1` on admissible
/// skips, and the switchover threshold.
#[derive(Debug, Clone)]
pub(crate) struct MethodD {
    remaining: usize,
    to_select: usize,
    remaining_real: f64,
    to_select_real: f64,
    to_select_inv: f64,
    v_prime: f64,
    qu1: usize,
    qu1_real: f64,
    threshold: usize,
}

impl MethodD {
    /// Start Algorithm D, or return `None` without drawing anything when it
    /// would not run a single step.
    pub(crate) fn start<R: UniformSource + ?Sized>(
        remaining: usize,
        to_select: usize,
        rng: &mut R,
    ) -> Option<Self> {
        let threshold = to_select.saturating_mul(ALPHA_INV);
        if !Self::profitable(remaining, to_select, threshold) {
            return None;
        }
        let to_select_real = to_select as f64;
        let to_select_inv = 1.0 / to_select_real;
        let qu1 = remaining - to_select + 1;
        Some(Self {
            remaining,
            to_select,
            remaining_real: remaining as f64,
            to_select_real,
            to_select_inv,
            v_prime: pow_ln(rng.draw(), to_select_inv),
            qu1,
            qu1_real: qu1 as f64,
            threshold,
        })
    }

    fn profitable(remaining: usize, to_select: usize, threshold: usize) -> bool {
        to_select > 1 && threshold < remaining
    }

    /// Whether Algorithm D should produce the next skip. Once this turns false
    /// the remaining selections belong to Algorithm A.
    pub(crate) fn is_active(&self) -> bool {
        Self::profitable(self.remaining, self.to_select, self.threshold)
    }

    /// Hand the remaining `(N, n)` over to Algorithm A.
    pub(crate) fn into_tail(self) -> MethodA {
        MethodA::new(self.remaining, self.to_select)
    }

    /// Compute the next skip and commit it. Only valid while [`Self::is_active`].
    pub(crate) fn next_skip<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> usize {
        debug_assert!(self.is_active());

        let n_min1_inv = 1.0 / (self.to_select_real - 1.0);
        let skip = loop {
            // D2: candidate from the continuous envelope, bounded so that the
            // other n - 1 selections still fit.
            let (x, skip) = loop {
                let x = self.remaining_real * (1.0 - self.v_prime);
                let skip = x as usize;
                if skip < self.qu1 {
                    break (x, skip);
                }
                self.v_prime = pow_ln(rng.draw(), self.to_select_inv);
            };
            let skip_real = skip as f64;

            // D3: cheap squeeze test.
            let u = rng.draw();
            let y1 = pow_ln(u * self.remaining_real / self.qu1_real, n_min1_inv);
            self.v_prime =
                y1 * (1.0 - x / self.remaining_real) * (self.qu1_real / (self.qu1_real - skip_real));
            if self.v_prime <= 1.0 {
                break skip;
            }

            // D4: exact test. The two product forms keep the ratio in range.
            let mut y2 = 1.0;
            let mut top = self.remaining_real - 1.0;
            let (mut bottom, limit) = if self.to_select - 1 > skip {
                (
                    self.remaining_real - self.to_select_real,
                    self.remaining - skip,
                )
            } else {
                (self.remaining_real - skip_real - 1.0, self.qu1)
            };
            for _ in limit..self.remaining {
                y2 = y2 * top / bottom;
                top -= 1.0;
                bottom -= 1.0;
            }
            if self.remaining_real / (self.remaining_real - x) >= y1 * pow_ln(y2, n_min1_inv) {
                self.v_prime = pow_ln(rng.draw(), n_min1_inv);
                break skip;
            }
            self.v_prime = pow_ln(rng.draw(), self.to_select_inv);
        };

        // D5
        let skip_real = skip as f64;
        self.remaining -= skip + 1;
        self.remaining_real -= skip_real + 1.0;
        self.to_select -= 1;
        self.to_select_real -= 1.0;
        self.to_select_inv = n_min1_inv;
        self.qu1 -= skip;
        self.qu1_real -= skip_real;
        self.threshold = self.threshold.saturating_sub(ALPHA_INV);
        skip
    }
}
