//! Trusted reference values for j_l(x).
//!
//! The comparator only needs `reference(l, x)`. Any closure
//! `Fn(usize, T) -> Result<T, Error>` qualifies, so values from an external
//! library can be plugged in directly; [`AnalyticReference`] is the
//! self-contained default.

use crate::algo::rayleigh::rayleigh_sum;
use crate::algo::series::{ascending_series, Summation};
use crate::machine::BesselFloat;
use crate::types::Error;

/// Default bound on the condition number accepted by [`AnalyticReference`].
///
/// A sum with condition number κ loses about log10(κ) digits, so `1e8`
/// leaves roughly eight significant digits in double precision.
pub const DEFAULT_MAX_CONDITION: f64 = 1.0e8;

/// Source of trusted `j_l(x)` values.
pub trait ReferenceOracle<T: BesselFloat> {
    /// Returns `j_l(x)`, or [`Error::ReferenceUnavailable`] when no trusted
    /// value can be produced.
    fn reference(&self, l: usize, x: T) -> Result<T, Error>;
}

impl<T, F> ReferenceOracle<T> for F
where
    T: BesselFloat,
    F: Fn(usize, T) -> Result<T, Error>,
{
    fn reference(&self, l: usize, x: T) -> Result<T, Error> {
        self(l, x)
    }
}

/// Reference built from two independent summations.
///
/// - the ascending power series, well conditioned for |x| small against l,
/// - Rayleigh's finite expansion, well conditioned for |x| large against l².
///
/// Both report their condition number `Σ|terms| / |sum|`; the better one is
/// returned when it does not exceed `max_condition`, otherwise the point is
/// reported unavailable. In the transition region |x| ≈ l with |x| ≳ 40
/// neither summation qualifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticReference {
    /// Largest condition number accepted.
    pub max_condition: f64,
}

impl Default for AnalyticReference {
    fn default() -> Self {
        AnalyticReference {
            max_condition: DEFAULT_MAX_CONDITION,
        }
    }
}

impl<T: BesselFloat> ReferenceOracle<T> for AnalyticReference {
    fn reference(&self, l: usize, x: T) -> Result<T, Error> {
        if x == T::zero() {
            return Ok(if l == 0 { T::one() } else { T::zero() });
        }

        let mut best: Option<Summation<T>> = None;
        let candidates = [ascending_series(l, x), rayleigh_sum(l, x)];
        for s in candidates.into_iter().flatten() {
            if s.condition.is_nan() {
                continue;
            }
            if best.map_or(true, |b| s.condition < b.condition) {
                best = Some(s);
            }
        }

        match best {
            Some(s) if s.condition <= T::from_f64(self.max_condition) => Ok(s.value),
            _ => Err(Error::ReferenceUnavailable),
        }
    }
}
