//! Core types for spherical Bessel recurrences.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::machine::BesselFloat;

/// Default number of orders the downward recurrence starts above `lmax`.
///
/// Large enough that the arbitrary seed's error has decayed to roundoff by
/// the time the recurrence reaches `lmax`, provided the starting order
/// `lmax + seed_margin` already exceeds `|x|`. Below that order the
/// recurrence is oscillatory in both directions and the seed's error never
/// decays, so for `|x| ≳ lmax + 15` the margin must be raised until the
/// starting order clears `|x|` by a few dozen orders.
pub const DEFAULT_SEED_MARGIN: usize = 15;

/// Default magnitude placed at the starting order of the downward recurrence.
///
/// Its value is immaterial once normalized; only its nonzero-ness matters.
pub const DEFAULT_SEED_VALUE: f64 = 1.0e-20;

/// Direction in which the three-term recurrence is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending from the closed forms of j_0 and j_1.
    ///
    /// Unstable once `l` exceeds roughly `|x|`.
    Upward,
    /// Descending from an arbitrary seed above `lmax` (Miller's algorithm).
    Downward,
}

impl Direction {
    /// Both directions, in reporting order.
    pub const ALL: [Direction; 2] = [Direction::Upward, Direction::Downward];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Upward => f.pad("upward"),
            Direction::Downward => f.pad("downward"),
        }
    }
}

/// How the downward recurrence fixes the overall scale of its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// Match the analytic `j_0(x) = sin(x)/x`.
    #[default]
    Order0,
    /// Use the sum rule `Σ (2l+1) j_l(x)² = 1` over the whole seed buffer.
    ///
    /// The sign is taken from whichever of the analytic j_0, j_1 is larger
    /// in magnitude, so this stays accurate near zeros of j_0.
    SumRule,
}

/// Parameters of the downward (Miller) recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MillerConfig<T: BesselFloat> {
    /// Number of extra orders above `lmax` at which the recurrence is seeded.
    pub seed_margin: usize,
    /// Value placed at the starting order. Must be nonzero.
    pub seed_value: T,
    /// Normalization applied after the recurrence reaches order 0.
    pub normalization: Normalization,
}

impl<T: BesselFloat> MillerConfig<T> {
    /// Default configuration with a different seed margin.
    pub fn with_margin(seed_margin: usize) -> Self {
        MillerConfig {
            seed_margin,
            ..Self::default()
        }
    }
}

impl<T: BesselFloat> Default for MillerConfig<T> {
    fn default() -> Self {
        MillerConfig {
            seed_margin: DEFAULT_SEED_MARGIN,
            seed_value: T::from_f64(DEFAULT_SEED_VALUE),
            normalization: Normalization::Order0,
        }
    }
}

/// Point at which a sequence `j_0(x)..j_lmax(x)` is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationPoint<T: BesselFloat> {
    /// Argument of the spherical Bessel functions.
    pub x: T,
    /// Highest order requested.
    pub lmax: usize,
}

impl<T: BesselFloat> EvaluationPoint<T> {
    pub fn new(x: T, lmax: usize) -> Self {
        EvaluationPoint { x, lmax }
    }

    /// Number of values in a sequence for this point, `lmax + 1`.
    pub fn sequence_len(&self) -> Result<usize, Error> {
        self.lmax.checked_add(1).ok_or(Error::InvalidOrder)
    }
}

/// Values `j_0(x), j_1(x), ..., j_lmax(x)`, indexed by order.
///
/// Produced fresh by each evaluator call and not mutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSequence<T: BesselFloat> {
    values: Vec<T>,
}

impl<T: BesselFloat> OrderSequence<T> {
    pub(crate) fn from_values(values: Vec<T>) -> Self {
        debug_assert!(!values.is_empty());
        OrderSequence { values }
    }

    /// Highest order held by the sequence.
    pub fn lmax(&self) -> usize {
        self.values.len() - 1
    }

    /// Number of orders held, `lmax + 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a sequence holds at least order 0.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at order `l`, or `None` when `l > lmax`.
    pub fn get(&self, l: usize) -> Option<T> {
        self.values.get(l).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterates over `(l, j_l)` in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.values.iter().copied().enumerate()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: BesselFloat> Index<usize> for OrderSequence<T> {
    type Output = T;

    fn index(&self, l: usize) -> &T {
        &self.values[l]
    }
}

impl<T: BesselFloat> AsRef<[T]> for OrderSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

/// Error type for spherical Bessel evaluation and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Requested order is not representable or lies outside `[0, lmax]`.
    InvalidOrder,
    /// x = 0 passed to the downward recurrence, which divides by x.
    SingularInput,
    /// Downward recurrence produced a zero or non-finite normalization denominator.
    DegenerateNormalization,
    /// The reference oracle cannot supply a trusted value at this point.
    ReferenceUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOrder => {
                write!(f, "invalid order: must lie in [0, lmax] with lmax + margin representable")
            }
            Error::SingularInput => {
                write!(f, "singular input: downward recurrence is undefined at x = 0")
            }
            Error::DegenerateNormalization => {
                write!(
                    f,
                    "degenerate normalization: downward recurrence reached a zero or non-finite scale"
                )
            }
            Error::ReferenceUnavailable => {
                write!(f, "reference unavailable: no trusted value at this (l, x)")
            }
        }
    }
}

impl core::error::Error for Error {}
