//! Spherical Bessel functions of the first kind, j_l(x), by three-term
//! recurrence in both directions.
//!
//! The same linear recurrence
//!
//! ```text
//! f_{l+1} + f_{l-1} = (2l+1)/x · f_l
//! ```
//!
//! is satisfied by j_l and by the second-kind y_l. Run upward, any rounding
//! error excites y_l, which grows like (2l-1)!!/x^{l+1} while j_l decays, so
//! once l exceeds roughly |x| the upward values are meaningless. Run
//! downward, the roles swap: starting from an arbitrary seed at an order
//! comfortably above both `lmax` and |x|, the y_l component dies out and the
//! result only needs rescaling (Miller's algorithm). If the starting order
//! `lmax + seed_margin` does not exceed |x|, the seed's error is never
//! damped; raise [`MillerConfig::seed_margin`] for large arguments.
//!
//! This crate provides both directions and a comparator that reports their
//! relative errors against a trusted reference side by side. It does not
//! choose between them.
//!
//! # Example
//!
//! ```
//! use spherical_bessel::{compare, evaluate_downward, evaluate_upward, Direction};
//!
//! let up = evaluate_upward(0.1_f64, 8).unwrap();
//! let down = evaluate_downward(0.1_f64, 8).unwrap();
//! assert_eq!(up.len(), 9);
//! assert!((down[8] - 2.9012e-16).abs() < 1e-19);
//!
//! let table = compare(0.1_f64, &[3, 5, 8], 25).unwrap();
//! let (order, err) = table.worst_error(Direction::Upward).unwrap();
//! assert_eq!(order, 8);
//! assert!(err > 1e10);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod algo;
mod downward;
mod upward;
mod utils;

pub mod machine;
pub mod reference;
pub mod stability;
pub mod types;

pub use machine::BesselFloat;
pub use reference::{AnalyticReference, ReferenceOracle, DEFAULT_MAX_CONDITION};
pub use stability::{ErrorReport, StabilityTable};
pub use types::{
    Direction, Error, EvaluationPoint, MillerConfig, Normalization, OrderSequence,
    DEFAULT_SEED_MARGIN, DEFAULT_SEED_VALUE,
};
pub use utils::relative_error;

use downward::eval_downward;
use stability::stability_table;
use upward::eval_upward;

// ── Sequence evaluators ──

/// Compute j_0(x)..j_lmax(x) by upward recurrence.
///
/// Returns `[1, 0, ..., 0]` at x = 0. Unstable for orders above roughly |x|;
/// the values there are returned as computed.
pub fn evaluate_upward<T: BesselFloat>(x: T, lmax: usize) -> Result<OrderSequence<T>, Error> {
    eval_upward(EvaluationPoint::new(x, lmax)).map(OrderSequence::from_values)
}

/// Compute j_0(x)..j_lmax(x) by downward recurrence with the default
/// seed margin, seed value and order-0 normalization.
///
/// Fails with [`Error::SingularInput`] at x = 0. Accurate only while
/// `lmax + DEFAULT_SEED_MARGIN` exceeds |x|; for larger arguments use
/// [`evaluate_downward_with`] and a wider margin.
pub fn evaluate_downward<T: BesselFloat>(x: T, lmax: usize) -> Result<OrderSequence<T>, Error> {
    evaluate_downward_with(x, lmax, &MillerConfig::default())
}

/// Compute j_0(x)..j_lmax(x) by downward recurrence with explicit parameters.
pub fn evaluate_downward_with<T: BesselFloat>(
    x: T,
    lmax: usize,
    config: &MillerConfig<T>,
) -> Result<OrderSequence<T>, Error> {
    eval_downward(EvaluationPoint::new(x, lmax), config).map(OrderSequence::from_values)
}

/// Compute j_0(x)..j_lmax(x) in the given direction.
///
/// `config` only affects [`Direction::Downward`].
pub fn evaluate<T: BesselFloat>(
    direction: Direction,
    x: T,
    lmax: usize,
    config: &MillerConfig<T>,
) -> Result<OrderSequence<T>, Error> {
    match direction {
        Direction::Upward => evaluate_upward(x, lmax),
        Direction::Downward => evaluate_downward_with(x, lmax, config),
    }
}

/// j_l(x) from the default [`AnalyticReference`].
pub fn reference_value<T: BesselFloat>(l: usize, x: T) -> Result<T, Error> {
    AnalyticReference::default().reference(l, x)
}

// ── Stability comparison ──

/// Compare both directions at `x` for the given orders, each run to `lmax`,
/// against the default [`AnalyticReference`].
pub fn compare<T: BesselFloat>(
    x: T,
    orders: &[usize],
    lmax: usize,
) -> Result<StabilityTable<T>, Error> {
    compare_with(
        x,
        orders,
        lmax,
        &MillerConfig::default(),
        &AnalyticReference::default(),
    )
}

/// [`compare`] with explicit downward parameters and reference oracle.
pub fn compare_with<T, R>(
    x: T,
    orders: &[usize],
    lmax: usize,
    config: &MillerConfig<T>,
    oracle: &R,
) -> Result<StabilityTable<T>, Error>
where
    T: BesselFloat,
    R: ReferenceOracle<T> + ?Sized,
{
    stability_table(x, orders.iter().copied(), lmax, config, oracle)
}

/// Compare both directions at every order `0..=lmax`.
pub fn compare_sweep<T: BesselFloat>(x: T, lmax: usize) -> Result<StabilityTable<T>, Error> {
    let end = lmax.checked_add(1).ok_or(Error::InvalidOrder)?;
    stability_table(
        x,
        0..end,
        lmax,
        &MillerConfig::default(),
        &AnalyticReference::default(),
    )
}

/// Compare both directions for many `x` in parallel.
///
/// Results are returned in the order of `xs`; a failure at one `x` does not
/// affect the others.
#[cfg(feature = "rayon")]
pub fn compare_batch<T, R>(
    xs: &[T],
    orders: &[usize],
    lmax: usize,
    config: &MillerConfig<T>,
    oracle: &R,
) -> alloc::vec::Vec<Result<StabilityTable<T>, Error>>
where
    T: BesselFloat + Send + Sync,
    R: ReferenceOracle<T> + Sync + ?Sized,
{
    use rayon::prelude::*;

    xs.par_iter()
        .map(|&x| stability_table(x, orders.iter().copied(), lmax, config, oracle))
        .collect()
}
