//! Side-by-side comparison of the two recurrence directions against a
//! reference.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::downward::eval_downward;
use crate::machine::BesselFloat;
use crate::reference::ReferenceOracle;
use crate::types::{Direction, Error, EvaluationPoint, MillerConfig};
use crate::upward::eval_upward;
use crate::utils::relative_error;

/// Upward, downward and reference values of j_l(x) at one order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport<T: BesselFloat> {
    /// Argument of the comparison.
    pub x: T,
    /// Order `l` reported on.
    pub order: usize,
    /// Value from the upward recurrence.
    pub upward: T,
    /// Value from the downward recurrence.
    pub downward: T,
    /// Reference value, `None` when the oracle could not supply one.
    pub reference: Option<T>,
    /// `|upward - reference| / |reference|`.
    ///
    /// `None` when there is no reference or the reference is exactly zero.
    pub rel_err_upward: Option<T>,
    /// `|downward - reference| / |reference|`, with the same `None` cases.
    pub rel_err_downward: Option<T>,
}

impl<T: BesselFloat> ErrorReport<T> {
    /// Value computed in the given direction.
    pub fn value(&self, direction: Direction) -> T {
        match direction {
            Direction::Upward => self.upward,
            Direction::Downward => self.downward,
        }
    }

    /// Relative error of the given direction.
    pub fn relative_error(&self, direction: Direction) -> Option<T> {
        match direction {
            Direction::Upward => self.rel_err_upward,
            Direction::Downward => self.rel_err_downward,
        }
    }
}

/// Comparison rows for one `x`, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityTable<T: BesselFloat> {
    pub x: T,
    /// `lmax` both recurrences were run to.
    pub lmax: usize,
    pub rows: Vec<ErrorReport<T>>,
}

impl<T: BesselFloat> StabilityTable<T> {
    /// Row for order `l`, if it was requested.
    pub fn row(&self, l: usize) -> Option<&ErrorReport<T>> {
        self.rows
            .binary_search_by_key(&l, |r| r.order)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// `(l, relative error)` for every row where the error is defined.
    pub fn errors(&self, direction: Direction) -> Vec<(usize, T)> {
        self.rows
            .iter()
            .filter_map(|r| r.relative_error(direction).map(|e| (r.order, e)))
            .collect()
    }

    /// Largest defined relative error of the given direction.
    pub fn worst_error(&self, direction: Direction) -> Option<(usize, T)> {
        self.errors(direction)
            .into_iter()
            .fold(None, |worst: Option<(usize, T)>, (l, e)| match worst {
                Some((_, w)) if w >= e => worst,
                _ => Some((l, e)),
            })
    }
}

/// `{:.6e}` for present values, `n/a` otherwise.
struct Cell<T>(Option<T>);

impl<T: fmt::LowerExp> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{v:<14.6e}"),
            None => write!(f, "{:<14}", "n/a"),
        }
    }
}

impl<T: BesselFloat> fmt::Display for StabilityTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = {} (lmax = {}):", self.x, self.lmax)?;
        writeln!(
            f,
            "{:<4}{:<14}{:<14}{:<14}{:<14}{:<14}",
            "l", "Up", "Down", "Reference", "RelErr(Up)", "RelErr(Down)"
        )?;
        writeln!(f, "{}", "-".repeat(74))?;
        for r in &self.rows {
            writeln!(
                f,
                "{:<4}{}{}{}{}{}",
                r.order,
                Cell(Some(r.upward)),
                Cell(Some(r.downward)),
                Cell(r.reference),
                Cell(r.rel_err_upward),
                Cell(r.rel_err_downward),
            )?;
        }
        Ok(())
    }
}

/// Run both recurrences to `lmax` at `x` and report the requested orders.
///
/// Orders are deduplicated and sorted. Any order above `lmax` is rejected
/// before computing anything. A reference the oracle reports unavailable,
/// or a zero reference, leaves the corresponding relative errors `None`;
/// other oracle errors are returned.
pub(crate) fn stability_table<T, R, I>(
    x: T,
    orders: I,
    lmax: usize,
    config: &MillerConfig<T>,
    oracle: &R,
) -> Result<StabilityTable<T>, Error>
where
    T: BesselFloat,
    R: ReferenceOracle<T> + ?Sized,
    I: IntoIterator<Item = usize>,
{
    let orders: BTreeSet<usize> = orders.into_iter().collect();
    if orders.iter().any(|&l| l > lmax) {
        return Err(Error::InvalidOrder);
    }

    debug!(?x, lmax, orders = orders.len(), "comparing recurrence directions");

    let point = EvaluationPoint::new(x, lmax);
    let up = eval_upward(point)?;
    let down = eval_downward(point, config)?;

    let mut rows = Vec::with_capacity(orders.len());
    for l in orders {
        let reference = match oracle.reference(l, x) {
            Ok(v) => Some(v),
            Err(Error::ReferenceUnavailable) => {
                debug!(?x, order = l, "reference unavailable; relative errors not applicable");
                None
            }
            Err(e) => return Err(e),
        };
        let rel = |computed: T| reference.and_then(|r| relative_error(computed, r));
        rows.push(ErrorReport {
            x,
            order: l,
            upward: up[l],
            downward: down[l],
            reference,
            rel_err_upward: rel(up[l]),
            rel_err_downward: rel(down[l]),
        });
    }

    Ok(StabilityTable { x, lmax, rows })
}
