//! Upward recurrence upper interface.

use alloc::vec;
use alloc::vec::Vec;

use crate::algo::upward::upward_recurrence;
use crate::machine::BesselFloat;
use crate::types::{Error, EvaluationPoint};

/// Compute `j_0(x)..j_lmax(x)` by ascending recurrence.
///
/// At x = 0 the closed forms divide by zero, so the limiting sequence
/// `[1, 0, ..., 0]` is returned without entering the recurrence.
pub(crate) fn eval_upward<T: BesselFloat>(point: EvaluationPoint<T>) -> Result<Vec<T>, Error> {
    let n = point.sequence_len()?;
    let mut y = vec![T::zero(); n];

    if point.x == T::zero() {
        y[0] = T::one();
        return Ok(y);
    }

    upward_recurrence(point.x, &mut y);
    Ok(y)
}
