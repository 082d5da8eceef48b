//! Downward (Miller) recurrence upper interface.

use alloc::vec;
use alloc::vec::Vec;

use crate::algo::miller::miller_downward;
use crate::machine::BesselFloat;
use crate::types::{Error, EvaluationPoint, MillerConfig};

/// Compute `j_0(x)..j_lmax(x)` by Miller's algorithm.
///
/// x = 0 is rejected: every recurrence step divides by x, and there is no
/// seed that recovers the limiting sequence.
pub(crate) fn eval_downward<T: BesselFloat>(
    point: EvaluationPoint<T>,
    config: &MillerConfig<T>,
) -> Result<Vec<T>, Error> {
    let n = point.sequence_len()?;

    if point.x == T::zero() {
        return Err(Error::SingularInput);
    }

    let mut y = vec![T::zero(); n];
    miller_downward(point.x, config, &mut y)?;
    Ok(y)
}
