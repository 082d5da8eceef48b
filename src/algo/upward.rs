//! Ascending three-term recurrence for j_l(x).

use crate::machine::BesselFloat;
use crate::utils::{j0_closed_form, j1_closed_form, recurrence_factor};

/// Fills `y[l] = j_l(x)` for `l = 0..y.len()` by upward recurrence.
///
/// Seeds j_0 and j_1 from their closed forms and applies
/// `j_{l+1} = (2l+1)/x · j_l - j_{l-1}`. No mitigation is attempted: once
/// `l` exceeds roughly `|x|` the growing solution y_l takes over and the
/// values lose all significance. Requires `x != 0`.
pub(crate) fn upward_recurrence<T: BesselFloat>(x: T, y: &mut [T]) {
    let n = y.len();
    if n == 0 {
        return;
    }

    y[0] = j0_closed_form(x);
    if n == 1 {
        return;
    }
    y[1] = j1_closed_form(x);

    for l in 1..n - 1 {
        y[l + 1] = recurrence_factor(l, x) * y[l] - y[l - 1];
    }
}
