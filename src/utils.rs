//! Closed forms for the lowest orders and error measures.

use crate::machine::BesselFloat;

/// j_0(x) = sin(x)/x.
///
/// Not defined at x = 0; callers handle the limit themselves.
#[inline]
pub(crate) fn j0_closed_form<T: BesselFloat>(x: T) -> T {
    x.sin() / x
}

/// j_1(x) = sin(x)/x² - cos(x)/x.
///
/// Not defined at x = 0; callers handle the limit themselves.
#[inline]
pub(crate) fn j1_closed_form<T: BesselFloat>(x: T) -> T {
    x.sin() / (x * x) - x.cos() / x
}

/// Coefficient `(2l+1)/x` of the three-term recurrence
/// `f_{l+1} + f_{l-1} = (2l+1)/x · f_l`.
#[inline]
pub(crate) fn recurrence_factor<T: BesselFloat>(l: usize, x: T) -> T {
    T::from_order(2 * l + 1) / x
}

/// Relative error `|computed - reference| / |reference|`.
///
/// Returns `None` when the reference is exactly zero, where the ratio
/// carries no information.
#[inline]
pub fn relative_error<T: BesselFloat>(computed: T, reference: T) -> Option<T> {
    if reference == T::zero() {
        return None;
    }
    Some((computed - reference).abs() / reference.abs())
}
