//! Ascending power series for j_l(x).
//!
//! j_l(x) = x^l / (2l+1)!! · Σ_k (-x²/2)^k / (k! (2l+3)(2l+5)…(2l+2k+1))

use crate::machine::BesselFloat;

/// Upper bound on the number of series terms.
pub(crate) const MAX_SERIES_TERMS: usize = 500;

/// A summed value together with its condition number `Σ|terms| / |sum|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Summation<T> {
    pub(crate) value: T,
    pub(crate) condition: T,
}

/// Sums the ascending series for j_l(x).
///
/// Terms first grow (up to k ≈ |x|/√2) and then decay factorially, so the
/// loop only stops once past the peak and once a term no longer changes the
/// sum. Returns `None` when the sum does not settle within
/// [`MAX_SERIES_TERMS`] or overflows.
pub(crate) fn ascending_series<T: BesselFloat>(l: usize, x: T) -> Option<Summation<T>> {
    let one = T::one();
    let eps = T::MACH_EPSILON;

    // x^l / (2l+1)!!, built as a product so neither factor overflows alone
    let mut prefactor = one;
    for i in 1..=l {
        prefactor = prefactor * (x / T::from_order(2 * i + 1));
    }

    let half_x2 = x * x * T::from_f64(0.5);
    let mut term = one;
    let mut sum = one;
    let mut abs_sum = one;
    let mut settled = false;
    for k in 1..=MAX_SERIES_TERMS {
        let fk = T::from_order(k);
        term = -term * half_x2 / (fk * T::from_order(2 * l + 2 * k + 1));
        sum = sum + term;
        abs_sum = abs_sum + term.abs();
        if !sum.is_finite() || !abs_sum.is_finite() {
            return None;
        }
        if term.abs() <= eps * sum.abs() && fk * fk >= half_x2 {
            settled = true;
            break;
        }
    }
    if !settled {
        return None;
    }

    let condition = if sum == T::zero() {
        T::infinity()
    } else {
        abs_sum / sum.abs()
    };
    Some(Summation {
        value: prefactor * sum,
        condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_at_zero_is_exact() {
        let s = ascending_series(0, 0.0_f64).unwrap();
        assert_eq!(s.value, 1.0);
        assert_eq!(s.condition, 1.0);

        let s = ascending_series(4, 0.0_f64).unwrap();
        assert_eq!(s.value, 0.0);
    }

    #[test]
    fn series_small_argument() {
        let s = ascending_series(8, 0.1_f64).unwrap();
        assert!((s.value - 2.901200102530191e-16).abs() / 2.901200102530191e-16 < 1e-14);
        assert!(s.condition < 1.01);

        let s = ascending_series(3, 1.0_f64).unwrap();
        assert!((s.value - 0.009006581117112515).abs() / 0.009006581117112515 < 1e-14);
    }

    #[test]
    fn series_condition_grows_with_x() {
        let near = ascending_series(3, 1.0_f64).unwrap();
        let far = ascending_series(3, 10.0_f64).unwrap();
        assert!(far.condition > 1000.0 * near.condition);
        // Still usable at x = 10, just less precise
        assert!((far.value - (-0.03949584498447033)).abs() / 0.03949584498447033 < 1e-10);
    }

    #[test]
    fn series_gives_up_on_huge_argument() {
        assert!(ascending_series(0, 1.0e4_f64).is_none());
    }
}
