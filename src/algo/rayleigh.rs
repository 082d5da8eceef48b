//! Rayleigh's finite expansion of j_l(x).
//!
//! j_l(x) = [sin(x - lπ/2) P_l(x) + cos(x - lπ/2) Q_l(x)] / x, where
//! P_l = Σ_{k even} (-1)^{k/2} a_k / x^k, Q_l = Σ_{k odd} (-1)^{(k-1)/2} a_k / x^k
//! and a_k = (l+k)! / (2^k k! (l-k)!), k = 0..=l.

use crate::algo::series::Summation;
use crate::machine::BesselFloat;

/// sin(x - lπ/2) and cos(x - lπ/2), reduced on l mod 4 so no multiple of π
/// enters the argument.
#[inline]
fn shifted_sin_cos<T: BesselFloat>(l: usize, x: T) -> (T, T) {
    let (s, c) = (x.sin(), x.cos());
    match l % 4 {
        0 => (s, c),
        1 => (-c, s),
        2 => (-s, -c),
        _ => (c, -s),
    }
}

/// Evaluates the finite expansion. Exact for integer `l`, but the terms
/// grow like l²/x so it is only well conditioned for |x| ≳ l². Returns
/// `None` at x = 0 or when the terms overflow.
pub(crate) fn rayleigh_sum<T: BesselFloat>(l: usize, x: T) -> Option<Summation<T>> {
    if x == T::zero() {
        return None;
    }
    let one = T::one();
    let inv_x = x.recip();

    let mut p = T::zero();
    let mut q = T::zero();
    let mut p_abs = T::zero();
    let mut q_abs = T::zero();

    // a_k / x^k, advanced with a_{k+1} = a_k (l+k+1)(l-k) / (2(k+1))
    let mut term = one;
    for k in 0..=l {
        let negative = (k / 2) % 2 == 1;
        let signed = if negative { -term } else { term };
        if k % 2 == 0 {
            p = p + signed;
            p_abs = p_abs + term.abs();
        } else {
            q = q + signed;
            q_abs = q_abs + term.abs();
        }
        if k < l {
            let ratio = T::from_order(l + k + 1) * T::from_order(l - k)
                / T::from_order(2 * (k + 1));
            term = term * ratio * inv_x;
        }
        if !term.is_finite() {
            return None;
        }
    }

    let (s, c) = shifted_sin_cos(l, x);
    let value = (s * p + c * q) * inv_x;
    let abs_sum = (s.abs() * p_abs + c.abs() * q_abs) * inv_x.abs();
    let condition = if value == T::zero() {
        T::infinity()
    } else {
        abs_sum / value.abs()
    };
    Some(Summation { value, condition })
}
