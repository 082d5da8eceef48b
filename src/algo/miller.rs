//! Miller algorithm for j_l(x): downward recurrence from an arbitrary seed,
//! normalized by the analytic j_0 or by the sum rule Σ (2l+1) j_l² = 1.

use alloc::vec;

use tracing::{debug, trace, warn};

use crate::machine::BesselFloat;
use crate::types::{Error, MillerConfig, Normalization};
use crate::utils::{j0_closed_form, j1_closed_form, recurrence_factor};

/// Fills `y[l] = j_l(x)` for `l = 0..y.len()` by downward recurrence.
///
/// The working buffer spans orders `0..=m_start + 1` with
/// `m_start = y.len() - 1 + seed_margin`; it is seeded with
/// `buf[m_start + 1] = 0`, `buf[m_start] = seed_value` and recursed down with
/// `f_{l-1} = (2l+1)/x · f_l - f_{l+1}`. Only the first `y.len()` entries
/// survive normalization. Requires `x != 0` and a non-empty `y`.
pub(crate) fn miller_downward<T: BesselFloat>(
    x: T,
    config: &MillerConfig<T>,
    y: &mut [T],
) -> Result<(), Error> {
    let n = y.len();
    if n == 0 {
        return Err(Error::InvalidOrder);
    }
    let lmax = n - 1;
    let m_start = lmax
        .checked_add(config.seed_margin)
        .ok_or(Error::InvalidOrder)?;
    let buf_len = m_start.checked_add(2).ok_or(Error::InvalidOrder)?;

    debug!(?x, lmax, m_start, "seeding downward recurrence");

    let mut buf = vec![T::zero(); buf_len];
    buf[m_start] = config.seed_value;

    let limit = T::rescale_limit();
    let shrink = limit.recip();
    for l in (1..=m_start).rev() {
        let next = recurrence_factor(l, x) * buf[l] - buf[l + 1];
        buf[l - 1] = next;
        if next.abs() > limit {
            // Everything above l-1 shares one scale; entries that underflow
            // here were negligible against the ones being kept.
            trace!(order = l - 1, "rescaling downward recurrence buffer");
            for v in &mut buf[l - 1..] {
                *v = *v * shrink;
            }
        }
    }

    let scale = match config.normalization {
        Normalization::Order0 => order0_scale(x, buf[0])?,
        Normalization::SumRule => sum_rule_scale(x, &buf[..=m_start])?,
    };

    for (out, raw) in y.iter_mut().zip(buf.iter()) {
        *out = *raw * scale;
    }
    Ok(())
}

/// Scale factor `(sin x / x) / f_0`.
fn order0_scale<T: BesselFloat>(x: T, f0: T) -> Result<T, Error> {
    if f0 == T::zero() || !f0.is_finite() {
        warn!(?x, ?f0, "downward recurrence reached order 0 with no usable value");
        return Err(Error::DegenerateNormalization);
    }
    let scale = j0_closed_form(x) / f0;
    if scale == T::zero() || !scale.is_finite() {
        warn!(?x, ?scale, "order-0 normalization produced a degenerate scale");
        return Err(Error::DegenerateNormalization);
    }
    Ok(scale)
}

/// Scale factor from `Σ_{l=0}^{m_start} (2l+1) f_l² = 1 / scale²`.
///
/// Squares are taken relative to the largest entry so the sum cannot
/// overflow. The sign follows whichever of the analytic j_0, j_1 has the
/// larger magnitude, or j_0 when the buffer holds only order 0.
fn sum_rule_scale<T: BesselFloat>(x: T, raw: &[T]) -> Result<T, Error> {
    let peak = raw.iter().fold(T::zero(), |acc, v| acc.max(v.abs()));
    if peak == T::zero() || !peak.is_finite() {
        warn!(?x, ?peak, "downward recurrence produced no usable values for the sum rule");
        return Err(Error::DegenerateNormalization);
    }

    let mut total = T::zero();
    for (l, v) in raw.iter().enumerate() {
        let r = *v / peak;
        total = total + T::from_order(2 * l + 1) * r * r;
    }
    let magnitude = (peak * total.sqrt()).recip();

    let j0 = j0_closed_form(x);
    let j1 = j1_closed_form(x);
    let (anchor, computed) = match raw.get(1) {
        Some(&f1) if j1.abs() > j0.abs() => (j1, f1),
        _ => (j0, raw[0]),
    };
    if computed == T::zero() || !magnitude.is_finite() || magnitude == T::zero() {
        warn!(?x, ?magnitude, "sum-rule normalization produced a degenerate scale");
        return Err(Error::DegenerateNormalization);
    }

    if (anchor < T::zero()) != (computed < T::zero()) {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}
