//! Machine constants and the `BesselFloat` trait.

use core::fmt;

use num_traits::Float;

/// Floating-point trait for spherical Bessel recurrences.
///
/// Implemented for `f64` and `f32`. Provides the machine constants used by
/// the downward recurrence (overflow rescaling) and by the reference
/// summations (termination and conditioning).
pub trait BesselFloat: Float + fmt::Debug + fmt::Display + fmt::LowerExp + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it truncates via `as f32`.
    fn from_f64(x: f64) -> Self;

    /// Converts a recurrence index into `Self`.
    #[inline]
    fn from_order(l: usize) -> Self {
        Self::from_f64(l as f64)
    }

    /// Magnitude above which the downward recurrence rescales its buffer.
    ///
    /// Kept well below `sqrt(MACH_HUGE)` so that the next recurrence step,
    /// and the squares taken by sum-rule normalization, stay finite.
    fn rescale_limit() -> Self;
}

impl BesselFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn rescale_limit() -> f64 {
        1.0e+150
    }
}

#[allow(clippy::excessive_precision)]
impl BesselFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn rescale_limit() -> f32 {
        1.0e+18
    }
}
