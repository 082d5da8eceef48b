//! Internal numerical routines.
//!
//! All functions are `pub(crate)` and not part of the public API.
//!
//! # Conventions
//!
//! The recurrences write into a caller-provided slice `y`, with `y[l]`
//! receiving order `l`; the requested `lmax` is `y.len() - 1`. Input
//! validation (x = 0, overflowing orders) happens in the upper-interface
//! modules `upward.rs` and `downward.rs` before these are called.
//!
//! The reference summations return a [`series::Summation`] carrying a
//! condition number, so the oracle can pick the better-conditioned one and
//! refuse to answer when neither can be trusted.

// Recurrences
pub(crate) mod miller;
pub(crate) mod upward;

// Reference summations
pub(crate) mod rayleigh;
pub(crate) mod series;
