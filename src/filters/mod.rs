//! Stateful filter primitives.
//!
//! This module provides:
//! - [`Filter`] — the common per-sample / whole-buffer interface
//! - [`FilterKind`], [`FilterParams`], [`Coefficients`] — the coefficient
//!   derivation catalog
//! - [`Biquad`] — direct-form-I second-order section
//! - [`OneZero`], [`OnePole`] — first-order feed-forward and feedback filters
//! - [`DcBlocker`] — first-order DC-removal high-pass
//! - [`Resonator`] — two-pole resonant band-pass

mod biquad;
mod coeffs;
mod dc_blocker;
mod first_order;
mod kind;
mod resonator;

pub use biquad::Biquad;
pub use coeffs::{Coefficients, FilterParams};
pub use dc_blocker::DcBlocker;
pub use first_order::{OnePole, OneZero};
pub use kind::FilterKind;
pub use resonator::Resonator;

/// Common interface for all stateful filters.
///
/// A filter consumes samples one at a time through [`tick`](Filter::tick),
/// carrying its delay registers between calls. That makes chunked
/// (streaming) processing transparent: filtering two slices back to back is
/// identical to filtering their concatenation.
pub trait Filter {
    /// Filters a single sample, advancing the delay registers.
    fn tick(&mut self, input: f64) -> f64;

    /// Zeroes the delay registers, keeping coefficients and configuration.
    ///
    /// After a reset the filter behaves exactly like a freshly constructed
    /// instance, so it can be reused across independent signals.
    fn reset(&mut self);

    /// Filters a whole slice, returning a new output of equal length.
    ///
    /// The input is never modified. An empty slice yields an empty output.
    fn process(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.tick(x)).collect()
    }
}
