//! Cutoff - classic digital audio filter primitives
//!
//! This library provides the standard building blocks of an audio filter
//! chain: a biquad (direct-form-I second-order section) with a catalog of
//! closed-form coefficient derivations, first-order one-zero and one-pole
//! filters, a DC blocker, a two-pole resonator, and the synthetic test
//! signals used to exercise them.
//!
//! # Examples
//!
//! ```
//! use cutoff::{Biquad, Filter, FilterKind, FilterParams, signals};
//!
//! let params = FilterParams::new(FilterKind::LowPass, 1000.0, 44100.0).with_q(0.707);
//! let mut filter = Biquad::from_params(&params).unwrap();
//! let output = filter.process(&signals::impulse());
//! assert_eq!(output.len(), signals::SIGNAL_LEN);
//! ```

pub mod error;
pub mod filters;
pub mod signals;

// Re-export commonly used types at the crate root
pub use error::FilterError;
pub use filters::{
    Biquad, Coefficients, DcBlocker, Filter, FilterKind, FilterParams, OnePole, OneZero,
    Resonator,
};
