//! Error type for filter construction.

use crate::filters::FilterKind;
use thiserror::Error;

/// Errors raised when deriving filter coefficients from invalid parameters.
///
/// Derivation fails fast on parameters that would otherwise propagate NaN or
/// infinity through the coefficient math. Numerically degenerate but
/// well-defined parameters (a corner at or above Nyquist, a very small q) are
/// deliberately *not* errors; see [`Coefficients::derive`](crate::Coefficients::derive).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Sample rate must be positive.
    #[error("sample rate must be positive, got {0} Hz")]
    InvalidSampleRate(f64),

    /// Corner frequency must be positive.
    #[error("corner frequency must be positive, got {0} Hz")]
    InvalidCornerFrequency(f64),

    /// Quality factor must be positive for kinds that use it.
    #[error("{kind} filter requires a positive q, got {q}")]
    InvalidQ {
        /// The filter kind whose derivation needed q.
        kind: FilterKind,
        /// The rejected value.
        q: f64,
    },

    /// Resonator quality factor must be positive.
    #[error("resonator requires a positive q, got {0}")]
    InvalidResonatorQ(f64),
}
