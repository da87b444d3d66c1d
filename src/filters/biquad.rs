//! Direct-form-I biquad section.

use crate::FilterError;
use crate::filters::{Coefficients, Filter, FilterParams};

/// A second-order IIR filter section in Direct Form I.
///
/// The section evaluates
///
/// ```text
/// y[n] = a0*x[n] + a1*x[n-1] + a2*x[n-2] - b1*y[n-1] - b2*y[n-2]
/// ```
///
/// with separate delay lines for input and output history. Each instance
/// owns its four delay registers exclusively; run one instance per channel
/// and per thread. State persists across [`process`](Filter::process) calls,
/// so a signal can be filtered in chunks.
///
/// Output is plain f64 arithmetic with no clamping: peaking and shelving
/// coefficient sets can legitimately push samples outside [-1, 1].
///
/// # Examples
///
/// ```
/// use cutoff::{Biquad, Filter, FilterKind, FilterParams};
///
/// let params = FilterParams::new(FilterKind::LowPass, 1000.0, 44100.0);
/// let mut filter = Biquad::from_params(&params).unwrap();
/// let output = filter.process(&[0.0, 1.0, 0.0, 0.0]);
/// assert_eq!(output.len(), 4);
/// ```
pub struct Biquad {
    coeffs: Coefficients,

    // Delay registers: input and output history
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Biquad {
    /// Creates a section from an already-derived coefficient set.
    pub fn new(coeffs: Coefficients) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Derives coefficients for `params` and builds a section from them.
    pub fn from_params(params: &FilterParams) -> Result<Self, FilterError> {
        Ok(Self::new(params.derive()?))
    }

    /// The coefficient set currently driving the section.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }

    /// Swaps in a new coefficient set without touching the delay registers.
    ///
    /// Keeping the registers lets parameters change mid-stream without a
    /// discontinuity; call [`reset`](Filter::reset) afterwards if the old
    /// history should be discarded instead.
    pub fn set_coefficients(&mut self, coeffs: Coefficients) {
        self.coeffs = coeffs;
    }
}

impl Filter for Biquad {
    fn tick(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let output = c.a0 * input + c.a1 * self.x1 + c.a2 * self.x2
            - c.b1 * self.y1
            - c.b2 * self.y2;

        // Shift-then-store, output side first. Reordering this (storing the
        // new input before computing the output) corrupts the recurrence.
        self.y2 = self.y1;
        self.y1 = output;
        self.x2 = self.x1;
        self.x1 = input;

        output
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}
