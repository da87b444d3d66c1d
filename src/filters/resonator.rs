//! Two-pole resonator.

use std::f64::consts::PI;

use log::debug;

use crate::FilterError;
use crate::filters::Filter;

/// A two-pole resonant band-pass filter: `y[n] = a0*x[n] - b1*y[n-1] - b2*y[n-2]`.
///
/// Feedback-only (no input history), with the pole pair placed on the
/// resonant frequency and the pole radius set from the bandwidth `fc/q`.
/// The input gain `a0` is chosen so the peak of the response sits at unity.
///
/// # Examples
///
/// ```
/// use cutoff::{Filter, Resonator};
///
/// let mut resonator = Resonator::new(440.0, 44100.0, 10.0).unwrap();
/// let output = resonator.process(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(output.len(), 4);
/// ```
pub struct Resonator {
    a0: f64,
    b1: f64,
    b2: f64,
    y1: f64,
    y2: f64,
}

impl Resonator {
    /// Creates a resonator centered on `fc` Hz at sample rate `fs` with
    /// quality factor `q` (bandwidth = fc/q).
    pub fn new(fc: f64, fs: f64, q: f64) -> Result<Self, FilterError> {
        if !(fs > 0.0) {
            return Err(FilterError::InvalidSampleRate(fs));
        }
        if !(fc > 0.0) {
            return Err(FilterError::InvalidCornerFrequency(fc));
        }
        if !(q > 0.0) {
            return Err(FilterError::InvalidResonatorQ(q));
        }

        let theta_c = 2.0 * PI * fc / fs;
        let bw = fc / q;
        let b2 = (-2.0 * PI * bw / fs).exp();
        let b1 = (-4.0 * b2 / (1.0 + b2)) * theta_c.cos();
        let a0 = (1.0 - b2) * (1.0 - b1 * b1 / (4.0 * b2)).sqrt();

        debug!("resonator: theta_c = {theta_c}, bw = {bw}, a0 = {a0}, b1 = {b1}, b2 = {b2}");

        Ok(Self {
            a0,
            b1,
            b2,
            y1: 0.0,
            y2: 0.0,
        })
    }
}

impl Filter for Resonator {
    fn tick(&mut self, input: f64) -> f64 {
        let output = self.a0 * input - self.b1 * self.y1 - self.b2 * self.y2;
        self.y2 = self.y1;
        self.y1 = output;
        output
    }

    fn reset(&mut self) {
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}
