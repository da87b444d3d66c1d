//! First-order feed-forward and feedback filters.

use crate::filters::Filter;

/// First-order feed-forward filter: `y[n] = a0*x[n] + a1*x[n-1]`.
///
/// The simplest FIR stage - one input delay register, no feedback. With
/// `a0 = a1 = 0.5` it is a two-point moving average (a gentle low-pass).
///
/// # Examples
///
/// ```
/// use cutoff::{Filter, OneZero};
///
/// let mut filter = OneZero::new(0.5, 0.5);
/// assert_eq!(filter.process(&[1.0, 0.0]), vec![0.5, 0.5]);
/// ```
pub struct OneZero {
    a0: f64,
    a1: f64,
    x1: f64,
}

impl OneZero {
    /// Creates a one-zero filter with the given feed-forward gains.
    pub fn new(a0: f64, a1: f64) -> Self {
        Self { a0, a1, x1: 0.0 }
    }
}

impl Filter for OneZero {
    fn tick(&mut self, input: f64) -> f64 {
        let output = self.a0 * input + self.a1 * self.x1;
        self.x1 = input;
        output
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
    }
}

/// First-order feedback filter: `y[n] = a0*x[n] - b1*y[n-1]`.
///
/// One output delay register. The impulse response is infinite: each output
/// sample feeds back into the next, scaled by `-b1`. Stable for |b1| < 1.
pub struct OnePole {
    a0: f64,
    b1: f64,
    y1: f64,
}

impl OnePole {
    /// Creates a one-pole filter with the given feed-forward and feedback gains.
    pub fn new(a0: f64, b1: f64) -> Self {
        Self { a0, b1, y1: 0.0 }
    }
}

impl Filter for OnePole {
    fn tick(&mut self, input: f64) -> f64 {
        let output = self.a0 * input - self.b1 * self.y1;
        self.y1 = output;
        output
    }

    fn reset(&mut self) {
        self.y1 = 0.0;
    }
}
