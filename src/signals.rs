//! Synthetic test signals.
//!
//! Fixed 500-sample vectors for exercising filters at known frequencies:
//! alternating samples sit exactly at Nyquist, a 4-sample cycle at half
//! Nyquist, an 8-sample cycle at a quarter of Nyquist, plus the unit
//! impulse and unit step. All are pure functions of nothing - call them as
//! often as you like.

/// Length of every generated test signal.
pub const SIGNAL_LEN: usize = 500;

/// Alternating +1/-1 - a full-scale tone exactly at the Nyquist frequency.
pub fn nyquist() -> Vec<f64> {
    (0..SIGNAL_LEN)
        .map(|n| if n % 2 == 0 { 1.0 } else { -1.0 })
        .collect()
}

/// A 0, 1, 0, -1 cycle - a tone at half the Nyquist frequency.
pub fn half_nyquist() -> Vec<f64> {
    const CYCLE: [f64; 4] = [0.0, 1.0, 0.0, -1.0];
    (0..SIGNAL_LEN).map(|n| CYCLE[n % 4]).collect()
}

/// An 8-sample sine cycle - a tone at a quarter of the Nyquist frequency.
///
/// Uses the book's 3-digit 0.707 sample values rather than sin(pi/4).
pub fn quarter_nyquist() -> Vec<f64> {
    const CYCLE: [f64; 8] = [0.0, 0.707, 1.0, 0.707, 0.0, -0.707, -1.0, -0.707];
    (0..SIGNAL_LEN).map(|n| CYCLE[n % 8]).collect()
}

/// Unit impulse at n = 1, zero elsewhere.
pub fn impulse() -> Vec<f64> {
    let mut out = vec![0.0; SIGNAL_LEN];
    out[1] = 1.0;
    out
}

/// Unit step: zero at n = 0, one thereafter.
pub fn step() -> Vec<f64> {
    let mut out = vec![1.0; SIGNAL_LEN];
    out[0] = 0.0;
    out
}
