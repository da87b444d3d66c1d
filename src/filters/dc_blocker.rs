//! DC-blocking filter.

use crate::filters::Filter;

/// First-order high-pass that removes DC offset while passing audio-band
/// content untouched:
///
/// ```text
/// y[n] = x[n] - x[n-1] + pole*y[n-1]
/// ```
///
/// The pole position trades DC-rejection depth against how long the filter
/// rings after a transient. The default of 0.995 puts the cutoff around
/// 7 Hz at a 44.1 kHz sample rate; see
/// <https://ccrma.stanford.edu/~jos/filters/DC_Blocker.html> for the
/// rationale.
///
/// Each instance owns its two delay registers; create one per channel.
pub struct DcBlocker {
    pole: f64,
    x1: f64,
    y1: f64,
}

impl Default for DcBlocker {
    fn default() -> Self {
        Self::new()
    }
}

impl DcBlocker {
    /// Default pole position.
    pub const DEFAULT_POLE: f64 = 0.995;

    /// Creates a DC blocker with the default pole of 0.995.
    pub fn new() -> Self {
        Self::with_pole(Self::DEFAULT_POLE)
    }

    /// Creates a DC blocker with a specific pole position.
    ///
    /// Values closer to 1.0 reject DC more deeply but take longer to settle.
    pub fn with_pole(pole: f64) -> Self {
        Self {
            pole,
            x1: 0.0,
            y1: 0.0,
        }
    }

    /// The current pole position.
    pub fn pole(&self) -> f64 {
        self.pole
    }

    /// Moves the pole without touching the delay registers.
    pub fn set_pole(&mut self, pole: f64) {
        self.pole = pole;
    }
}

impl Filter for DcBlocker {
    fn tick(&mut self, input: f64) -> f64 {
        let output = input - self.x1 + self.pole * self.y1;
        self.x1 = input;
        self.y1 = output;
        output
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.y1 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pole() {
        assert_eq!(DcBlocker::new().pole(), 0.995);
    }

    #[test]
    fn test_removes_constant_offset() {
        let mut blocker = DcBlocker::new();
        let mut last = 1.0;
        for _ in 0..20000 {
            last = blocker.tick(1.0);
        }
        assert!(last.abs() < 1e-3, "residual DC {last}");
    }

    #[test]
    fn test_preserves_audio_band_content() {
        // 1 kHz sine at 44.1 kHz should come through at nearly full amplitude
        // once the transient dies down.
        let mut blocker = DcBlocker::new();
        let mut peak: f64 = 0.0;
        for n in 0..44100 {
            let x = (2.0 * std::f64::consts::PI * 1000.0 * n as f64 / 44100.0).sin();
            let y = blocker.tick(x);
            if n > 4410 {
                peak = peak.max(y.abs());
            }
        }
        assert!((peak - 1.0).abs() < 0.01, "peak {peak}");
    }

    #[test]
    fn test_first_output_passes_input() {
        // With zeroed registers, y[0] = x[0].
        let mut blocker = DcBlocker::new();
        assert_eq!(blocker.tick(0.25), 0.25);
    }

    #[test]
    fn test_reset_keeps_pole() {
        let mut blocker = DcBlocker::with_pole(0.9);
        blocker.process(&[1.0, 1.0, 1.0]);
        blocker.reset();
        assert_eq!(blocker.pole(), 0.9);
        assert_eq!(blocker.tick(1.0), 1.0);
    }

    #[test]
    fn test_lower_pole_settles_faster() {
        let settle = |pole: f64| {
            let mut blocker = DcBlocker::with_pole(pole);
            let mut steps = 0;
            loop {
                steps += 1;
                if blocker.tick(1.0).abs() < 0.01 || steps > 100_000 {
                    return steps;
                }
            }
        };
        assert!(settle(0.9) < settle(0.995));
    }
}
