//! Biquad coefficient derivation.
//!
//! This module turns a [`FilterParams`] description into the five
//! coefficients of a direct-form-I second-order section, using the
//! closed-form formulas from <https://www.earlevel.com/main/2011/01/02/biquad-formulas/>
//! plus two one-pole kinds derived by direct pole placement. Derivation is a
//! pure function: no state, safe to call from any thread.

use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

use log::debug;

use crate::FilterError;
use crate::filters::FilterKind;

/// Parameters describing a filter to derive coefficients for.
///
/// `q` and `peak_gain_db` are only consumed by the kinds that define them
/// (see [`FilterKind::uses_q`] and [`FilterKind::uses_gain`]); they are
/// ignored otherwise, so the builder-style constructors below can leave them
/// at their defaults.
///
/// # Examples
///
/// ```
/// use cutoff::{FilterKind, FilterParams};
///
/// let params = FilterParams::new(FilterKind::Peak, 1000.0, 44100.0)
///     .with_q(2.0)
///     .with_gain_db(6.0);
/// let coeffs = params.derive().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Which coefficient derivation to use.
    pub kind: FilterKind,
    /// Corner (or center) frequency in Hz. Must be positive and, for
    /// meaningful results, below fs/2.
    pub fc: f64,
    /// Sample rate in Hz. Must be positive.
    pub fs: f64,
    /// Quality factor. Must be positive for the kinds that use it.
    pub q: f64,
    /// Gain at the peak or shelf, in dB. Sign selects boost vs. cut.
    pub peak_gain_db: f64,
}

impl FilterParams {
    /// Creates parameters with a default q of 1/sqrt(2) and 0 dB gain.
    pub fn new(kind: FilterKind, fc: f64, fs: f64) -> Self {
        Self {
            kind,
            fc,
            fs,
            q: FRAC_1_SQRT_2,
            peak_gain_db: 0.0,
        }
    }

    /// Sets the quality factor.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the peak/shelf gain in dB.
    pub fn with_gain_db(mut self, peak_gain_db: f64) -> Self {
        self.peak_gain_db = peak_gain_db;
        self
    }

    /// Derives the coefficient set for these parameters.
    ///
    /// Shorthand for [`Coefficients::derive`].
    pub fn derive(&self) -> Result<Coefficients, FilterError> {
        Coefficients::derive(self)
    }
}

/// The five gains of a direct-form-I second-order section.
///
/// `a` coefficients are feed-forward (applied to input history), `b`
/// coefficients are feedback (applied to output history). The section is
/// normalized so the output's own coefficient is 1. First-order derivations
/// leave the unused entries at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub b2: f64,
}

impl Coefficients {
    /// Derives coefficients for the given parameters.
    ///
    /// Fails fast on parameters that would poison the math: a non-positive
    /// sample rate or corner frequency, or a non-positive q for a kind that
    /// uses one. A corner at or above Nyquist, or a q small enough to push
    /// the section toward instability, still produces mathematically defined
    /// coefficients; keeping those meaningful is the caller's responsibility.
    ///
    /// The derived values are reported on the `log` facade at debug level.
    pub fn derive(params: &FilterParams) -> Result<Coefficients, FilterError> {
        let FilterParams {
            kind,
            fc,
            fs,
            q,
            peak_gain_db,
        } = *params;

        // `!(x > 0.0)` also rejects NaN.
        if !(fs > 0.0) {
            return Err(FilterError::InvalidSampleRate(fs));
        }
        if !(fc > 0.0) {
            return Err(FilterError::InvalidCornerFrequency(fc));
        }
        if kind.uses_q() && !(q > 0.0) {
            return Err(FilterError::InvalidQ { kind, q });
        }

        // Bilinear-transform prewarped corner and linear gain magnitude.
        let k = (PI * fc / fs).tan();
        let v = 10f64.powf(peak_gain_db.abs() / 20.0);
        let boost = peak_gain_db >= 0.0;

        let coeffs = match kind {
            FilterKind::OnePoleLowPass => {
                let pole = (-2.0 * PI * fc / fs).exp();
                Coefficients {
                    a0: 1.0 - pole,
                    a1: 0.0,
                    a2: 0.0,
                    b1: -pole,
                    b2: 0.0,
                }
            }
            FilterKind::OnePoleHighPass => {
                let pole = -(-2.0 * PI * (0.5 - fc / fs)).exp();
                Coefficients {
                    a0: 1.0 + pole,
                    a1: 0.0,
                    a2: 0.0,
                    b1: -pole,
                    b2: 0.0,
                }
            }
            FilterKind::FirstOrderLowPass => {
                let norm = 1.0 / (1.0 / k + 1.0);
                Coefficients {
                    a0: norm,
                    a1: norm,
                    a2: 0.0,
                    b1: (1.0 - 1.0 / k) * norm,
                    b2: 0.0,
                }
            }
            FilterKind::FirstOrderHighPass => {
                let norm = 1.0 / (k + 1.0);
                Coefficients {
                    a0: norm,
                    a1: -norm,
                    a2: 0.0,
                    b1: (k - 1.0) * norm,
                    b2: 0.0,
                }
            }
            FilterKind::LowPass => {
                let norm = 1.0 / (1.0 + k / q + k * k);
                let a0 = k * k * norm;
                Coefficients {
                    a0,
                    a1: 2.0 * a0,
                    a2: a0,
                    b1: 2.0 * (k * k - 1.0) * norm,
                    b2: (1.0 - k / q + k * k) * norm,
                }
            }
            FilterKind::HighPass => {
                let norm = 1.0 / (1.0 + k / q + k * k);
                let a0 = norm;
                Coefficients {
                    a0,
                    a1: -2.0 * a0,
                    a2: a0,
                    b1: 2.0 * (k * k - 1.0) * norm,
                    b2: (1.0 - k / q + k * k) * norm,
                }
            }
            FilterKind::BandPass => {
                let norm = 1.0 / (1.0 + k / q + k * k);
                let a0 = k / q * norm;
                Coefficients {
                    a0,
                    a1: 0.0,
                    a2: -a0,
                    b1: 2.0 * (k * k - 1.0) * norm,
                    b2: (1.0 - k / q + k * k) * norm,
                }
            }
            FilterKind::Notch => {
                let norm = 1.0 / (1.0 + k / q + k * k);
                let a0 = (1.0 + k * k) * norm;
                let a1 = 2.0 * (k * k - 1.0) * norm;
                Coefficients {
                    a0,
                    a1,
                    a2: a0,
                    b1: a1,
                    b2: (1.0 - k / q + k * k) * norm,
                }
            }
            FilterKind::Peak => {
                if boost {
                    let norm = 1.0 / (1.0 + 1.0 / q * k + k * k);
                    let a1 = 2.0 * (k * k - 1.0) * norm;
                    Coefficients {
                        a0: (1.0 + v / q * k + k * k) * norm,
                        a1,
                        a2: (1.0 - v / q * k + k * k) * norm,
                        b1: a1,
                        b2: (1.0 - 1.0 / q * k + k * k) * norm,
                    }
                } else {
                    let norm = 1.0 / (1.0 + v / q * k + k * k);
                    let a1 = 2.0 * (k * k - 1.0) * norm;
                    Coefficients {
                        a0: (1.0 + 1.0 / q * k + k * k) * norm,
                        a1,
                        a2: (1.0 - 1.0 / q * k + k * k) * norm,
                        b1: a1,
                        b2: (1.0 - v / q * k + k * k) * norm,
                    }
                }
            }
            FilterKind::LowShelf => {
                let sqrt_2v = (2.0 * v).sqrt();
                if boost {
                    let norm = 1.0 / (1.0 + SQRT_2 * k + k * k);
                    Coefficients {
                        a0: (1.0 + sqrt_2v * k + v * k * k) * norm,
                        a1: 2.0 * (v * k * k - 1.0) * norm,
                        a2: (1.0 - sqrt_2v * k + v * k * k) * norm,
                        b1: 2.0 * (k * k - 1.0) * norm,
                        b2: (1.0 - SQRT_2 * k + k * k) * norm,
                    }
                } else {
                    let norm = 1.0 / (1.0 + sqrt_2v * k + v * k * k);
                    Coefficients {
                        a0: (1.0 + SQRT_2 * k + k * k) * norm,
                        a1: 2.0 * (k * k - 1.0) * norm,
                        a2: (1.0 - SQRT_2 * k + k * k) * norm,
                        b1: 2.0 * (v * k * k - 1.0) * norm,
                        b2: (1.0 - sqrt_2v * k + v * k * k) * norm,
                    }
                }
            }
            FilterKind::HighShelf => {
                let sqrt_2v = (2.0 * v).sqrt();
                if boost {
                    let norm = 1.0 / (1.0 + SQRT_2 * k + k * k);
                    Coefficients {
                        a0: (v + sqrt_2v * k + k * k) * norm,
                        a1: 2.0 * (k * k - v) * norm,
                        a2: (v - sqrt_2v * k + k * k) * norm,
                        b1: 2.0 * (k * k - 1.0) * norm,
                        b2: (1.0 - SQRT_2 * k + k * k) * norm,
                    }
                } else {
                    let norm = 1.0 / (v + sqrt_2v * k + k * k);
                    Coefficients {
                        a0: (1.0 + SQRT_2 * k + k * k) * norm,
                        a1: 2.0 * (k * k - 1.0) * norm,
                        a2: (1.0 - SQRT_2 * k + k * k) * norm,
                        b1: 2.0 * (k * k - v) * norm,
                        b2: (v - sqrt_2v * k + k * k) * norm,
                    }
                }
            }
            FilterKind::FirstOrderLowShelf => {
                if boost {
                    let norm = 1.0 / (k + 1.0);
                    Coefficients {
                        a0: (k * v + 1.0) * norm,
                        a1: (k * v - 1.0) * norm,
                        a2: 0.0,
                        b1: (k - 1.0) * norm,
                        b2: 0.0,
                    }
                } else {
                    let norm = 1.0 / (k * v + 1.0);
                    Coefficients {
                        a0: (k + 1.0) * norm,
                        a1: (k - 1.0) * norm,
                        a2: 0.0,
                        b1: (k * v - 1.0) * norm,
                        b2: 0.0,
                    }
                }
            }
            FilterKind::FirstOrderHighShelf => {
                if boost {
                    let norm = 1.0 / (k + 1.0);
                    Coefficients {
                        a0: (k + v) * norm,
                        a1: (k - v) * norm,
                        a2: 0.0,
                        b1: (k - 1.0) * norm,
                        b2: 0.0,
                    }
                } else {
                    let norm = 1.0 / (k + v);
                    Coefficients {
                        a0: (k + 1.0) * norm,
                        a1: (k - 1.0) * norm,
                        a2: 0.0,
                        b1: (k - v) * norm,
                        b2: 0.0,
                    }
                }
            }
            FilterKind::AllPass => {
                let norm = 1.0 / (1.0 + k / q + k * k);
                let a0 = (1.0 - k / q + k * k) * norm;
                let a1 = 2.0 * (k * k - 1.0) * norm;
                Coefficients {
                    a0,
                    a1,
                    a2: 1.0,
                    b1: a1,
                    b2: a0,
                }
            }
            FilterKind::FirstOrderAllPass => {
                let a0 = (1.0 - k) / (1.0 + k);
                Coefficients {
                    a0,
                    a1: -1.0,
                    a2: 0.0,
                    b1: -a0,
                    b2: 0.0,
                }
            }
        };

        debug!(
            "{kind}: a0 = {}, a1 = {}, a2 = {}, b1 = {}, b2 = {}",
            coeffs.a0, coeffs.a1, coeffs.a2, coeffs.b1, coeffs.b2
        );

        Ok(coeffs)
    }

    /// Magnitude of the section's frequency response at `frequency` Hz.
    ///
    /// Evaluates |H(z)| at z = e^(jw), w = 2*pi*frequency/fs. Useful for
    /// inspecting a derived response without running samples through a
    /// filter.
    pub fn magnitude_at(&self, frequency: f64, fs: f64) -> f64 {
        let w = 2.0 * PI * frequency / fs;
        let (cos_w, sin_w) = (w.cos(), w.sin());
        let (cos_2w, sin_2w) = ((2.0 * w).cos(), (2.0 * w).sin());

        let num_re = self.a0 + self.a1 * cos_w + self.a2 * cos_2w;
        let num_im = -(self.a1 * sin_w + self.a2 * sin_2w);
        let den_re = 1.0 + self.b1 * cos_w + self.b2 * cos_2w;
        let den_im = -(self.b1 * sin_w + self.b2 * sin_2w);

        (num_re * num_re + num_im * num_im).sqrt()
            / (den_re * den_re + den_im * den_im).sqrt()
    }
}
