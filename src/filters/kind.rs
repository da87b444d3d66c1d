//! Filter kind catalog.

use std::fmt;

/// The catalog of filter responses the coefficient deriver knows how to build.
///
/// Each variant selects one closed-form coefficient derivation. The first- and
/// second-order kinds share the same five-coefficient layout, so any of them
/// can drive a [`Biquad`](crate::Biquad); first-order kinds simply leave the
/// second-order coefficients at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// One-pole low-pass, pole placed directly from the corner frequency
    OnePoleLowPass,
    /// One-pole high-pass, pole placed directly from the corner frequency
    OnePoleHighPass,
    /// First-order (one-pole, one-zero) low-pass
    FirstOrderLowPass,
    /// First-order (one-pole, one-zero) high-pass
    FirstOrderHighPass,
    /// Second-order low-pass with resonance
    LowPass,
    /// Second-order high-pass with resonance
    HighPass,
    /// Second-order band-pass
    BandPass,
    /// Second-order notch (band-reject)
    Notch,
    /// Peaking EQ - boosts or cuts around the corner frequency
    Peak,
    /// Second-order low shelf
    LowShelf,
    /// Second-order high shelf
    HighShelf,
    /// First-order low shelf
    FirstOrderLowShelf,
    /// First-order high shelf
    FirstOrderHighShelf,
    /// Second-order all-pass - flat magnitude, frequency-dependent phase
    AllPass,
    /// First-order all-pass
    FirstOrderAllPass,
}

impl FilterKind {
    /// Returns true if this kind's derivation consumes the quality factor.
    pub fn uses_q(&self) -> bool {
        matches!(
            self,
            FilterKind::LowPass
                | FilterKind::HighPass
                | FilterKind::BandPass
                | FilterKind::Notch
                | FilterKind::Peak
                | FilterKind::AllPass
        )
    }

    /// Returns true if this kind's derivation consumes the peak gain.
    ///
    /// These are the kinds whose derivation branches on the sign of the gain:
    /// boost and cut use different normalizations so that +G dB and -G dB
    /// responses mirror each other.
    pub fn uses_gain(&self) -> bool {
        matches!(
            self,
            FilterKind::Peak
                | FilterKind::LowShelf
                | FilterKind::HighShelf
                | FilterKind::FirstOrderLowShelf
                | FilterKind::FirstOrderHighShelf
        )
    }

    /// All kinds, in catalog order. Handy for iterating in tests.
    pub const ALL: [FilterKind; 15] = [
        FilterKind::OnePoleLowPass,
        FilterKind::OnePoleHighPass,
        FilterKind::FirstOrderLowPass,
        FilterKind::FirstOrderHighPass,
        FilterKind::LowPass,
        FilterKind::HighPass,
        FilterKind::BandPass,
        FilterKind::Notch,
        FilterKind::Peak,
        FilterKind::LowShelf,
        FilterKind::HighShelf,
        FilterKind::FirstOrderLowShelf,
        FilterKind::FirstOrderHighShelf,
        FilterKind::AllPass,
        FilterKind::FirstOrderAllPass,
    ];
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::OnePoleLowPass => "one-pole low-pass",
            FilterKind::OnePoleHighPass => "one-pole high-pass",
            FilterKind::FirstOrderLowPass => "first-order low-pass",
            FilterKind::FirstOrderHighPass => "first-order high-pass",
            FilterKind::LowPass => "low-pass",
            FilterKind::HighPass => "high-pass",
            FilterKind::BandPass => "band-pass",
            FilterKind::Notch => "notch",
            FilterKind::Peak => "peak",
            FilterKind::LowShelf => "low shelf",
            FilterKind::HighShelf => "high shelf",
            FilterKind::FirstOrderLowShelf => "first-order low shelf",
            FilterKind::FirstOrderHighShelf => "first-order high shelf",
            FilterKind::AllPass => "all-pass",
            FilterKind::FirstOrderAllPass => "first-order all-pass",
        };
        f.write_str(name)
    }
}
