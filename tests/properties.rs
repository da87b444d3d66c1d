//! Cross-cutting filter properties, checked over the whole kind catalog.

use cutoff::{Biquad, Filter, FilterKind, FilterParams, OnePole, OneZero, signals};

const FS: f64 = 44100.0;

/// Non-degenerate parameters for any kind: q and gain are set whether or not
/// the kind consumes them.
fn params(kind: FilterKind) -> FilterParams {
    FilterParams::new(kind, 1000.0, FS).with_q(1.2).with_gain_db(5.0)
}

fn test_input() -> Vec<f64> {
    (0..256).map(|n| (n as f64 * 0.11).sin() * 0.8).collect()
}

#[test]
fn zero_input_zero_state_yields_zero_output() {
    for kind in FilterKind::ALL {
        let mut filter = Biquad::from_params(&params(kind)).unwrap();
        for (n, y) in filter.process(&[0.0; 128]).into_iter().enumerate() {
            assert_eq!(y, 0.0, "{kind} sample {n}");
        }
    }
}

#[test]
fn scaling_input_scales_output() {
    const C: f64 = 3.5;
    let input = test_input();
    let scaled: Vec<f64> = input.iter().map(|x| x * C).collect();

    for kind in FilterKind::ALL {
        let mut filter = Biquad::from_params(&params(kind)).unwrap();
        let base = filter.process(&input);
        let mut filter = Biquad::from_params(&params(kind)).unwrap();
        let amplified = filter.process(&scaled);

        for (n, (y, cy)) in base.iter().zip(&amplified).enumerate() {
            assert!(
                (y * C - cy).abs() < 1e-9,
                "{kind} sample {n}: {} vs {}",
                y * C,
                cy
            );
        }
    }
}

#[test]
fn reset_is_equivalent_to_fresh_filter() {
    let input = test_input();
    for kind in FilterKind::ALL {
        let mut used = Biquad::from_params(&params(kind)).unwrap();
        used.process(&input);
        used.reset();

        let mut fresh = Biquad::from_params(&params(kind)).unwrap();
        assert_eq!(used.process(&input), fresh.process(&input), "{kind}");
    }
}

#[test]
fn chunked_processing_equals_whole_processing() {
    let input = test_input();
    for kind in FilterKind::ALL {
        let mut whole = Biquad::from_params(&params(kind)).unwrap();
        let expected = whole.process(&input);

        for split in [0, 1, 100, 255, 256] {
            let mut chunked = Biquad::from_params(&params(kind)).unwrap();
            let mut got = chunked.process(&input[..split]);
            got.extend(chunked.process(&input[split..]));
            assert_eq!(got, expected, "{kind} split at {split}");
        }
    }
}

#[test]
fn one_zero_golden_impulse_response() {
    let mut filter = OneZero::new(0.5, 0.5);
    let output = filter.process(&[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(output, vec![0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn one_pole_golden_impulse_response() {
    let mut filter = OnePole::new(0.5, 0.5);
    let output = filter.process(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(
        output,
        vec![0.0, 0.5, -0.25, 0.125, -0.0625, 0.03125, -0.015625, 0.0078125]
    );
}

#[test]
fn averaging_one_zero_cancels_nyquist() {
    // The two-point average has a zero exactly at Nyquist: the alternating
    // test signal comes out silent after the first sample.
    let mut filter = OneZero::new(0.5, 0.5);
    let output = filter.process(&signals::nyquist());
    for (n, y) in output.into_iter().enumerate().skip(1) {
        assert_eq!(y, 0.0, "sample {n}");
    }
}

#[test]
fn allpass_magnitude_is_flat() {
    for kind in [FilterKind::AllPass, FilterKind::FirstOrderAllPass] {
        let coeffs = params(kind).derive().unwrap();
        let mut freq = 20.0;
        while freq < FS / 2.0 {
            let mag = coeffs.magnitude_at(freq, FS);
            assert!(
                (mag - 1.0).abs() < 1e-9,
                "{kind} at {freq} Hz: magnitude {mag}"
            );
            freq *= 1.5;
        }
    }
}

#[test]
fn boost_and_cut_are_magnitude_inverses() {
    const GAIN_DB: f64 = 7.5;
    for kind in [
        FilterKind::Peak,
        FilterKind::LowShelf,
        FilterKind::HighShelf,
        FilterKind::FirstOrderLowShelf,
        FilterKind::FirstOrderHighShelf,
    ] {
        let boost = FilterParams::new(kind, 1000.0, FS)
            .with_q(1.2)
            .with_gain_db(GAIN_DB)
            .derive()
            .unwrap();
        let cut = FilterParams::new(kind, 1000.0, FS)
            .with_q(1.2)
            .with_gain_db(-GAIN_DB)
            .derive()
            .unwrap();

        for freq in [50.0, 250.0, 1000.0, 4000.0, 16000.0] {
            let product = boost.magnitude_at(freq, FS) * cut.magnitude_at(freq, FS);
            assert!(
                (product - 1.0).abs() < 1e-9,
                "{kind} at {freq} Hz: boost*cut = {product}"
            );
        }
    }
}

#[test]
fn every_kind_survives_the_standard_test_signals() {
    for kind in FilterKind::ALL {
        let mut filter = Biquad::from_params(&params(kind)).unwrap();
        for signal in [
            signals::nyquist(),
            signals::half_nyquist(),
            signals::quarter_nyquist(),
            signals::impulse(),
            signals::step(),
        ] {
            filter.reset();
            let output = filter.process(&signal);
            assert_eq!(output.len(), signal.len());
            assert!(
                output.iter().all(|y| y.is_finite()),
                "{kind} produced a non-finite sample"
            );
        }
    }
}
