//! Tests for the minimum-phase transform


use approx::{assert_abs_diff_eq, assert_relative_eq};

use blep_table::dsp::fir::LowpassPrototype;
use blep_table::dsp::min_phase::{fold_causal, minimum_phase, minimum_phase_floored};
use blep_table::dsp::{
    ANALYSIS_RATE, KAISER_BETA, MAGNITUDE_FLOOR, OVERSAMPLING, PROTOTYPE_CUTOFF_HZ, PROTOTYPE_TAPS,
};
use blep_table::utils::fft::FftPair;
use blep_table::Error;

/// FIR with real zeros kept well away from the unit circle, some inside and
/// some outside, so the filter is of mixed phase.
fn mixed_phase_fir(rng: &mut random::Random, zeros: usize, len: usize) -> Vec<f64> {
    let mut h = vec![1.0];
    for _ in 0..zeros {
        let radius = if rng.get_float() < 0.5 {
            0.2 + 0.4 * rng.get_float()
        } else {
            1.7 + 2.3 * rng.get_float()
        };
        let zero = if rng.get_float() < 0.5 { radius } else { -radius };

        let mut next = vec![0.0; h.len() + 1];
        for (n, c) in h.iter().enumerate() {
            next[n] += c;
            next[n + 1] -= zero * c;
        }
        h = next;
    }
    h.resize(len, 0.0);
    h
}

fn magnitudes(x: &[f64]) -> Vec<f64> {
    let mut fft = FftPair::new(x.len());
    fft.forward_real(x).iter().map(|c| c.norm()).collect()
}

fn cumulative_energy(x: &[f64]) -> Vec<f64> {
    x.iter()
        .scan(0.0, |acc, v| {
            *acc += v * v;
            Some(*acc)
        })
        .collect()
}

#[test]
fn preserves_magnitude_spectrum() {
    let mut rng = random::Random::new(0x21);

    for _ in 0..8 {
        let x = mixed_phase_fir(&mut rng, 6, 16);
        let y = minimum_phase(&x, 8).unwrap();
        assert_eq!(y.len(), x.len());

        for (a, b) in magnitudes(&y).iter().zip(magnitudes(&x).iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-6);
        }
    }
}

#[test]
fn concentrates_energy_early() {
    let mut rng = random::Random::new(1234);
    let x = mixed_phase_fir(&mut rng, 6, 16);
    let y = minimum_phase(&x, 8).unwrap();

    let total = cumulative_energy(&x)[x.len() - 1];
    for (e_min, e_orig) in cumulative_energy(&y).iter().zip(cumulative_energy(&x).iter()) {
        assert!(*e_min >= *e_orig - 1e-9 * total);
    }
}

#[test]
fn unit_impulse_is_unchanged() {
    let y = minimum_phase(&[1.0, 0.0, 0.0, 0.0], 8).unwrap();

    for (a, b) in y.iter().zip([1.0, 0.0, 0.0, 0.0].iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn reverses_maximum_phase_pair() {
    // 0.5 + z^-1 has its zero at -2; the minimum-phase twin is 1 + 0.5 z^-1.
    let y = minimum_phase(&[0.5, 1.0], 64).unwrap();

    assert_abs_diff_eq!(y[0], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y[1], 0.5, epsilon = 1e-9);
}

#[test]
fn windowed_sinc_moves_to_start() {
    let prototype =
        LowpassPrototype::new(256, PROTOTYPE_CUTOFF_HZ * 4.0, ANALYSIS_RATE, KAISER_BETA)
            .design()
            .unwrap();
    let y = minimum_phase_floored(&prototype, OVERSAMPLING, MAGNITUDE_FLOOR).unwrap();

    assert!(y.iter().all(|v| v.is_finite()));

    let centroid = |x: &[f64]| {
        let energy: f64 = x.iter().map(|v| v * v).sum();
        x.iter()
            .enumerate()
            .map(|(n, v)| n as f64 * v * v)
            .sum::<f64>()
            / energy
    };
    assert_relative_eq!(centroid(&prototype), 127.5, max_relative = 1e-9);
    assert!(centroid(&y) < 64.0);

    // Unity DC gain survives.
    let dc: f64 = y.iter().sum();
    assert_abs_diff_eq!(dc, 1.0, epsilon = 1e-3);
}

#[test]
fn zero_bin_is_a_domain_error() {
    // A first difference has no DC content.
    match minimum_phase(&[1.0, -1.0], 8) {
        Err(Error::Domain { bin }) => assert_eq!(bin, 0),
        other => panic!("expected domain error, got {other:?}"),
    }

    assert!(matches!(
        minimum_phase(&[0.0; 8], 8),
        Err(Error::Domain { .. })
    ));
}

#[test]
fn reference_prototype_needs_the_floor() {
    let prototype = LowpassPrototype::new(
        PROTOTYPE_TAPS,
        PROTOTYPE_CUTOFF_HZ,
        ANALYSIS_RATE,
        KAISER_BETA,
    )
    .design()
    .unwrap();

    // An even-length symmetric FIR has a zero at Nyquist.
    let alternating: f64 = prototype
        .iter()
        .enumerate()
        .map(|(n, h)| if n % 2 == 0 { *h } else { -*h })
        .sum();
    assert_abs_diff_eq!(alternating, 0.0, epsilon = 1e-15);

    // Whether the FFT resolves it to exactly zero is up to rounding, but the
    // strict transform can only trip over that bin.
    let nyquist = PROTOTYPE_TAPS * OVERSAMPLING / 2;
    match minimum_phase(&prototype, OVERSAMPLING) {
        Ok(_) => {}
        Err(Error::Domain { bin }) => assert_eq!(bin, nyquist),
        Err(other) => panic!("expected domain error, got {other:?}"),
    }

    let y = minimum_phase_floored(&prototype, OVERSAMPLING, MAGNITUDE_FLOOR).unwrap();
    assert_eq!(y.len(), PROTOTYPE_TAPS);
    assert!(y.iter().all(|v| v.is_finite()));
}

#[test]
fn floor_bridges_isolated_zero_bins() {
    let y = minimum_phase_floored(&[1.0, -1.0], 8, MAGNITUDE_FLOOR).unwrap();
    assert!(y.iter().all(|v| v.is_finite()));

    // Nothing to scale the floor against.
    assert!(matches!(
        minimum_phase_floored(&[0.0; 8], 8, MAGNITUDE_FLOOR),
        Err(Error::Domain { .. })
    ));
}

#[test]
fn rejects_degenerate_input() {
    assert!(matches!(minimum_phase(&[], 8), Err(Error::EmptySignal)));
    assert!(matches!(
        minimum_phase(&[1.0], 0),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        minimum_phase_floored(&[1.0], 8, -1.0),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn folds_cepstrum_onto_causal_side() {
    let mut cepstrum = [1.0; 8];
    fold_causal(&mut cepstrum);

    assert_eq!(cepstrum, [1.0, 2.0, 2.0, 2.0, 1.0, 0.0, 0.0, 0.0]);
}
