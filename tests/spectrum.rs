// Test intent: verifies spectral derivations including edge cases.
use fourier_engine::spectrum::{
    amplitudes, bin_frequencies, one_sided_amplitudes, phases, powers, powers_db,
};
use fourier_engine::{Complex64, Fourier64, FourierError};
use std::f64::consts::PI;

fn sample_coefficients() -> Vec<Complex64> {
    vec![
        Complex64::new(3.0, 4.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, -2.0),
        Complex64::new(-0.5, -0.5),
        Complex64::new(0.0, 0.0),
    ]
}

#[test]
fn amplitude_and_power_are_consistent() {
    let coefs = sample_coefficients();
    let amps = amplitudes(&coefs);
    let pows = powers(&coefs);
    for ((c, a), p) in coefs.iter().zip(&amps).zip(&pows) {
        assert!((a - (c.re * c.re + c.im * c.im).sqrt()).abs() < 1e-12);
        assert!((p - a * a).abs() < 1e-12);
        assert!(*a >= 0.0 && *p >= 0.0);
    }
    assert!((amps[0] - 5.0).abs() < 1e-12);
    assert!((pows[0] - 25.0).abs() < 1e-12);
}

#[test]
fn phases_use_atan2() {
    let phases = phases(&sample_coefficients());
    assert!((phases[0] - 4.0f64.atan2(3.0)).abs() < 1e-12);
    assert!((phases[1] - PI).abs() < 1e-12);
    assert!((phases[2] + PI / 2.0).abs() < 1e-12);
    assert!((phases[3] + 3.0 * PI / 4.0).abs() < 1e-12);
    assert_eq!(phases[4], 0.0);
}

#[test]
fn negative_zero_imaginary_reports_positive_pi() {
    let phases = phases(&[Complex64::new(-2.0, -0.0)]);
    assert_eq!(phases[0], PI);
}

#[test]
fn empty_coefficients_give_empty_spectra() {
    let empty: [Complex64; 0] = [];
    assert!(amplitudes(&empty).is_empty());
    assert!(powers(&empty).is_empty());
    assert!(phases(&empty).is_empty());
    assert!(one_sided_amplitudes(&empty).is_empty());
    assert!(powers_db(&empty, -100.0).is_empty());
}

#[test]
fn one_sided_reads_sinusoid_amplitude() {
    let n = 16;
    let amplitude = 3.0;
    let signal: Vec<f64> = (0..n)
        .map(|m| amplitude * (2.0 * PI * 2.0 * m as f64 / n as f64).cos())
        .collect();
    let mut engine = Fourier64::new(n);
    engine.fft(&signal).unwrap();
    let spectrum = engine.one_sided_amplitudes();
    assert_eq!(spectrum.len(), n / 2 + 1);
    assert!((spectrum[2] - amplitude).abs() < 1e-9);
    for (k, a) in spectrum.iter().enumerate() {
        if k != 2 {
            assert!(a.abs() < 1e-9, "bin {k}: {a}");
        }
    }
}

#[test]
fn powers_db_clamps_silence() {
    let coefs = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1e-9, 0.0)];
    let db = powers_db(&coefs, -80.0);
    assert!(db[0].abs() < 1e-12);
    assert_eq!(db[1], -80.0);
    assert_eq!(db[2], -80.0);
}

#[test]
fn bin_frequencies_odd_length() {
    let freqs = bin_frequencies(5, 10.0f64).unwrap();
    assert_eq!(freqs, vec![0.0, 2.0, 4.0, -4.0, -2.0]);
}

#[test]
fn bin_frequencies_rejects_bad_rate() {
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(bin_frequencies(4, rate), Err(FourierError::InvalidSampleRate));
    }
    assert_eq!(bin_frequencies(0, 1.0f64), Ok(vec![]));
}
