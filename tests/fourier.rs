// Test intent: verifies engine lifecycle, padding and normalization behavior.
use fourier_engine::{
    Complex64, ExactPolicy, Fourier, Fourier32, Fourier64, FourierError, Radix2Policy,
};

const EPS: f64 = 1e-9;

fn assert_close(a: &[Complex64], b: &[Complex64], eps: f64) {
    assert_eq!(a.len(), b.len());
    for (k, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x.re - y.re).abs() < eps, "bin {k} re: {} vs {}", x.re, y.re);
        assert!((x.im - y.im).abs() < eps, "bin {k} im: {} vs {}", x.im, y.im);
    }
}

/// Inverse summation `Σₖ X[k]·rotor[k]^{-n}` used as an external oracle.
fn reconstruct(engine: &Fourier64<impl fourier_engine::FftPolicy<f64>>) -> Vec<f64> {
    let coefs = engine.fourier_coef();
    let rotors = engine.rotors();
    let n = engine.size();
    (0..n)
        .map(|m| {
            coefs
                .iter()
                .enumerate()
                .map(|(k, c)| c.mul(rotors[(k * m) % n].conj()))
                .fold(Complex64::zero(), |acc, z| acc + z)
                .re
        })
        .collect()
}

#[test]
fn fresh_engine_has_empty_spectra() {
    let engine = Fourier64::new(16);
    assert!(engine.fourier_coef().is_empty());
    assert!(engine.amplitudes().is_empty());
    assert!(engine.phases().is_empty());
    assert!(engine.powers().is_empty());
    assert!(engine.one_sided_amplitudes().is_empty());
}

#[test]
fn working_size_comes_from_policy() {
    assert_eq!(Fourier64::new(5).size(), 8);
    assert_eq!(Fourier64::new(0).size(), 1);
    let exact: Fourier<f64, ExactPolicy> = Fourier::with_policy(5, ExactPolicy);
    assert_eq!(exact.size(), 5);
    assert_eq!(exact.rotors().len(), 5);
}

#[test]
fn four_point_alternating_signal() {
    let mut engine = Fourier64::new(4);
    engine.dft(&[1.0f64, 0.0, -1.0, 0.0]).unwrap();
    let expected = [
        Complex64::new(0.0, 0.0),
        Complex64::new(0.5, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(0.5, 0.0),
    ];
    assert_close(&engine.fourier_coef(), &expected, EPS);

    let amps = engine.amplitudes();
    let powers = engine.powers();
    for (k, want) in [0.0, 0.5, 0.0, 0.5].iter().enumerate() {
        assert!((amps[k] - want).abs() < EPS, "amp {k}: {}", amps[k]);
        assert!((powers[k] - want * want).abs() < EPS, "power {k}: {}", powers[k]);
    }

    let one_sided = engine.one_sided_amplitudes();
    assert_eq!(one_sided.len(), 3);
    for (k, want) in [0.0, 1.0, 0.0].iter().enumerate() {
        assert!((one_sided[k] - want).abs() < EPS, "one-sided {k}: {}", one_sided[k]);
    }
}

#[test]
fn oversized_input_is_rejected() {
    let mut engine = Fourier64::new(4);
    engine.dft(&[1.0f64, 2.0, 3.0, 4.0]).unwrap();
    let before = engine.fourier_coef();

    let err = engine.dft(&[0.0f64; 5]).unwrap_err();
    assert_eq!(err, FourierError::OversizedInput { len: 5, size: 4 });
    assert_eq!(engine.fft(&[0.0f64; 5]), Err(FourierError::OversizedInput { len: 5, size: 4 }));
    assert_eq!(engine.size(), 4);
    assert_eq!(engine.fourier_coef(), before);
}

#[test]
fn short_input_matches_explicit_zero_padding() {
    let mut engine = Fourier64::new(8);
    engine.dft(&[3.0f64, -1.0, 2.5]).unwrap();
    let padded = engine.fourier_coef();
    engine.dft(&[3.0f64, -1.0, 2.5, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    assert_eq!(padded, engine.fourier_coef());

    engine.fft(&[3.0f64, -1.0, 2.5]).unwrap();
    assert_close(&engine.fourier_coef(), &padded, EPS);
}

#[test]
fn empty_input_is_all_zero() {
    let mut engine = Fourier64::new(4);
    engine.dft::<f64>(&[]).unwrap();
    assert_eq!(engine.fourier_coef(), vec![Complex64::zero(); 4]);
    engine.fft::<f64>(&[]).unwrap();
    assert_close(&engine.fourier_coef(), &[Complex64::zero(); 4], EPS);
}

#[test]
fn constant_signal_lands_in_dc_bin() {
    let c = 2.75;
    let mut engine = Fourier64::new(8);
    for run in 0..2 {
        if run == 0 {
            engine.dft(&[c; 8]).unwrap();
        } else {
            engine.fft(&[c; 8]).unwrap();
        }
        let coefs = engine.fourier_coef();
        assert!((coefs[0].re - c).abs() < EPS);
        assert!(coefs[0].im.abs() < EPS);
        for z in &coefs[1..] {
            assert!(z.re.abs() < EPS && z.im.abs() < EPS, "{z:?}");
        }
    }
}

#[test]
fn inverse_summation_recovers_input() {
    let signal = [0.3f64, -1.2, 4.0, 2.2, -0.7, 0.0, 1.1, 5.5, -3.3, 0.9, 2.0];
    let mut engine = Fourier64::new(signal.len());
    engine.dft(&signal).unwrap();
    let rebuilt = reconstruct(&engine);
    for (k, value) in rebuilt.iter().enumerate() {
        let want = signal.get(k).copied().unwrap_or(0.0);
        assert!((value - want).abs() < 1e-9, "sample {k}: {value} vs {want}");
    }
}

#[test]
fn direct_and_policy_paths_agree() {
    let signal: Vec<f64> = (0..20)
        .map(|i| (i as f64 * 0.37).sin() * 3.0 + (i % 3) as f64)
        .collect();

    let mut radix2: Fourier<f64, Radix2Policy> = Fourier::new(signal.len());
    radix2.dft(&signal).unwrap();
    let direct = radix2.fourier_coef();
    radix2.fft(&signal).unwrap();
    assert_close(&direct, &radix2.fourier_coef(), 1e-9);

    let mut exact: Fourier<f64, ExactPolicy> = Fourier::with_policy(signal.len(), ExactPolicy);
    exact.dft(&signal).unwrap();
    let direct = exact.fourier_coef();
    exact.fft(&signal).unwrap();
    assert_close(&direct, &exact.fourier_coef(), 1e-9);
}

#[test]
fn sine_phase_follows_positive_rotor_sign() {
    // sin(2πm/8) = (e^{iθ} - e^{-iθ}) / 2i; with rotors e^{+i2πk/N} bin 1 is +i/2.
    let signal: Vec<f64> = (0..8)
        .map(|m| (2.0 * std::f64::consts::PI * m as f64 / 8.0).sin())
        .collect();
    let mut engine = Fourier64::new(8);
    engine.fft(&signal).unwrap();
    let coefs = engine.fourier_coef();
    assert!((coefs[1].im - 0.5).abs() < EPS);
    assert!((coefs[7].im + 0.5).abs() < EPS);
    let phases = engine.phases();
    assert!((phases[1] - std::f64::consts::FRAC_PI_2).abs() < EPS);
    assert!((phases[7] + std::f64::consts::FRAC_PI_2).abs() < EPS);
}

#[test]
fn new_transform_replaces_previous_state() {
    let mut engine = Fourier64::new(4);
    engine.fft(&[1.0f64, 1.0, 1.0, 1.0]).unwrap();
    engine.fft(&[1.0f64]).unwrap();
    let coefs = engine.fourier_coef();
    for z in coefs {
        assert!((z.re - 0.25).abs() < EPS && z.im.abs() < EPS);
    }
}

#[test]
fn integer_samples_are_converted() {
    let mut from_ints = Fourier64::new(4);
    from_ints.fft(&[1i16, 0, -1, 0]).unwrap();
    let mut from_floats = Fourier64::new(4);
    from_floats.fft(&[1.0f64, 0.0, -1.0, 0.0]).unwrap();
    assert_eq!(from_ints.fourier_coef(), from_floats.fourier_coef());

    let mut from_bytes = Fourier64::new(4);
    from_bytes.dft(&[2u8, 2, 2, 2]).unwrap();
    assert!((from_bytes.fourier_coef()[0].re - 2.0).abs() < EPS);
}

#[test]
fn single_precision_engine() {
    let mut engine = Fourier32::new(8);
    engine.fft(&[1.0f32; 8]).unwrap();
    let amps = engine.amplitudes();
    assert!((amps[0] - 1.0).abs() < 1e-6);
    assert!(amps[1..].iter().all(|a| a.abs() < 1e-6));
}

#[test]
fn bin_frequencies_follow_working_size() {
    let engine = Fourier64::new(6);
    let freqs = engine.bin_frequencies(800.0).unwrap();
    assert_eq!(
        freqs,
        vec![0.0, 100.0, 200.0, 300.0, -400.0, -300.0, -200.0, -100.0]
    );
    assert_eq!(
        engine.bin_frequencies(0.0),
        Err(FourierError::InvalidSampleRate)
    );
}
