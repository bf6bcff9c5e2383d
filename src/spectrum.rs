//! Amplitude, phase and power spectra derived from normalized coefficients.
//!
//! All functions are pure and allocate a fresh output; nothing is cached.
//! An empty coefficient slice yields an empty spectrum.

use alloc::vec::Vec;

use crate::fourier::FourierError;
use crate::num::{Complex, Float};

/// Decibels per decade of power.
const DB_POWER_MULTIPLIER: f64 = 10.0;

/// `|X[k]| = sqrt(re² + im²)`.
pub fn amplitudes<T: Float>(coefficients: &[Complex<T>]) -> Vec<T> {
    coefficients.iter().map(|c| c.norm()).collect()
}

/// `amplitude[k]²`.
pub fn powers<T: Float>(coefficients: &[Complex<T>]) -> Vec<T> {
    amplitudes(coefficients).into_iter().map(|a| a * a).collect()
}

/// `atan2(im, re)` folded into `(-π, π]`.
pub fn phases<T: Float>(coefficients: &[Complex<T>]) -> Vec<T> {
    coefficients.iter().map(|c| c.arg()).collect()
}

/// Single-sided amplitude spectrum over bins `0..=N/2`.
///
/// For real input bin `k` and bin `N-k` carry equal magnitude, so every bin
/// except DC (and Nyquist for even `N`) is doubled. A real sinusoid of
/// amplitude `A` centred on a bin reads `A` there.
pub fn one_sided_amplitudes<T: Float>(coefficients: &[Complex<T>]) -> Vec<T> {
    let n = coefficients.len();
    if n == 0 {
        return Vec::new();
    }
    let two = T::from_f64(2.0);
    coefficients[..=n / 2]
        .iter()
        .enumerate()
        .map(|(k, c)| {
            let unpaired = k == 0 || (n % 2 == 0 && k == n / 2);
            if unpaired {
                c.norm()
            } else {
                c.norm() * two
            }
        })
        .collect()
}

/// `10·log10(power)` clamped below at `floor_db`.
///
/// Zero power maps to `floor_db` rather than `-inf`.
pub fn powers_db<T: Float>(coefficients: &[Complex<T>], floor_db: T) -> Vec<T> {
    let multiplier = T::from_f64(DB_POWER_MULTIPLIER);
    powers(coefficients)
        .into_iter()
        .map(|p| {
            if p <= T::zero() {
                return floor_db;
            }
            let db = multiplier * p.log10();
            if db < floor_db {
                floor_db
            } else {
                db
            }
        })
        .collect()
}

/// Frequency in Hz of each of the `n` bins at `sample_rate`.
///
/// Bins below `ceil(n/2)` are positive (`k·fs/n`); the rest are the negative
/// frequencies `-(n-k)·fs/n`.
pub fn bin_frequencies<T: Float>(n: usize, sample_rate: T) -> Result<Vec<T>, FourierError> {
    if !(sample_rate.is_finite() && sample_rate > T::zero()) {
        return Err(FourierError::InvalidSampleRate);
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    let resolution = sample_rate / T::from_usize(n);
    let split = n.div_ceil(2);
    Ok((0..n)
        .map(|k| {
            if k < split {
                T::from_usize(k) * resolution
            } else {
                -(T::from_usize(n - k) * resolution)
            }
        })
        .collect())
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn test_one_sided_odd_length() {
        let coefs = vec![
            Complex::new(1.0f64, 0.0),
            Complex::new(0.5, 0.0),
            Complex::new(0.5, 0.0),
        ];
        assert_eq!(one_sided_amplitudes(&coefs), vec![1.0, 1.0]);
    }

    #[test]
    fn test_powers_db_floor() {
        let coefs = vec![Complex::new(0.0f64, 0.0), Complex::new(10.0, 0.0)];
        let db = powers_db(&coefs, -120.0);
        assert_eq!(db[0], -120.0);
        assert!((db[1] - 20.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_power_is_amplitude_squared(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let coefs = [Complex::new(re, im)];
            let a = amplitudes(&coefs)[0];
            let p = powers(&coefs)[0];
            prop_assert!((a - (re * re + im * im).sqrt()).abs() <= 1e-9 * a.max(1.0));
            prop_assert!((p - a * a).abs() <= 1e-9 * p.max(1.0));
        }
    }
}
