//! Direct discrete Fourier transform.
//!
//! This is the verification path: O(N²) time and an O(N²) rotation matrix
//! rebuilt on every call. It never reads the engine's cached rotation table,
//! so it checks fast-path policies against an independent computation.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Row-major `n × n` matrix with entry `(k, m) = cos(2πkm/n) + i·sin(2πkm/n)`.
///
/// The product `k·m` is reduced modulo `n` before conversion so the angle
/// stays in `[0, 2π)` for large sizes.
pub fn rotor_matrix<T: Float>(n: usize) -> Vec<Complex<T>> {
    if n == 0 {
        return Vec::new();
    }
    let base = T::from_f64(2.0) * T::pi() / T::from_usize(n);
    let mut matrix = Vec::with_capacity(n * n);
    for k in 0..n {
        for m in 0..n {
            matrix.push(Complex::expi(base * T::from_usize((k * m) % n)));
        }
    }
    matrix
}

/// Normalized coefficients `X[k] = (1/N) Σₘ x[m]·W(k, m)` of `samples`,
/// where `N = samples.len()`.
///
/// An empty input yields an empty output.
pub fn direct_transform<T: Float>(samples: &[T]) -> Vec<Complex<T>> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }
    let matrix = rotor_matrix::<T>(n);
    let mut coefficients = vec![Complex::zero(); n];
    for (k, coef) in coefficients.iter_mut().enumerate() {
        let row = &matrix[k * n..(k + 1) * n];
        for (&w, &x) in row.iter().zip(samples) {
            *coef += w.scale(x);
        }
    }
    normalize(&mut coefficients);
    coefficients
}

/// Divide every coefficient by the sequence length.
pub(crate) fn normalize<T: Float>(coefficients: &mut [Complex<T>]) {
    if coefficients.is_empty() {
        return;
    }
    let inv = T::one() / T::from_usize(coefficients.len());
    for c in coefficients.iter_mut() {
        *c = c.scale(inv);
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_impulse_is_flat() {
        let out = direct_transform(&[1.0f64, 0.0, 0.0, 0.0]);
        for c in out {
            assert!((c.re - 0.25).abs() < 1e-12);
            assert!(c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let n = 6;
        let m = rotor_matrix::<f64>(n);
        for k in 0..n {
            for j in 0..n {
                assert_eq!(m[k * n + j], m[j * n + k]);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(direct_transform::<f32>(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_linearity(ref a in proptest::collection::vec(-100.0f64..100.0, 8),
                          ref b in proptest::collection::vec(-100.0f64..100.0, 8)) {
            let sum: Vec<f64> = a.iter().zip(b).map(|(x, y)| x + y).collect();
            let fa = direct_transform(a);
            let fb = direct_transform(b);
            let fs = direct_transform(&sum);
            for k in 0..8 {
                prop_assert!((fa[k].re + fb[k].re - fs[k].re).abs() < 1e-9);
                prop_assert!((fa[k].im + fb[k].im - fs[k].im).abs() < 1e-9);
            }
        }
    }
}
