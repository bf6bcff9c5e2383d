//! Fast-transform policies.
//!
//! A policy decides the working size for a requested length and computes the
//! forward transform of a zero-padded real buffer using the engine's cached
//! rotation table. The engine is generic over [`FftPolicy`] and dispatches
//! statically; two policies ship with the crate:
//!
//! - [`Radix2Policy`]: next power of two, iterative Cooley–Tukey.
//! - [`ExactPolicy`]: any size, direct summation over the 1-D rotor table.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::HashMap;

use crate::num::{Complex, Float};
use crate::rotor::RotorTable;

/// Output scale a policy produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// `Σₘ x[m]·rotor[k]^m`; the engine divides by `N` afterwards.
    #[default]
    Unnormalized,
    /// Already divided by `N`; stored as-is.
    Normalized,
}

/// Algorithm provider plugged into [`Fourier`](crate::fourier::Fourier).
///
/// Implementations must write bin `k` to `out[k]` using the same sign as the
/// rotor table (`rotor[k] = cos(2πk/N) + i·sin(2πk/N)`) and declare their
/// output scale through [`SCALING`](Self::SCALING).
pub trait FftPolicy<T: Float> {
    const SCALING: Scaling = Scaling::Unnormalized;

    /// Working size for a requested sample count. Must be deterministic and
    /// at least 1.
    fn calc_size(&self, requested: usize) -> usize;

    /// Transform `samples` into `out`.
    ///
    /// `samples`, `rotors` and `out` all have the working size; `out` arrives
    /// zeroed.
    fn fft(&self, samples: &[T], rotors: &RotorTable<T>, out: &mut [Complex<T>]);
}

/// Radix-2 decimation-in-time Cooley–Tukey.
///
/// Bit-reversal permutations are cached per size; the cache sits behind a
/// `RefCell`, so a policy value is not `Sync`.
#[derive(Debug, Default, Clone)]
pub struct Radix2Policy {
    permutations: RefCell<HashMap<usize, Arc<[usize]>>>,
}

impl Radix2Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit-reversal permutation for a power-of-two `n`: entry `i` is `i` with
    /// its low `log2(n)` bits reversed.
    pub fn bit_reversal(&self, n: usize) -> Arc<[usize]> {
        let mut cache = self.permutations.borrow_mut();
        let perm = cache.entry(n).or_insert_with(|| {
            if n <= 1 {
                return Arc::from(alloc::vec![0usize; n]);
            }
            let shift = usize::BITS - n.trailing_zeros();
            let table: Vec<usize> = (0..n).map(|i| i.reverse_bits() >> shift).collect();
            Arc::from(table)
        });
        Arc::clone(perm)
    }

    /// Number of cached permutation tables.
    pub fn cached_sizes(&self) -> usize {
        self.permutations.borrow().len()
    }
}

impl<T: Float> FftPolicy<T> for Radix2Policy {
    fn calc_size(&self, requested: usize) -> usize {
        requested.max(1).next_power_of_two()
    }

    fn fft(&self, samples: &[T], rotors: &RotorTable<T>, out: &mut [Complex<T>]) {
        let n = samples.len();
        debug_assert_eq!(rotors.len(), n);
        debug_assert_eq!(out.len(), n);
        if !n.is_power_of_two() {
            // Sizes from `calc_size` are always powers of two; a direct caller
            // with another size still gets a correct answer.
            return ExactPolicy.fft(samples, rotors, out);
        }

        let perm = self.bit_reversal(n);
        for (dst, &src) in out.iter_mut().zip(perm.iter()) {
            *dst = Complex::new(samples[src], T::zero());
        }

        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            for start in (0..n).step_by(len) {
                for j in 0..half {
                    let w = rotors[j * stride];
                    let u = out[start + j];
                    let v = out[start + j + half].mul(w);
                    out[start + j] = u.add(v);
                    out[start + j + half] = u.sub(v);
                }
            }
            len <<= 1;
        }
    }
}

/// Direct summation over the cached 1-D rotor table, at exactly the
/// requested size.
///
/// O(N²) time with no auxiliary allocation; useful for lengths where padding
/// to a power of two would change the bin spacing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExactPolicy;

impl<T: Float> FftPolicy<T> for ExactPolicy {
    fn calc_size(&self, requested: usize) -> usize {
        requested.max(1)
    }

    fn fft(&self, samples: &[T], rotors: &RotorTable<T>, out: &mut [Complex<T>]) {
        if rotors.is_empty() {
            return;
        }
        for (k, coef) in out.iter_mut().enumerate() {
            let mut acc = Complex::zero();
            for (m, &x) in samples.iter().enumerate() {
                acc += rotors.rotor(k * m).scale(x);
            }
            *coef = acc;
        }
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_calc_size() {
        let p = Radix2Policy::new();
        assert_eq!(FftPolicy::<f64>::calc_size(&p, 0), 1);
        assert_eq!(FftPolicy::<f64>::calc_size(&p, 5), 8);
        assert_eq!(FftPolicy::<f64>::calc_size(&p, 16), 16);
        assert_eq!(FftPolicy::<f64>::calc_size(&ExactPolicy, 0), 1);
        assert_eq!(FftPolicy::<f64>::calc_size(&ExactPolicy, 7), 7);
    }

    #[test]
    fn test_bit_reversal_cached() {
        let p = Radix2Policy::new();
        let a = p.bit_reversal(8);
        assert_eq!(&*a, &[0, 4, 2, 6, 1, 5, 3, 7]);
        let b = p.bit_reversal(8);
        assert_eq!(a.as_ptr(), b.as_ptr());
        assert_eq!(p.cached_sizes(), 1);
    }

    #[test]
    fn test_radix2_matches_exact_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for &n in &[1usize, 2, 4, 8, 32, 128] {
            let samples: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let rotors = RotorTable::new(n);
            let mut fast = vec![Complex::zero(); n];
            let mut slow = vec![Complex::zero(); n];
            Radix2Policy::new().fft(&samples, &rotors, &mut fast);
            ExactPolicy.fft(&samples, &rotors, &mut slow);
            for (a, b) in fast.iter().zip(&slow) {
                assert!((a.re - b.re).abs() < 1e-9, "n={n}: {a:?} vs {b:?}");
                assert!((a.im - b.im).abs() < 1e-9, "n={n}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_radix2_non_power_of_two_falls_back() {
        let samples = [1.0f64, 2.0, 3.0];
        let rotors = RotorTable::new(3);
        let mut fast = vec![Complex::zero(); 3];
        let mut slow = vec![Complex::zero(); 3];
        Radix2Policy::new().fft(&samples, &rotors, &mut fast);
        ExactPolicy.fft(&samples, &rotors, &mut slow);
        assert_eq!(fast, slow);
    }

    proptest! {
        #[test]
        fn prop_radix2_dc_bin_is_sum(ref signal in proptest::collection::vec(-1000.0f64..1000.0, 16)) {
            let rotors = RotorTable::new(16);
            let mut out = vec![Complex::zero(); 16];
            Radix2Policy::new().fft(signal, &rotors, &mut out);
            let sum: f64 = signal.iter().sum();
            prop_assert!((out[0].re - sum).abs() < 1e-6);
            prop_assert!(out[0].im.abs() < 1e-6);
        }
    }
}
