//! Rotation ("twiddle") factor table.
//!
//! Entry `k` of a table for working size `n` is `cos(2πk/n) + i·sin(2πk/n)`.
//! This positive-exponent sign is the engine's forward convention; every
//! transform path, including caller-supplied policies, sees the same table so
//! phase signs agree across paths.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Compute the `n` rotation factors for working size `n`.
///
/// Each entry is evaluated from its own angle rather than by repeated
/// multiplication, so the error does not accumulate with `k`.
pub fn rotor_table<T: Float>(n: usize) -> Vec<Complex<T>> {
    if n == 0 {
        return Vec::new();
    }
    let base = T::from_f64(2.0) * T::pi() / T::from_usize(n);
    (0..n)
        .map(|k| Complex::expi(base * T::from_usize(k)))
        .collect()
}

/// Immutable, shareable rotation table computed once per engine.
#[derive(Clone, Debug, PartialEq)]
pub struct RotorTable<T: Float> {
    rotors: Arc<[Complex<T>]>,
}

impl<T: Float> RotorTable<T> {
    pub fn new(n: usize) -> Self {
        Self {
            rotors: Arc::from(rotor_table::<T>(n)),
        }
    }

    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.rotors
    }

    /// `rotor[k mod n]`, i.e. the `k`-th power of the fundamental rotor.
    ///
    /// `rotor[a]^b == rotor[(a·b) mod n]`, which lets direct summation reuse
    /// the 1-D table instead of building a matrix.
    ///
    /// # Panics
    /// Panics on an empty table.
    #[inline(always)]
    pub fn rotor(&self, k: usize) -> Complex<T> {
        self.rotors[k % self.rotors.len()]
    }

    /// Owned copy of the table.
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        self.rotors.to_vec()
    }
}

impl<T: Float> core::ops::Index<usize> for RotorTable<T> {
    type Output = Complex<T>;

    fn index(&self, k: usize) -> &Complex<T> {
        &self.rotors[k]
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_rotor_is_one() {
        let table = RotorTable::<f64>::new(8);
        assert_eq!(table[0], Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_quarter_turn_sign() {
        let table = RotorTable::<f64>::new(4);
        assert!(table[1].re.abs() < 1e-12);
        assert!((table[1].im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table() {
        assert!(RotorTable::<f32>::new(0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_rotor_power_wraps(n in 1usize..64, a in 0usize..64, b in 0usize..64) {
            let table = RotorTable::<f64>::new(n);
            let mut acc = Complex::new(1.0, 0.0);
            for _ in 0..b {
                acc = acc.mul(table.rotor(a));
            }
            let direct = table.rotor(a * b);
            prop_assert!((acc.re - direct.re).abs() < 1e-9);
            prop_assert!((acc.im - direct.im).abs() < 1e-9);
        }
    }
}
