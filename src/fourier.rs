//! Transform engine.
//!
//! [`Fourier`] fixes a working size at construction, caches the rotation
//! table for it, and turns caller samples into normalized coefficients through
//! either the direct reference path ([`Fourier::dft`]) or the policy-driven
//! path ([`Fourier::fft`]). Spectra are derived on demand from the most recent
//! coefficients.
//!
//! # Concurrency
//! The working buffer and coefficients are instance-owned and replaced by
//! every transform. Transforms take `&mut self`; share an engine across
//! threads only behind a lock that covers the whole transform-then-read
//! sequence, or give each worker its own engine.

use alloc::vec;
use alloc::vec::Vec;

use crate::buffer::WorkingBuffer;
use crate::dft::{direct_transform, normalize};
use crate::num::{Complex, Float, Sample};
use crate::policy::{FftPolicy, Radix2Policy, Scaling};
use crate::rotor::RotorTable;
use crate::spectrum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourierError {
    /// More samples than the working size; no transform took place.
    OversizedInput { len: usize, size: usize },
    /// Sample rate was zero, negative or not finite.
    InvalidSampleRate,
}

impl core::fmt::Display for FourierError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FourierError::OversizedInput { len, size } => {
                write!(f, "{len} samples exceed working size {size}")
            }
            FourierError::InvalidSampleRate => {
                write!(f, "sample rate must be finite and positive")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FourierError {}

/// Spectral analysis engine for one working size.
#[derive(Debug, Clone)]
pub struct Fourier<T: Float, P: FftPolicy<T> = Radix2Policy> {
    policy: P,
    size: usize,
    rotors: RotorTable<T>,
    buffer: WorkingBuffer<T>,
    coefficients: Vec<Complex<T>>,
}

pub type Fourier32<P = Radix2Policy> = Fourier<f32, P>;
pub type Fourier64<P = Radix2Policy> = Fourier<f64, P>;

impl<T: Float> Fourier<T, Radix2Policy> {
    /// Engine for `requested` samples padded to the next power of two.
    pub fn new(requested: usize) -> Self {
        Self::with_policy(requested, Radix2Policy::new())
    }
}

impl<T: Float, P: FftPolicy<T>> Fourier<T, P> {
    /// Engine for `requested` samples; the working size comes from
    /// `policy.calc_size(requested)` and never changes afterwards.
    pub fn with_policy(requested: usize, policy: P) -> Self {
        let mut size = policy.calc_size(requested);
        if size == 0 {
            trace_log!(warn, "policy returned working size 0 for {requested}; using 1");
            size = 1;
        }
        trace_log!(debug, "fourier engine: requested {requested}, working size {size}");
        Self {
            policy,
            size,
            rotors: RotorTable::new(size),
            buffer: WorkingBuffer::new(size),
            coefficients: Vec::new(),
        }
    }

    /// Working size `N`.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Copy of the rotation table.
    pub fn rotors(&self) -> Vec<Complex<T>> {
        self.rotors.to_vec()
    }

    /// Copy of the most recent normalized coefficients; empty before the
    /// first successful transform.
    pub fn fourier_coef(&self) -> Vec<Complex<T>> {
        self.coefficients.clone()
    }

    /// Direct O(N²) transform. Meant for verification, not throughput: it
    /// rebuilds an N×N rotation matrix on every call.
    pub fn dft<S: Sample>(&mut self, samples: &[S]) -> Result<(), FourierError> {
        self.buffer.load(samples)?;
        trace_log!(trace, "dft: {} samples, N = {}", samples.len(), self.size);
        self.coefficients = direct_transform(self.buffer.as_slice());
        Ok(())
    }

    /// Policy-driven transform.
    ///
    /// Output from a [`Scaling::Unnormalized`] policy is divided by `N` here,
    /// so coefficients from both paths share one scale.
    pub fn fft<S: Sample>(&mut self, samples: &[S]) -> Result<(), FourierError> {
        self.buffer.load(samples)?;
        trace_log!(trace, "fft: {} samples, N = {}", samples.len(), self.size);
        let mut out = vec![Complex::zero(); self.size];
        self.policy
            .fft(self.buffer.as_slice(), &self.rotors, &mut out);
        match P::SCALING {
            Scaling::Unnormalized => normalize(&mut out),
            Scaling::Normalized => {}
        }
        self.coefficients = out;
        Ok(())
    }

    /// `|X[k]|` for every bin.
    pub fn amplitudes(&self) -> Vec<T> {
        spectrum::amplitudes(&self.coefficients)
    }

    /// `|X[k]|²` for every bin.
    pub fn powers(&self) -> Vec<T> {
        spectrum::powers(&self.coefficients)
    }

    /// `arg(X[k])` in `(-π, π]` for every bin.
    pub fn phases(&self) -> Vec<T> {
        spectrum::phases(&self.coefficients)
    }

    /// Bins `0..=N/2` with the mirrored energy folded in.
    pub fn one_sided_amplitudes(&self) -> Vec<T> {
        spectrum::one_sided_amplitudes(&self.coefficients)
    }

    /// Power in decibels, clamped below at `floor_db`.
    pub fn powers_db(&self, floor_db: T) -> Vec<T> {
        spectrum::powers_db(&self.coefficients, floor_db)
    }

    /// Frequency in Hz of every bin at this working size.
    pub fn bin_frequencies(&self, sample_rate: T) -> Result<Vec<T>, FourierError> {
        spectrum::bin_frequencies(self.size, sample_rate)
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::policy::ExactPolicy;

    struct ZeroSizePolicy;

    impl FftPolicy<f64> for ZeroSizePolicy {
        fn calc_size(&self, _requested: usize) -> usize {
            0
        }
        fn fft(&self, samples: &[f64], rotors: &RotorTable<f64>, out: &mut [Complex<f64>]) {
            ExactPolicy.fft(samples, rotors, out);
        }
    }

    #[test]
    fn test_zero_size_policy_is_clamped() {
        let mut engine: Fourier<f64, ZeroSizePolicy> = Fourier::with_policy(4, ZeroSizePolicy);
        assert_eq!(engine.size(), 1);
        engine.fft(&[2.5f64]).unwrap();
        assert_eq!(engine.fourier_coef(), vec![Complex::new(2.5, 0.0)]);
    }

    #[test]
    fn test_error_display() {
        let err = FourierError::OversizedInput { len: 9, size: 8 };
        assert_eq!(alloc::format!("{err}"), "9 samples exceed working size 8");
    }
}
