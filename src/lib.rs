//! # fourier-engine - discrete Fourier transform kernel
//!
//! Computes the frequency-domain representation of a finite, real-valued,
//! uniformly sampled signal and derives amplitude, phase and power spectra
//! from it. Meant to sit inside a larger signal-processing pipeline: the
//! caller hands over raw samples and reads back spectral vectors.
//!
//! ## Pieces
//!
//! - [`Fourier`]: the engine. Fixes a working size `N` at construction,
//!   zero-pads each input to `N`, and stores normalized coefficients.
//! - [`RotorTable`]: the `N` rotation factors `cos(2πk/N) + i·sin(2πk/N)`,
//!   computed once per engine.
//! - [`FftPolicy`]: the pluggable fast-transform algorithm and working-size
//!   rule. [`Radix2Policy`] and [`ExactPolicy`] ship with the crate.
//! - [`spectrum`]: amplitude, phase and power derivations.
//!
//! ## Normalization
//!
//! Stored coefficients are `X[k] = (1/N) Σₘ x[m]·rotor[k]^m` on both the
//! direct ([`Fourier::dft`]) and policy ([`Fourier::fft`]) paths. A constant
//! input `c` yields `X[0] = c`.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FourierError`]
//! - `verbose-logging`: construction and transform events through `log`
//! - `internal-tests`: in-module property tests (`proptest`, `rand`)
//!
//! ## Example
//!
//! ```
//! use fourier_engine::Fourier64;
//!
//! let mut engine = Fourier64::new(4);
//! engine.fft(&[1.0f64, 0.0, -1.0, 0.0]).unwrap();
//! let amps = engine.amplitudes();
//! assert!((amps[1] - 0.5).abs() < 1e-12);
//! ```

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "verbose-logging")]
macro_rules! trace_log {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! trace_log {
    ($level:ident, $($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

pub mod buffer;
/// Direct O(N²) reference transform.
pub mod dft;
pub mod fourier;
pub mod num;
/// Fast-transform policies and the contract they implement.
pub mod policy;
pub mod rotor;
pub mod spectrum;

pub use fourier::{Fourier, Fourier32, Fourier64, FourierError};
pub use num::{Complex, Complex32, Complex64, Float, Sample};
pub use policy::{ExactPolicy, FftPolicy, Radix2Policy, Scaling};
pub use rotor::RotorTable;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_paths_agree_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for &len in &[1usize, 3, 8, 13, 64] {
            let signal: Vec<f64> = (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let mut engine = Fourier64::new(len);
            engine.dft(&signal).unwrap();
            let direct = engine.fourier_coef();
            engine.fft(&signal).unwrap();
            let fast = engine.fourier_coef();
            for (a, b) in direct.iter().zip(&fast) {
                assert!((a.re - b.re).abs() < 1e-9, "re: {} vs {}", a.re, b.re);
                assert!((a.im - b.im).abs() < 1e-9, "im: {} vs {}", a.im, b.im);
            }
        }
    }
}
