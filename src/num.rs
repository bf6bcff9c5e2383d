//! Numeric primitives shared by every transform path.
//!
//! [`Float`] abstracts over `f32`/`f64` with `libm` backing the
//! transcendental functions so the crate stays `no_std`. [`Sample`] is the
//! input side: any primitive numeric element a caller may hand to the engine.

use core::f64::consts::PI;

// Minimal float trait for generic transforms (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Narrowing conversion from `f64` (rounds to nearest for `f32`).
    fn from_f64(x: f64) -> Self;
    /// Lossy conversion; indices above 2^24 (`f32`) or 2^53 (`f64`) round.
    fn from_usize(x: usize) -> Self;
    fn sqrt(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn log10(self) -> Self;
    fn is_finite(self) -> bool;
    fn pi() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn log10(self) -> Self {
        libm::log10f(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn log10(self) -> Self {
        libm::log10(self)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn pi() -> Self {
        PI
    }
}

/// Element types accepted as transform input.
///
/// Conversion goes through `f64`, so 64-bit integers beyond 2^53 lose
/// precision the same way an `as f64` cast does.
pub trait Sample: Copy {
    fn to_f64(self) -> f64;

    #[inline(always)]
    fn to_float<T: Float>(self) -> T {
        T::from_f64(self.to_f64())
    }
}

macro_rules! impl_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// `cos(theta) + i·sin(theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
    /// Multiply both parts by a real factor.
    #[inline(always)]
    pub fn scale(self, factor: T) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
    /// Magnitude `sqrt(re² + im²)`.
    #[inline(always)]
    pub fn norm(self) -> T {
        self.norm_sqr().sqrt()
    }
    /// Argument in `(-π, π]`.
    ///
    /// `atan2` reports `-π` for a negative real part with a `-0.0` imaginary
    /// part; that value is folded onto `π`.
    pub fn arg(self) -> T {
        let theta = self.im.atan2(self.re);
        if theta <= -T::pi() {
            T::pi()
        } else {
            theta
        }
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        *self = Complex::<T>::add(*self, other);
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a.mul(b);
        assert!((c.re - (1.0 * 3.0 - (-2.0) * 4.0)).abs() < 1e-12);
        assert!((c.im - (1.0 * 4.0 + (-2.0) * 3.0)).abs() < 1e-12);
        let n = -a;
        assert_eq!(n.re, -1.0);
        assert_eq!(n.im, 2.0);
        assert_eq!(a.conj(), Complex64::new(1.0, 2.0));
    }

    #[test]
    fn test_arg_folds_negative_pi() {
        let z = Complex64::new(-1.0, -0.0);
        assert_eq!(z.arg(), core::f64::consts::PI);
        let z = Complex32::new(-1.0, 0.0);
        assert_eq!(z.arg(), core::f32::consts::PI);
    }

    #[test]
    fn test_sample_conversion() {
        assert_eq!(3u8.to_float::<f64>(), 3.0);
        assert_eq!((-7i32).to_float::<f32>(), -7.0);
        assert_eq!(0.5f32.to_float::<f64>(), 0.5);
    }

    proptest! {
        #[test]
        fn prop_expi_is_unit(theta in -100.0f64..100.0) {
            let z = Complex64::expi(theta);
            prop_assert!((z.norm() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_arg_in_half_open_range(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let theta = Complex64::new(re, im).arg();
            prop_assert!(theta > -core::f64::consts::PI);
            prop_assert!(theta <= core::f64::consts::PI);
        }
    }
}
