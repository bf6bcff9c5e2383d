//! Zero-padded working buffer.

use alloc::vec;
use alloc::vec::Vec;

use crate::fourier::FourierError;
use crate::num::{Float, Sample};

/// Real samples at the engine's working size.
///
/// Holds only the most recent load; every [`load`](Self::load) overwrites it.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkingBuffer<T: Float> {
    data: Vec<T>,
}

impl<T: Float> WorkingBuffer<T> {
    /// All-zero buffer of length `size`.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    /// Copy `samples` into the buffer and zero the tail.
    ///
    /// Fails without touching the buffer when `samples` is longer than the
    /// working size; truncating would silently drop caller data.
    pub fn load<S: Sample>(&mut self, samples: &[S]) -> Result<(), FourierError> {
        let size = self.data.len();
        if samples.len() > size {
            return Err(FourierError::OversizedInput {
                len: samples.len(),
                size,
            });
        }
        let (head, tail) = self.data.split_at_mut(samples.len());
        for (dst, &src) in head.iter_mut().zip(samples) {
            *dst = src.to_float();
        }
        tail.fill(T::zero());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn test_load_pads_with_zeros() {
        let mut buf = WorkingBuffer::<f64>::new(5);
        buf.load(&[1.0f64, 2.0]).unwrap();
        assert_eq!(buf.as_slice(), &[1.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reload_clears_previous_tail() {
        let mut buf = WorkingBuffer::<f32>::new(4);
        buf.load(&[9i16, 9, 9, 9]).unwrap();
        buf.load(&[1i16]).unwrap();
        assert_eq!(buf.as_slice(), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_oversized_leaves_buffer_untouched() {
        let mut buf = WorkingBuffer::<f64>::new(2);
        buf.load(&[3.0f64, 4.0]).unwrap();
        assert_eq!(
            buf.load(&[1.0f64, 2.0, 3.0]),
            Err(FourierError::OversizedInput { len: 3, size: 2 })
        );
        assert_eq!(buf.as_slice(), &[3.0, 4.0]);
    }
}
