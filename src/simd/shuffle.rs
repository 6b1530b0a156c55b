//! Per-lane gather from a source vector.
//!
//! Index vectors have the same width as the source and hold same-width
//! integers ([`SimdElement::Index`]): `u8` indices for `u8` lanes, `i32` for
//! `f32`, `i64` for `f64`. Indices are read as unsigned, so a negative index
//! is always out of range.

use crate::simd::element::{SimdElement, SimdInt};
use crate::simd::traits::SimdVector;

/// Lane permutation.
pub trait SimdShuffle<T: SimdElement>: SimdVector<T> {
    /// `result[i] = self[indices[i]]` when `indices[i] < COUNT`, otherwise zero.
    #[inline]
    fn shuffle(self, indices: Self::Rebind<T::Index>) -> Self {
        self.permute(indices)
    }

    /// Permutation with platform-dependent out-of-range behavior.
    ///
    /// When this width is hardware accelerated the result mirrors the native
    /// full-width permute, which reads only the low `log2(COUNT)` bits of each
    /// index, so an out-of-range index wraps instead of producing zero. On
    /// the decomposed path this is [`shuffle`](SimdShuffle::shuffle). Do not
    /// rely on either outcome for out-of-range indices.
    #[inline]
    fn shuffle_native(self, indices: Self::Rebind<T::Index>) -> Self {
        if !Self::is_hardware_accelerated() {
            return self.shuffle(indices);
        }
        let mut out = Self::zero();
        let source = self.as_slice();
        let wrap = Self::COUNT as u64 - 1;
        for (lane, &index) in out.as_mut_slice().iter_mut().zip(indices.as_slice()) {
            let index = <T::Index as SimdInt>::to_lane_index(index) & wrap;
            *lane = source[index as usize];
        }
        out
    }
}

impl<T: SimdElement, V: SimdVector<T>> SimdShuffle<T> for V {}
