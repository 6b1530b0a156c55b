//! Reductions and horizontal operations.
//!
//! Floating-point sums are order-sensitive. [`SimdReduce::sum`] always adds
//! `lower` before `upper` at every level of the width hierarchy and runs a
//! pairwise tree at the leaf, so the accelerated and decomposed paths agree
//! bit-for-bit.
//!
//! Lane searches pack an elementwise mask into a `u64` with
//! [`SimdReduce::extract_most_significant_bits`] and then count bits: the
//! lowest set bit is the first match, the highest is the last.

use crate::simd::element::SimdElement;
use crate::simd::ops::SimdOps;
use crate::simd::traits::SimdVector;

/// Horizontal operations over the lanes of one vector.
pub trait SimdReduce<T: SimdElement>: SimdOps<T> {
    /// Mask with one bit per lane.
    #[inline(always)]
    fn lane_mask() -> u64 {
        if Self::COUNT >= 64 {
            u64::MAX
        } else {
            (1u64 << Self::COUNT) - 1
        }
    }

    /// Sum of all lanes, wrapping for integers.
    #[inline(always)]
    fn sum(self) -> T {
        self.reduce_sum()
    }

    /// `(self * rhs).sum()`.
    #[inline(always)]
    fn dot(self, rhs: Self) -> T {
        self.multiply(rhs).reduce_sum()
    }

    /// Bit `i` of the result is the most significant bit of lane `i`.
    #[inline(always)]
    fn extract_most_significant_bits(self) -> u64 {
        self.most_significant_bits()
    }

    /// Index of the first lane equal to `value`.
    #[inline]
    fn index_of(self, value: T) -> Option<usize> {
        first_set(self.equals(Self::splat(value)).most_significant_bits())
    }

    /// Index of the last lane equal to `value`.
    #[inline]
    fn last_index_of(self, value: T) -> Option<usize> {
        last_set(self.equals(Self::splat(value)).most_significant_bits())
    }

    /// Number of lanes equal to `value`.
    #[inline]
    fn count(self, value: T) -> usize {
        self.equals(Self::splat(value))
            .most_significant_bits()
            .count_ones() as usize
    }

    /// Every lane equals `value`.
    #[inline]
    fn all(self, value: T) -> bool {
        self.equals_all(Self::splat(value))
    }

    /// Some lane equals `value`.
    #[inline]
    fn any(self, value: T) -> bool {
        self.equals_any(Self::splat(value))
    }

    /// No lane equals `value`.
    #[inline]
    fn none(self, value: T) -> bool {
        !self.any(value)
    }

    #[inline]
    fn equals_all(self, rhs: Self) -> bool {
        self.equals(rhs).most_significant_bits() == Self::lane_mask()
    }

    #[inline]
    fn equals_any(self, rhs: Self) -> bool {
        self.equals(rhs).most_significant_bits() != 0
    }

    #[inline]
    fn greater_than_all(self, rhs: Self) -> bool {
        self.greater_than(rhs).most_significant_bits() == Self::lane_mask()
    }

    #[inline]
    fn greater_than_any(self, rhs: Self) -> bool {
        self.greater_than(rhs).most_significant_bits() != 0
    }

    #[inline]
    fn greater_than_or_equal_all(self, rhs: Self) -> bool {
        self.greater_than_or_equal(rhs).most_significant_bits() == Self::lane_mask()
    }

    #[inline]
    fn greater_than_or_equal_any(self, rhs: Self) -> bool {
        self.greater_than_or_equal(rhs).most_significant_bits() != 0
    }

    #[inline]
    fn less_than_all(self, rhs: Self) -> bool {
        self.less_than(rhs).most_significant_bits() == Self::lane_mask()
    }

    #[inline]
    fn less_than_any(self, rhs: Self) -> bool {
        self.less_than(rhs).most_significant_bits() != 0
    }

    #[inline]
    fn less_than_or_equal_all(self, rhs: Self) -> bool {
        self.less_than_or_equal(rhs).most_significant_bits() == Self::lane_mask()
    }

    #[inline]
    fn less_than_or_equal_any(self, rhs: Self) -> bool {
        self.less_than_or_equal(rhs).most_significant_bits() != 0
    }

    /// Bit `i` is set when every bit of lane `i` is set.
    ///
    /// Float lanes are tested as their same-width integer bit patterns, so a
    /// negative quiet NaN with a full mantissa matches and `-0.0` does not.
    #[inline]
    fn all_bits_set_mask(self) -> u64 {
        let bits: Self::Rebind<T::Index> = bytemuck::cast(self);
        bits.equals(<Self::Rebind<T::Index> as SimdVector<T::Index>>::all_bits_set())
            .most_significant_bits()
    }

    #[inline]
    fn all_where_all_bits_set(self) -> bool {
        self.all_bits_set_mask() == Self::lane_mask()
    }

    #[inline]
    fn any_where_all_bits_set(self) -> bool {
        self.all_bits_set_mask() != 0
    }

    #[inline]
    fn none_where_all_bits_set(self) -> bool {
        self.all_bits_set_mask() == 0
    }

    #[inline]
    fn count_where_all_bits_set(self) -> usize {
        self.all_bits_set_mask().count_ones() as usize
    }

    #[inline]
    fn index_of_where_all_bits_set(self) -> Option<usize> {
        first_set(self.all_bits_set_mask())
    }

    #[inline]
    fn last_index_of_where_all_bits_set(self) -> Option<usize> {
        last_set(self.all_bits_set_mask())
    }
}

impl<T: SimdElement, V: SimdOps<T>> SimdReduce<T> for V {}

#[inline(always)]
fn first_set(mask: u64) -> Option<usize> {
    (mask != 0).then(|| mask.trailing_zeros() as usize)
}

#[inline(always)]
fn last_set(mask: u64) -> Option<usize> {
    (mask != 0).then(|| 63 - mask.leading_zeros() as usize)
}
