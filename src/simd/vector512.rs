//! 512-bit vector made of two 256-bit halves.
//!
//! `Vector512<T>` is exactly 64 bytes, aligned to 64, laid out as `lower`
//! followed by `upper` with no padding and no hidden state. Lane `i` of the
//! vector is lane `i` of `lower` for `i < COUNT / 2` and lane `i - COUNT / 2`
//! of `upper` otherwise.
//!
//! # Construction
//!
//! - [`SimdVector::splat`], [`SimdVector::create_scalar`],
//!   [`SimdVector::create_sequence`], [`SimdVector::indices`]
//! - `From<[T; COUNT]>` for every element type
//! - [`SimdVector::from_slice`] / [`SimdVector::from_slice_at`]
//! - [`Composite::from_halves`] and [`Vector512::from_vector256`]
//! - the `load*` family, with alignment checked before memory is touched
//!
//! # Example
//!
//! ```rust
//! use simdwide::prelude::*;
//!
//! let v = Vector512::<f32>::create_sequence(0.0, 0.5);
//! assert_eq!(v.get_element(3).unwrap(), 1.5);
//! assert_eq!(v.lower().to_scalar(), 0.0);
//! assert_eq!(v.upper().to_scalar(), 4.0);
//! ```

use crate::simd::capability::VectorWidth;
use crate::simd::element::SimdElement;
use crate::simd::traits::{
    dispatch_binary, dispatch_most_significant_bits, dispatch_sum, dispatch_ternary,
    dispatch_unary, impl_array_conversions, impl_vector_common, lanes_map, lanes_permute,
    Composite, SimdVector,
};
use crate::simd::vector256::Vector256;

/// A 512-bit vector of `T` lanes, stored as `lower` then `upper`.
#[derive(Clone, Copy)]
#[repr(C, align(64))]
pub struct Vector512<T: SimdElement> {
    lower: Vector256<T>,
    upper: Vector256<T>,
}

impl_vector_common!(Vector512);
impl_array_conversions!(Vector512, 64);

impl<T: SimdElement> Vector512<T> {
    /// Number of lanes.
    pub const COUNT: usize = <Self as SimdVector<T>>::COUNT;

    /// Alignment required by the aligned memory operations.
    pub const ALIGNMENT: usize = <Self as SimdVector<T>>::ALIGNMENT;

    /// Both halves set to `value`.
    #[inline(always)]
    pub fn from_vector256(value: Vector256<T>) -> Self {
        Self::from_half(value)
    }
}

impl<T: SimdElement> SimdVector<T> for Vector512<T> {
    const WIDTH: VectorWidth = VectorWidth::W512;

    type Rebind<U: SimdElement> = Vector512<U>;

    #[inline(always)]
    fn unary(self, op: impl Fn(T) -> T + Copy) -> Self {
        dispatch_unary(self, op)
    }

    #[inline(always)]
    fn binary(self, rhs: Self, op: impl Fn(T, T) -> T + Copy) -> Self {
        dispatch_binary(self, rhs, op)
    }

    #[inline(always)]
    fn ternary(self, b: Self, c: Self, op: impl Fn(T, T, T) -> T + Copy) -> Self {
        dispatch_ternary(self, b, c, op)
    }

    #[inline(always)]
    fn reduce_sum(self) -> T {
        dispatch_sum(self)
    }

    #[inline(always)]
    fn most_significant_bits(self) -> u64 {
        dispatch_most_significant_bits(self)
    }

    #[inline(always)]
    fn map_lanes<U: SimdElement>(self, op: impl Fn(T) -> U + Copy) -> Vector512<U> {
        if Self::is_hardware_accelerated() {
            lanes_map(self, op)
        } else {
            Vector512 {
                lower: self.lower.map_lanes(op),
                upper: self.upper.map_lanes(op),
            }
        }
    }

    /// Decomposed, each half of `indices` gathers from both source halves:
    /// once as is and once shifted down by the half count. Wrapping
    /// subtraction keeps every out-of-range index out of range, so at most
    /// one gather can hit and the other contributes zero.
    #[inline(always)]
    fn permute(self, indices: Vector512<T::Index>) -> Self {
        if Self::is_hardware_accelerated() {
            return lanes_permute(self, indices);
        }
        let half = <Vector256<T> as SimdVector<T>>::COUNT;
        let offset = Vector256::<T::Index>::splat(<T::Index as SimdElement>::from_position(half));
        let gather = |idx: Vector256<T::Index>| {
            let from_lower = self.lower.permute(idx);
            let from_upper = self
                .upper
                .permute(idx.binary(offset, <T::Index as SimdElement>::sub));
            from_lower.binary(from_upper, T::bitwise_or)
        };
        Vector512 {
            lower: gather(indices.lower),
            upper: gather(indices.upper),
        }
    }
}

impl<T: SimdElement> Composite<T> for Vector512<T> {
    type Half = Vector256<T>;

    #[inline(always)]
    fn from_halves(lower: Vector256<T>, upper: Vector256<T>) -> Self {
        Vector512 { lower, upper }
    }

    #[inline(always)]
    fn lower(self) -> Vector256<T> {
        self.lower
    }

    #[inline(always)]
    fn upper(self) -> Vector256<T> {
        self.upper
    }
}
