//! 256-bit vector made of two 128-bit halves.

use crate::simd::capability::VectorWidth;
use crate::simd::element::SimdElement;
use crate::simd::traits::{
    dispatch_binary, dispatch_most_significant_bits, dispatch_sum, dispatch_ternary,
    dispatch_unary, impl_array_conversions, impl_vector_common, lanes_map, lanes_permute,
    Composite, SimdVector,
};
use crate::simd::vector128::Vector128;

/// A 256-bit vector of `T` lanes, stored as `lower` then `upper`.
#[derive(Clone, Copy)]
#[repr(C, align(32))]
pub struct Vector256<T: SimdElement> {
    lower: Vector128<T>,
    upper: Vector128<T>,
}

impl_vector_common!(Vector256);
impl_array_conversions!(Vector256, 32);

impl<T: SimdElement> SimdVector<T> for Vector256<T> {
    const WIDTH: VectorWidth = VectorWidth::W256;

    type Rebind<U: SimdElement> = Vector256<U>;

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
    fn map_lanes<U: SimdElement>(self, op: impl Fn(T) -> U + Copy) -> Vector256<U> {
        if Self::is_hardware_accelerated() {
            lanes_map(self, op)
        } else {
            Vector256 {
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
    fn permute(self, indices: Vector256<T::Index>) -> Self {
        if Self::is_hardware_accelerated() {
            return lanes_permute(self, indices);
        }
        let half = <Vector128<T> as SimdVector<T>>::COUNT;
        let offset = Vector128::<T::Index>::splat(<T::Index as SimdElement>::from_position(half));
        let gather = |idx: Vector128<T::Index>| {
            let from_lower = self.lower.permute(idx);
            let from_upper = self
                .upper
                .permute(idx.binary(offset, <T::Index as SimdElement>::sub));
            from_lower.binary(from_upper, T::bitwise_or)
        };
        Vector256 {
            lower: gather(indices.lower),
            upper: gather(indices.upper),
        }
    }
}

impl<T: SimdElement> Composite<T> for Vector256<T> {
    type Half = Vector128<T>;

    #[inline(always)]
    fn from_halves(lower: Vector128<T>, upper: Vector128<T>) -> Self {
        Vector256 { lower, upper }
    }

    #[inline(always)]
    fn lower(self) -> Vector128<T> {
        self.lower
    }

    #[inline(always)]
    fn upper(self) -> Vector128<T> {
        self.upper
    }
}
