//! 128-bit vector, the leaf of the width hierarchy.
//!
//! `Vector128<T>` holds its lanes in a plain array aligned to 16 bytes. It
//! always runs the lane kernels directly; the loops are shaped so the
//! compiler lowers them to SSE2 / NEON instructions.

use crate::simd::capability::VectorWidth;
use crate::simd::element::SimdElement;
use crate::simd::traits::{
    impl_array_conversions, impl_vector_common, lanes_binary, lanes_map,
    lanes_most_significant_bits, lanes_permute, lanes_ternary, lanes_unary, pairwise_sum,
    SimdVector,
};

/// A 128-bit vector of `T` lanes.
#[derive(Clone, Copy)]
#[repr(C, align(16))]
pub struct Vector128<T: SimdElement> {
    lanes: T::Lanes128,
}

impl_vector_common!(Vector128);
impl_array_conversions!(Vector128, 16);

impl<T: SimdElement> SimdVector<T> for Vector128<T> {
    const WIDTH: VectorWidth = VectorWidth::W128;

    type Rebind<U: SimdElement> = Vector128<U>;

    #[inline(always)]
    fn unary(self, op: impl Fn(T) -> T + Copy) -> Self {
        lanes_unary(self, op)
    }

    #[inline(always)]
    fn binary(self, rhs: Self, op: impl Fn(T, T) -> T + Copy) -> Self {
        lanes_binary(self, rhs, op)
    }

    #[inline(always)]
    fn ternary(self, b: Self, c: Self, op: impl Fn(T, T, T) -> T + Copy) -> Self {
        lanes_ternary(self, b, c, op)
    }

    #[inline(always)]
    fn reduce_sum(self) -> T {
        pairwise_sum(self.as_slice())
    }

    #[inline(always)]
    fn most_significant_bits(self) -> u64 {
        lanes_most_significant_bits(self.as_slice())
    }

    #[inline(always)]
    fn map_lanes<U: SimdElement>(self, op: impl Fn(T) -> U + Copy) -> Vector128<U> {
        lanes_map(self, op)
    }

    #[inline(always)]
    fn permute(self, indices: Vector128<T::Index>) -> Self {
        lanes_permute(self, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::convert::SimdConvert;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<Vector128<u8>>(), 16);
        assert_eq!(std::mem::align_of::<Vector128<f64>>(), 16);
        assert_eq!(<Vector128<u8> as SimdVector<u8>>::COUNT, 16);
        assert_eq!(<Vector128<f64> as SimdVector<f64>>::COUNT, 2);
        assert_eq!(
            <Vector128<usize> as SimdVector<usize>>::COUNT,
            16 / std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_array_round_trip() {
        let v = Vector128::from([1i32, -2, 3, -4]);
        assert_eq!(v.to_vec(), vec![1, -2, 3, -4]);
        let back: [i32; 4] = v.into();
        assert_eq!(back, [1, -2, 3, -4]);
    }

    #[test]
    fn test_sum_is_pairwise() {
        let v = Vector128::from([1.0f32, 2.0, 3.0, 4.0]);
        assert_eq!(v.reduce_sum(), (1.0 + 2.0) + (3.0 + 4.0));
    }

    #[test]
    fn test_permute_zero_fills() {
        let v = Vector128::from([1u16, 2, 3, 4, 5, 6, 7, 8]);
        let indices = Vector128::from([7i16, 0, 8, -1, 3, 3, 100, 1]);
        assert_eq!(v.permute(indices.reinterpret::<u16>()).to_vec(), vec![8, 1, 0, 0, 4, 4, 0, 2]);
    }

    #[test]
    fn test_map_lanes_changes_type() {
        let v = Vector128::from([1.5f32, -2.5, 3.0, 4.25]);
        let out: Vector128<i32> = v.map_lanes(|x| x as i32);
        assert_eq!(out.to_vec(), vec![1, -2, 3, 4]);
    }

    #[test]
    fn test_formatting() {
        let v = Vector128::from([1u32, 2, 3, 4]);
        assert_eq!(v.to_string(), "<1, 2, 3, 4>");
        assert_eq!(format!("{v:?}"), "Vector128([1, 2, 3, 4])");
    }
}
