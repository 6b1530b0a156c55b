//! Conversion, narrowing and widening.
//!
//! Three families live here:
//!
//! - **Reinterpretation** ([`SimdConvert::reinterpret`] and the `as_*`
//!   shorthands) keeps the bits and changes the lane type. It is a checked
//!   `bytemuck` cast; every vector of one width has the same size.
//! - **Lane conversion** ([`SimdConvert::convert`] and the `convert_to_*`
//!   wrappers) between same-width float and integer lanes. The default path
//!   saturates, NaN becomes zero. The `*_native` counterparts reproduce the
//!   platform instruction: on x86 an out-of-range lane yields the "integer
//!   indefinite" value, elsewhere it saturates.
//! - **Narrowing and widening** between adjacent lane sizes, as inherent
//!   functions on each vector type. Composite widths narrow and widen their
//!   halves independently and recombine.

use crate::simd::element::{ConvertLane, Narrowing, SimdElement, Widening};
use crate::simd::traits::{Composite, SimdVector};
use crate::simd::vector128::Vector128;
use crate::simd::vector256::Vector256;
use crate::simd::vector512::Vector512;

/// Lane type changes that keep the vector width.
pub trait SimdConvert<T: SimdElement>: SimdVector<T> {
    /// The same bits viewed as lanes of `U`.
    #[inline(always)]
    fn reinterpret<U: SimdElement>(self) -> Self::Rebind<U> {
        bytemuck::cast(self)
    }

    #[inline(always)]
    fn as_u8(self) -> Self::Rebind<u8> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_i8(self) -> Self::Rebind<i8> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_u16(self) -> Self::Rebind<u16> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_i16(self) -> Self::Rebind<i16> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_u32(self) -> Self::Rebind<u32> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_i32(self) -> Self::Rebind<i32> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_u64(self) -> Self::Rebind<u64> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_i64(self) -> Self::Rebind<i64> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_usize(self) -> Self::Rebind<usize> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_isize(self) -> Self::Rebind<isize> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_f32(self) -> Self::Rebind<f32> {
        self.reinterpret()
    }

    #[inline(always)]
    fn as_f64(self) -> Self::Rebind<f64> {
        self.reinterpret()
    }

    /// Lanewise saturating conversion to `U`.
    #[inline]
    fn convert<U: SimdElement>(self) -> Self::Rebind<U>
    where
        T: ConvertLane<U>,
    {
        self.map_lanes(<T as ConvertLane<U>>::convert)
    }

    /// Lanewise conversion to `U` with the platform's overflow behavior.
    #[inline]
    fn convert_native<U: SimdElement>(self) -> Self::Rebind<U>
    where
        T: ConvertLane<U>,
    {
        self.map_lanes(<T as ConvertLane<U>>::convert_native)
    }

    #[inline(always)]
    fn convert_to_i32(self) -> Self::Rebind<i32>
    where
        T: ConvertLane<i32>,
    {
        self.convert()
    }

    #[inline(always)]
    fn convert_to_i32_native(self) -> Self::Rebind<i32>
    where
        T: ConvertLane<i32>,
    {
        self.convert_native()
    }

    #[inline(always)]
    fn convert_to_u32(self) -> Self::Rebind<u32>
    where
        T: ConvertLane<u32>,
    {
        self.convert()
    }

    #[inline(always)]
    fn convert_to_u32_native(self) -> Self::Rebind<u32>
    where
        T: ConvertLane<u32>,
    {
        self.convert_native()
    }

    #[inline(always)]
    fn convert_to_i64(self) -> Self::Rebind<i64>
    where
        T: ConvertLane<i64>,
    {
        self.convert()
    }

    #[inline(always)]
    fn convert_to_i64_native(self) -> Self::Rebind<i64>
    where
        T: ConvertLane<i64>,
    {
        self.convert_native()
    }

    #[inline(always)]
    fn convert_to_u64(self) -> Self::Rebind<u64>
    where
        T: ConvertLane<u64>,
    {
        self.convert()
    }

    #[inline(always)]
    fn convert_to_u64_native(self) -> Self::Rebind<u64>
    where
        T: ConvertLane<u64>,
    {
        self.convert_native()
    }

    /// Round to nearest.
    #[inline(always)]
    fn convert_to_f32(self) -> Self::Rebind<f32>
    where
        T: ConvertLane<f32>,
    {
        self.convert()
    }

    /// Round to nearest.
    #[inline(always)]
    fn convert_to_f64(self) -> Self::Rebind<f64>
    where
        T: ConvertLane<f64>,
    {
        self.convert()
    }
}

impl<T: SimdElement, V: SimdVector<T>> SimdConvert<T> for V {}

impl<T: Narrowing> Vector128<T> {
    /// Truncates every lane of `lower` then `upper` into one vector of the
    /// narrower type.
    #[inline]
    pub fn narrow(lower: Self, upper: Self) -> Vector128<T::Narrow> {
        narrow_leaf(lower, upper, T::narrow_truncating)
    }

    /// Like [`narrow`](Self::narrow), clamping to the narrower range.
    #[inline]
    pub fn narrow_with_saturation(lower: Self, upper: Self) -> Vector128<T::Narrow> {
        narrow_leaf(lower, upper, T::narrow_saturating)
    }
}

fn narrow_leaf<T: Narrowing>(
    lower: Vector128<T>,
    upper: Vector128<T>,
    op: impl Fn(T) -> T::Narrow,
) -> Vector128<T::Narrow> {
    let mut out = Vector128::<T::Narrow>::zero();
    let lanes = lower.as_slice().iter().chain(upper.as_slice());
    for (lane, &x) in out.as_mut_slice().iter_mut().zip(lanes) {
        *lane = op(x);
    }
    out
}

impl<T: Widening> Vector128<T> {
    /// Widens the lower and upper halves of the lanes into two vectors.
    #[inline]
    pub fn widen(self) -> (Vector128<T::Wide>, Vector128<T::Wide>) {
        (self.widen_lower(), self.widen_upper())
    }

    #[inline]
    pub fn widen_lower(self) -> Vector128<T::Wide> {
        widen_leaf(&self.as_slice()[..<Self as SimdVector<T>>::COUNT / 2])
    }

    #[inline]
    pub fn widen_upper(self) -> Vector128<T::Wide> {
        widen_leaf(&self.as_slice()[<Self as SimdVector<T>>::COUNT / 2..])
    }
}

fn widen_leaf<T: Widening>(lanes: &[T]) -> Vector128<T::Wide> {
    let mut out = Vector128::<T::Wide>::zero();
    for (lane, &x) in out.as_mut_slice().iter_mut().zip(lanes) {
        *lane = T::widen(x);
    }
    out
}

macro_rules! impl_composite_resize {
    ($vector:ident, $half:ident) => {
        impl<T: Narrowing> $vector<T> {
            /// Truncates every lane of `lower` then `upper` into one vector of
            /// the narrower type, half by half.
            #[inline]
            pub fn narrow(lower: Self, upper: Self) -> $vector<T::Narrow> {
                <$vector<T::Narrow> as Composite<T::Narrow>>::from_halves(
                    $half::narrow(lower.lower(), lower.upper()),
                    $half::narrow(upper.lower(), upper.upper()),
                )
            }

            /// Like [`narrow`](Self::narrow), clamping to the narrower range.
            #[inline]
            pub fn narrow_with_saturation(lower: Self, upper: Self) -> $vector<T::Narrow> {
                <$vector<T::Narrow> as Composite<T::Narrow>>::from_halves(
                    $half::narrow_with_saturation(lower.lower(), lower.upper()),
                    $half::narrow_with_saturation(upper.lower(), upper.upper()),
                )
            }
        }

        impl<T: Widening> $vector<T> {
            /// Widens the lower and upper halves of the lanes into two vectors.
            #[inline]
            pub fn widen(self) -> ($vector<T::Wide>, $vector<T::Wide>) {
                (self.widen_lower(), self.widen_upper())
            }

            #[inline]
            pub fn widen_lower(self) -> $vector<T::Wide> {
                let (lower, upper) = self.lower().widen();
                <$vector<T::Wide> as Composite<T::Wide>>::from_halves(lower, upper)
            }

            #[inline]
            pub fn widen_upper(self) -> $vector<T::Wide> {
                let (lower, upper) = self.upper().widen();
                <$vector<T::Wide> as Composite<T::Wide>>::from_halves(lower, upper)
            }
        }
    };
}

impl_composite_resize!(Vector256, Vector128);
impl_composite_resize!(Vector512, Vector256);

#[cfg(test)]
mod tests {
    use super::*;

    mod reinterpret_tests {
        use super::*;

        #[test]
        fn test_float_bits() {
            let v = Vector512::<f32>::splat(1.0);
            assert_eq!(v.as_u32(), Vector512::splat(0x3f80_0000));
            assert_eq!(v.as_i32().as_f32(), v);
        }

        #[test]
        fn test_byte_view_keeps_lane_order() {
            let v = Vector128::<u16>::from([0x0102, 0, 0, 0, 0, 0, 0, 0x0304]);
            let bytes = v.as_u8().to_vec();
            assert_eq!(&bytes[..2], &u16::to_ne_bytes(0x0102));
            assert_eq!(&bytes[14..], &u16::to_ne_bytes(0x0304));
        }
    }

    mod lane_conversion_tests {
        use super::*;

        #[test]
        fn test_saturating_float_to_int() {
            let v = Vector128::<f32>::from([f32::MAX * 2.0, -f32::MAX * 2.0, f32::NAN, 0.0]);
            assert_eq!(v.convert_to_i32().to_vec(), vec![i32::MAX, i32::MIN, 0, 0]);
            assert_eq!(v.convert_to_u32().to_vec(), vec![u32::MAX, 0, 0, 0]);
        }

        #[test]
        fn test_native_float_to_int() {
            let v = Vector128::<f64>::from([1e300, -7.9]);
            let native = v.convert_to_i64_native().to_vec();
            assert_eq!(native[1], -7);
            if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
                assert_eq!(native[0], i64::MIN);
            } else {
                assert_eq!(native[0], i64::MAX);
            }
            assert_eq!(v.convert_to_u64().to_vec(), vec![u64::MAX, 0]);
        }

        #[test]
        fn test_int_to_float() {
            let v = Vector256::<i64>::from([-1, 0, 1 << 53, (1 << 53) + 1]);
            assert_eq!(
                v.convert_to_f64().to_vec(),
                vec![-1.0, 0.0, 9007199254740992.0, 9007199254740992.0]
            );
            let u = Vector128::<u32>::splat(u32::MAX);
            assert_eq!(u.convert_to_f32(), Vector128::splat(4294967296.0));
        }
    }

    mod narrow_tests {
        use super::*;

        #[test]
        fn test_narrow_lane_order() {
            let lower = Vector512::<i32>::create_sequence(0, 1);
            let upper = Vector512::<i32>::create_sequence(16, 1);
            let narrow = Vector512::narrow(lower, upper);
            assert_eq!(narrow.to_vec(), (0..32).collect::<Vec<i16>>());
        }

        #[test]
        fn test_narrow_truncates_and_saturates() {
            let lower = Vector256::<u16>::splat(0x1ff);
            let upper = Vector256::<u16>::splat(7);
            let truncated = Vector256::narrow(lower, upper);
            assert_eq!(truncated.get_element(0).unwrap(), 0xff);
            assert_eq!(truncated.get_element(31).unwrap(), 7);

            let signed = Vector128::<i64>::from([i64::MAX, -5]);
            let saturated = Vector128::narrow_with_saturation(signed, Vector128::zero());
            assert_eq!(saturated.to_vec(), vec![i32::MAX, -5, 0, 0]);
        }

        #[test]
        fn test_narrow_double_to_float() {
            let v = Vector512::<f64>::splat(1e300);
            let narrow = Vector512::narrow_with_saturation(v, Vector512::splat(0.5));
            assert_eq!(narrow.get_element(0).unwrap(), f32::INFINITY);
            assert_eq!(narrow.get_element(15).unwrap(), 0.5);
        }
    }

    mod widen_tests {
        use super::*;

        #[test]
        fn test_widen_bytes() {
            let v = Vector512::<i8>::create_sequence(-32, 1);
            let (lower, upper) = v.widen();
            assert_eq!(lower.to_vec(), (-32..0).collect::<Vec<i16>>());
            assert_eq!(upper.to_vec(), (0..32).collect::<Vec<i16>>());
        }

        #[test]
        fn test_widen_unsigned_is_zero_extension() {
            let v = Vector128::<u8>::splat(0xff);
            assert_eq!(v.widen_lower(), Vector128::<u16>::splat(0xff));
        }

        #[test]
        fn test_narrow_widen_round_trip() {
            let a = Vector256::<i32>::create_sequence(-1000, 250);
            let b = Vector256::<i32>::create_sequence(i16::MIN as i32, 1);
            let (wa, wb) = Vector256::narrow(a, b).widen();
            assert_eq!((wa, wb), (a, b));
        }
    }
}
