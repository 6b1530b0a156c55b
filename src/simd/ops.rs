//! Elementwise operator core.
//!
//! [`SimdOps`] is implemented for every [`SimdVector`], so the same method set
//! is available on `Vector128`, `Vector256` and `Vector512`. Each method maps
//! to one scalar kernel of [`SimdElement`] through the vector's dispatch
//! primitives, which decide between the whole-width kernel and the
//! half-width decomposition.
//!
//! Comparison and classification methods return lane masks: all bits set
//! where the predicate holds, zero elsewhere.
//!
//! Type-dependent short-circuits are resolved from [`SimdElement::KIND`]:
//!
//! | Operation | Integers | Unsigned |
//! |-----------|----------|----------|
//! | `abs`, `copy_sign` | computed | identity |
//! | `ceiling`, `floor`, `round`, `round_with`, `truncate` | identity | identity |
//! | `is_nan`, `is_infinity`, `is_subnormal` | all zero | all zero |
//! | `is_finite`, `is_integer` | all set | all set |
//! | `is_negative` | computed | all zero |
//!
//! The `core::ops` operators are implemented at the bottom of this module in
//! terms of these methods.

use crate::simd::capability;
use crate::simd::element::{MidpointRounding, SimdElement, SimdFloat, SimdInt};
use crate::simd::traits::SimdVector;
use crate::simd::vector128::Vector128;
use crate::simd::vector256::Vector256;
use crate::simd::vector512::Vector512;

/// Elementwise arithmetic, comparison, bitwise and classification operations.
pub trait SimdOps<T: SimdElement>: SimdVector<T> {
    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Lanewise addition, wrapping for integers.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.binary(rhs, T::add)
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        self.binary(rhs, T::sub)
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        self.binary(rhs, T::mul)
    }

    /// Lanewise division.
    ///
    /// # Panics
    ///
    /// Integer division by zero panics, as it does for scalars.
    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        self.binary(rhs, T::div)
    }

    #[inline(always)]
    fn multiply_scalar(self, rhs: T) -> Self {
        self.binary(Self::splat(rhs), T::mul)
    }

    #[inline(always)]
    fn divide_scalar(self, rhs: T) -> Self {
        self.binary(Self::splat(rhs), T::div)
    }

    #[inline(always)]
    fn negate(self) -> Self {
        self.unary(T::negate)
    }

    /// Saturating addition; plain addition for floats.
    #[inline(always)]
    fn add_saturate(self, rhs: Self) -> Self {
        self.binary(rhs, T::add_saturate)
    }

    /// Saturating subtraction; plain subtraction for floats.
    #[inline(always)]
    fn subtract_saturate(self, rhs: Self) -> Self {
        self.binary(rhs, T::sub_saturate)
    }

    /// `self * b + c` with a single rounding.
    #[inline(always)]
    fn fused_multiply_add(self, b: Self, c: Self) -> Self
    where
        T: SimdFloat,
    {
        self.ternary(b, c, T::fused_multiply_add)
    }

    /// `self * b + c`, fused when the hardware has FMA.
    ///
    /// The result may differ in the last bit between machines.
    #[inline(always)]
    fn multiply_add_estimate(self, b: Self, c: Self) -> Self
    where
        T: SimdFloat,
    {
        if capability::has_fused_multiply_add() {
            self.fused_multiply_add(b, c)
        } else {
            self.ternary(b, c, |x, y, z| T::add(T::mul(x, y), z))
        }
    }

    // ------------------------------------------------------------------
    // Bitwise
    // ------------------------------------------------------------------

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        self.binary(rhs, T::bitwise_and)
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        self.binary(rhs, T::bitwise_or)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self.binary(rhs, T::bitwise_xor)
    }

    /// `self & !rhs`.
    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| T::bitwise_and(a, T::bitwise_not(b)))
    }

    #[inline(always)]
    fn ones_complement(self) -> Self {
        self.unary(T::bitwise_not)
    }

    /// Bitwise select: bits of `left` where `condition` is set, bits of
    /// `right` elsewhere.
    #[inline(always)]
    fn conditional_select(condition: Self, left: Self, right: Self) -> Self {
        condition.ternary(left, right, |c, l, r| {
            T::bitwise_or(T::bitwise_and(l, c), T::bitwise_and(r, T::bitwise_not(c)))
        })
    }

    #[inline(always)]
    fn shift_left(self, count: u32) -> Self
    where
        T: SimdInt,
    {
        self.unary(move |x| T::shift_left(x, count))
    }

    #[inline(always)]
    fn shift_right_arithmetic(self, count: u32) -> Self
    where
        T: SimdInt,
    {
        self.unary(move |x| T::shift_right_arithmetic(x, count))
    }

    #[inline(always)]
    fn shift_right_logical(self, count: u32) -> Self
    where
        T: SimdInt,
    {
        self.unary(move |x| T::shift_right_logical(x, count))
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    #[inline(always)]
    fn equals(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| T::mask(T::equals(a, b)))
    }

    #[inline(always)]
    fn less_than(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| T::mask(T::less_than(a, b)))
    }

    #[inline(always)]
    fn less_than_or_equal(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| T::mask(T::less_than_or_equal(a, b)))
    }

    #[inline(always)]
    fn greater_than(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| T::mask(T::less_than(b, a)))
    }

    #[inline(always)]
    fn greater_than_or_equal(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| T::mask(T::less_than_or_equal(b, a)))
    }

    // ------------------------------------------------------------------
    // Min / max
    // ------------------------------------------------------------------

    /// IEEE 754-2019 `maximum`.
    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.binary(rhs, T::max)
    }

    /// IEEE 754-2019 `minimum`.
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.binary(rhs, T::min)
    }

    #[inline(always)]
    fn max_native(self, rhs: Self) -> Self {
        self.binary(rhs, T::max_native)
    }

    #[inline(always)]
    fn min_native(self, rhs: Self) -> Self {
        self.binary(rhs, T::min_native)
    }

    #[inline(always)]
    fn max_number(self, rhs: Self) -> Self {
        self.binary(rhs, T::max_number)
    }

    #[inline(always)]
    fn min_number(self, rhs: Self) -> Self {
        self.binary(rhs, T::min_number)
    }

    #[inline(always)]
    fn max_magnitude(self, rhs: Self) -> Self {
        self.binary(rhs, T::max_magnitude)
    }

    #[inline(always)]
    fn min_magnitude(self, rhs: Self) -> Self {
        self.binary(rhs, T::min_magnitude)
    }

    #[inline(always)]
    fn max_magnitude_number(self, rhs: Self) -> Self {
        self.binary(rhs, T::max_magnitude_number)
    }

    #[inline(always)]
    fn min_magnitude_number(self, rhs: Self) -> Self {
        self.binary(rhs, T::min_magnitude_number)
    }

    /// `min(max(self, min), max)`. Bounds are not validated.
    #[inline(always)]
    fn clamp(self, min: Self, max: Self) -> Self {
        self.ternary(min, max, |x, lo, hi| T::min(T::max(x, lo), hi))
    }

    #[inline(always)]
    fn clamp_native(self, min: Self, max: Self) -> Self {
        self.ternary(min, max, |x, lo, hi| T::min_native(T::max_native(x, lo), hi))
    }

    // ------------------------------------------------------------------
    // Rounding and magnitude
    // ------------------------------------------------------------------

    #[inline(always)]
    fn abs(self) -> Self {
        if T::KIND.is_unsigned() {
            return self;
        }
        self.unary(T::abs)
    }

    /// Magnitude of `self` with the sign of `sign`.
    #[inline(always)]
    fn copy_sign(self, sign: Self) -> Self {
        if T::KIND.is_unsigned() {
            return self;
        }
        self.binary(sign, T::copy_sign)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.unary(T::sqrt)
    }

    #[inline(always)]
    fn ceiling(self) -> Self {
        if T::KIND.is_integer() {
            return self;
        }
        self.unary(T::ceiling)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        if T::KIND.is_integer() {
            return self;
        }
        self.unary(T::floor)
    }

    /// Round half to even.
    #[inline(always)]
    fn round(self) -> Self {
        if T::KIND.is_integer() {
            return self;
        }
        self.unary(T::round)
    }

    #[inline(always)]
    fn round_with(self, mode: MidpointRounding) -> Self {
        if T::KIND.is_integer() {
            return self;
        }
        self.unary(move |x| T::round_with(x, mode))
    }

    #[inline(always)]
    fn truncate(self) -> Self {
        if T::KIND.is_integer() {
            return self;
        }
        self.unary(T::truncate)
    }

    // ------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------

    #[inline(always)]
    fn is_nan(self) -> Self {
        if T::KIND.is_integer() {
            return Self::zero();
        }
        self.unary(|x| T::mask(T::is_nan(x)))
    }

    #[inline(always)]
    fn is_negative(self) -> Self {
        if T::KIND.is_unsigned() {
            return Self::zero();
        }
        self.unary(|x| T::mask(T::is_negative(x)))
    }

    #[inline(always)]
    fn is_positive(self) -> Self {
        if T::KIND.is_unsigned() {
            return Self::all_bits_set();
        }
        self.unary(|x| T::mask(T::is_positive(x)))
    }

    #[inline(always)]
    fn is_finite(self) -> Self {
        if T::KIND.is_integer() {
            return Self::all_bits_set();
        }
        self.unary(|x| T::mask(T::is_finite(x)))
    }

    #[inline(always)]
    fn is_infinity(self) -> Self {
        if T::KIND.is_integer() {
            return Self::zero();
        }
        self.unary(|x| T::mask(T::is_infinity(x)))
    }

    #[inline(always)]
    fn is_positive_infinity(self) -> Self {
        if T::KIND.is_integer() {
            return Self::zero();
        }
        self.unary(|x| T::mask(T::is_positive_infinity(x)))
    }

    #[inline(always)]
    fn is_negative_infinity(self) -> Self {
        if T::KIND.is_integer() {
            return Self::zero();
        }
        self.unary(|x| T::mask(T::is_negative_infinity(x)))
    }

    /// Normal floats; nonzero integers.
    #[inline(always)]
    fn is_normal(self) -> Self {
        self.unary(|x| T::mask(T::is_normal(x)))
    }

    #[inline(always)]
    fn is_subnormal(self) -> Self {
        if T::KIND.is_integer() {
            return Self::zero();
        }
        self.unary(|x| T::mask(T::is_subnormal(x)))
    }

    #[inline(always)]
    fn is_zero(self) -> Self {
        self.equals(Self::zero())
    }

    #[inline(always)]
    fn is_integer(self) -> Self {
        if T::KIND.is_integer() {
            return Self::all_bits_set();
        }
        self.unary(|x| T::mask(T::is_integer(x)))
    }

    #[inline(always)]
    fn is_even_integer(self) -> Self {
        self.unary(|x| T::mask(T::is_even_integer(x)))
    }

    #[inline(always)]
    fn is_odd_integer(self) -> Self {
        self.unary(|x| T::mask(T::is_odd_integer(x)))
    }
}

impl<T: SimdElement, V: SimdVector<T>> SimdOps<T> for V {}

macro_rules! impl_binary_operator {
    ($vector:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl<T: SimdElement> std::ops::$trait for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                SimdOps::$op(self, rhs)
            }
        }

        impl<T: SimdElement> std::ops::$assign_trait for $vector<T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = SimdOps::$op(*self, rhs);
            }
        }
    };
}

macro_rules! impl_operators {
    ($($vector:ident),*) => {$(
        impl_binary_operator!($vector, Add, add, AddAssign, add_assign, add);
        impl_binary_operator!($vector, Sub, sub, SubAssign, sub_assign, subtract);
        impl_binary_operator!($vector, Mul, mul, MulAssign, mul_assign, multiply);
        impl_binary_operator!($vector, Div, div, DivAssign, div_assign, divide);
        impl_binary_operator!($vector, BitAnd, bitand, BitAndAssign, bitand_assign, bitwise_and);
        impl_binary_operator!($vector, BitOr, bitor, BitOrAssign, bitor_assign, bitwise_or);
        impl_binary_operator!($vector, BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

        impl<T: SimdElement> std::ops::Mul<T> for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: T) -> Self {
                SimdOps::multiply_scalar(self, rhs)
            }
        }

        impl<T: SimdElement> std::ops::Div<T> for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: T) -> Self {
                SimdOps::divide_scalar(self, rhs)
            }
        }

        impl<T: SimdElement> std::ops::Neg for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                SimdOps::negate(self)
            }
        }

        impl<T: SimdElement> std::ops::Not for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                SimdOps::ones_complement(self)
            }
        }

        impl<T: SimdInt> std::ops::Shl<u32> for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn shl(self, count: u32) -> Self {
                SimdOps::shift_left(self, count)
            }
        }

        /// Arithmetic for signed lanes, logical for unsigned lanes.
        impl<T: SimdInt> std::ops::Shr<u32> for $vector<T> {
            type Output = Self;

            #[inline(always)]
            fn shr(self, count: u32) -> Self {
                SimdOps::shift_right_arithmetic(self, count)
            }
        }
    )*};
}

impl_operators!(Vector128, Vector256, Vector512);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::capability::{with_dispatch_path, DispatchPath};

    fn both_paths<R: PartialEq + std::fmt::Debug>(f: impl Fn() -> R) -> R {
        let fast = with_dispatch_path(DispatchPath::Accelerated, &f);
        let slow = with_dispatch_path(DispatchPath::Decomposed, &f);
        assert_eq!(fast, slow);
        fast
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_operators_match_methods() {
            let a = Vector512::<i32>::create_sequence(-8, 1);
            let b = Vector512::<i32>::splat(3);
            assert_eq!(a + b, a.add(b));
            assert_eq!(a - b, a.subtract(b));
            assert_eq!(a * b, a.multiply(b));
            assert_eq!(a / b, a.divide(b));
            assert_eq!(a * 3, a.multiply_scalar(3));
            assert_eq!(a / 3, a.divide_scalar(3));
            assert_eq!(-a, a.negate());
            assert_eq!(!a, a.ones_complement());
            assert_eq!(a & b, a.bitwise_and(b));
            assert_eq!(a | b, a.bitwise_or(b));
            assert_eq!(a ^ b, a.xor(b));

            let mut c = a;
            c += b;
            c -= b;
            c *= b;
            c /= b;
            assert_eq!(c, a);
        }

        #[test]
        fn test_integer_wraparound() {
            let v = Vector512::<u8>::splat(200);
            assert_eq!(both_paths(|| v + v), Vector512::splat(144));
            assert_eq!(
                both_paths(|| v.add_saturate(v)),
                Vector512::splat(u8::MAX)
            );
            let s = Vector256::<i16>::splat(i16::MIN);
            assert_eq!(s.subtract_saturate(Vector256::one()), s);
            assert_eq!(-s, s);
        }

        #[test]
        fn test_float_saturation_is_plain() {
            let v = Vector512::<f32>::splat(f32::MAX);
            assert_eq!(v.add_saturate(v), Vector512::splat(f32::INFINITY));
        }

        #[test]
        fn test_fma() {
            let a = Vector512::<f64>::splat(0.1);
            let fused = a.fused_multiply_add(Vector512::splat(10.0), Vector512::splat(-1.0));
            assert_eq!(fused.to_scalar(), 0.1f64.mul_add(10.0, -1.0));
            let estimate = a.multiply_add_estimate(Vector512::splat(2.0), Vector512::splat(1.0));
            assert_eq!(estimate.to_scalar(), 1.2);
        }

        #[test]
        fn test_shifts() {
            let v = Vector512::<i16>::splat(-16);
            assert_eq!(v << 2, Vector512::splat(-64));
            assert_eq!(v >> 2, Vector512::splat(-4));
            assert_eq!(
                v.shift_right_logical(12),
                Vector512::splat(0x000f)
            );
            assert_eq!(Vector512::<u32>::one().shift_left(33), Vector512::splat(2));
            let u = Vector128::<u8>::splat(0x80);
            assert_eq!(u >> 7, Vector128::splat(1));
        }
    }

    mod bitwise_tests {
        use super::*;

        #[test]
        fn test_and_not() {
            let a = Vector512::<u32>::splat(0b1111);
            let b = Vector512::<u32>::splat(0b0101);
            assert_eq!(a.and_not(b), Vector512::splat(0b1010));
        }

        #[test]
        fn test_conditional_select() {
            let cond = Vector512::<f32>::indices().less_than(Vector512::splat(4.0));
            let left = Vector512::splat(1.0);
            let right = Vector512::splat(2.0);
            let picked = both_paths(|| Vector512::conditional_select(cond, left, right));
            assert_eq!(&picked.as_slice()[..4], &[1.0; 4]);
            assert_eq!(&picked.as_slice()[4..], &[2.0; 12]);
        }

        #[test]
        fn test_float_bit_operations() {
            let v = Vector512::<f64>::splat(-2.0);
            let sign = Vector512::<f64>::splat(-0.0);
            assert_eq!(v.and_not(sign), Vector512::splat(2.0));
            assert_eq!(v.xor(sign), Vector512::splat(2.0));
        }
    }

    mod comparison_tests {
        use super::*;

        #[test]
        fn test_masks() {
            let a = Vector512::<i64>::from([1, 2, 3, 4, 5, 6, 7, 8]);
            let b = Vector512::<i64>::splat(4);
            assert_eq!(
                a.less_than(b).to_vec(),
                vec![-1, -1, -1, 0, 0, 0, 0, 0]
            );
            assert_eq!(
                a.greater_than_or_equal(b).to_vec(),
                vec![0, 0, 0, -1, -1, -1, -1, -1]
            );
            assert_eq!(a.equals(b).to_vec(), vec![0, 0, 0, -1, 0, 0, 0, 0]);
            assert_eq!(
                a.less_than_or_equal(b).to_vec(),
                vec![-1, -1, -1, -1, 0, 0, 0, 0]
            );
            assert_eq!(a.greater_than(b).to_vec(), vec![0, 0, 0, 0, -1, -1, -1, -1]);
        }

        #[test]
        fn test_nan_compares_false() {
            let v = Vector512::<f32>::splat(f32::NAN);
            assert!(v.equals(v).as_slice().iter().all(|x| x.to_bits() == 0));
            assert!(v.is_nan().as_slice().iter().all(|x| x.to_bits() == u32::MAX));
        }
    }

    mod min_max_tests {
        use super::*;

        #[test]
        fn test_min_max_variants() {
            let a = Vector128::<f32>::from([f32::NAN, -0.0, 1.0, -5.0]);
            let b = Vector128::<f32>::from([1.0, 0.0, f32::NAN, 3.0]);

            let max = a.max(b).to_vec();
            assert!(max[0].is_nan() && max[2].is_nan());
            assert!(max[1] == 0.0 && max[1].is_sign_positive());
            assert_eq!(max[3], 3.0);

            let max_number = a.max_number(b).to_vec();
            assert_eq!(max_number, vec![1.0, 0.0, 1.0, 3.0]);

            let min_magnitude = a.min_magnitude_number(b).to_vec();
            assert_eq!(min_magnitude[3], 3.0);
            assert_eq!(min_magnitude[0], 1.0);
        }

        #[test]
        fn test_clamp() {
            let v = Vector512::<i32>::create_sequence(-8, 1);
            let clamped = both_paths(|| v.clamp(Vector512::splat(-2), Vector512::splat(3)));
            assert_eq!(clamped.get_element(0).unwrap(), -2);
            assert_eq!(clamped.get_element(15).unwrap(), 3);
            assert_eq!(clamped.get_element(8).unwrap(), 0);
            assert_eq!(v.clamp_native(Vector512::splat(-2), Vector512::splat(3)), clamped);
        }
    }

    mod short_circuit_tests {
        use super::*;

        #[test]
        fn test_unsigned_identities() {
            let v = Vector512::<u16>::create_sequence(65530, 1);
            assert_eq!(v.abs(), v);
            assert_eq!(v.copy_sign(Vector512::splat(0)), v);
            assert_eq!(v.is_negative(), Vector512::zero());
            assert_eq!(v.is_positive(), Vector512::all_bits_set());
        }

        #[test]
        fn test_integer_rounding_identities() {
            let v = Vector512::<i8>::create_sequence(-32, 1);
            assert_eq!(v.floor(), v);
            assert_eq!(v.ceiling(), v);
            assert_eq!(v.round(), v);
            assert_eq!(v.truncate(), v);
            assert_eq!(v.round_with(MidpointRounding::AwayFromZero), v);
            assert_eq!(v.is_nan(), Vector512::zero());
            assert_eq!(v.is_finite(), Vector512::all_bits_set());
            assert_eq!(v.is_integer(), Vector512::all_bits_set());
        }

        #[test]
        fn test_signed_abs_wraps() {
            let v = Vector512::<i32>::splat(i32::MIN);
            assert_eq!(v.abs(), v);
            assert_eq!(Vector512::<i32>::splat(-7).abs(), Vector512::splat(7));
        }
    }

    mod rounding_tests {
        use super::*;

        #[test]
        fn test_float_rounding() {
            let v = Vector128::<f64>::from([2.5, -2.5]);
            assert_eq!(v.round().to_vec(), vec![2.0, -2.0]);
            assert_eq!(v.floor().to_vec(), vec![2.0, -3.0]);
            assert_eq!(v.ceiling().to_vec(), vec![3.0, -2.0]);
            assert_eq!(v.truncate().to_vec(), vec![2.0, -2.0]);
            assert_eq!(
                v.round_with(MidpointRounding::AwayFromZero).to_vec(),
                vec![3.0, -3.0]
            );
        }

        #[test]
        fn test_sqrt_and_copy_sign() {
            let v = Vector512::<f32>::splat(16.0);
            assert_eq!(v.sqrt(), Vector512::splat(4.0));
            assert_eq!(v.copy_sign(Vector512::splat(-1.0)), Vector512::splat(-16.0));
            assert_eq!(Vector512::<u64>::splat(81).sqrt(), Vector512::splat(9));
        }
    }

    mod classification_tests {
        use super::*;

        #[test]
        fn test_float_classification() {
            let v = Vector128::<f32>::from([f32::INFINITY, f32::NEG_INFINITY, 1e-40, -3.0]);
            let set = |m: Vector128<f32>| -> Vec<bool> {
                m.as_slice().iter().map(|x| x.to_bits() == u32::MAX).collect()
            };
            assert_eq!(set(v.is_infinity()), vec![true, true, false, false]);
            assert_eq!(set(v.is_positive_infinity()), vec![true, false, false, false]);
            assert_eq!(set(v.is_negative_infinity()), vec![false, true, false, false]);
            assert_eq!(set(v.is_finite()), vec![false, false, true, true]);
            assert_eq!(set(v.is_subnormal()), vec![false, false, true, false]);
            assert_eq!(set(v.is_normal()), vec![false, false, false, true]);
            assert_eq!(set(v.is_negative()), vec![false, true, false, true]);
            assert_eq!(set(v.is_integer()), vec![false, false, false, true]);
            assert_eq!(set(v.is_odd_integer()), vec![false, false, false, true]);
            assert_eq!(set(v.is_even_integer()), vec![false; 4]);
            assert_eq!(set(v.is_zero()), vec![false; 4]);
        }

        #[test]
        fn test_integer_parity() {
            let v = Vector128::<i32>::from([-2, -1, 0, 1]);
            assert_eq!(v.is_even_integer().to_vec(), vec![-1, 0, -1, 0]);
            assert_eq!(v.is_odd_integer().to_vec(), vec![0, -1, 0, -1]);
            assert_eq!(v.is_zero().to_vec(), vec![0, 0, -1, 0]);
            assert_eq!(v.is_normal().to_vec(), vec![-1, -1, 0, -1]);
        }
    }
}
