//! Lane element types.
//!
//! [`SimdElement`] is a sealed trait implemented for exactly twelve primitive
//! types: `u8 i8 u16 i16 u32 i32 u64 i64 usize isize f32 f64`. Every vector
//! operation is written once, generically, against the associated functions of
//! this trait; per-type behavior lives in the macro-generated impls below and
//! type-dependent short-circuits test [`SimdElement::KIND`], which the
//! compiler folds away after monomorphization.
//!
//! Integer arithmetic wraps (twos complement), floating-point arithmetic is
//! IEEE-754. Comparison and classification results are lane masks: all bits
//! set for `true`, zero for `false`.

use std::any::TypeId;
use std::fmt::{self, Debug};
use std::str::FromStr;

use bytemuck::Pod;
use num::traits::{
    AsPrimitive, SaturatingAdd, SaturatingSub, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub,
};

use crate::error::{unsupported_element_type, Result, SimdError};
use crate::simd::math;

mod sealed {
    pub trait Sealed {}
}

/// Runtime description of a lane element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    USize,
    ISize,
    F32,
    F64,
}

impl ElementKind {
    /// All supported kinds.
    pub const ALL: [ElementKind; 12] = [
        ElementKind::U8,
        ElementKind::I8,
        ElementKind::U16,
        ElementKind::I16,
        ElementKind::U32,
        ElementKind::I32,
        ElementKind::U64,
        ElementKind::I64,
        ElementKind::USize,
        ElementKind::ISize,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Returns `true` for `f32` and `f64`.
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Returns `true` for every integer kind.
    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns `true` for unsigned integer kinds.
    #[inline(always)]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            ElementKind::U8
                | ElementKind::U16
                | ElementKind::U32
                | ElementKind::U64
                | ElementKind::USize
        )
    }

    /// Returns `true` for signed integer kinds.
    #[inline(always)]
    pub const fn is_signed_integer(self) -> bool {
        self.is_integer() && !self.is_unsigned()
    }

    /// Size of one lane in bytes.
    pub const fn size(self) -> usize {
        match self {
            ElementKind::U8 | ElementKind::I8 => 1,
            ElementKind::U16 | ElementKind::I16 => 2,
            ElementKind::U32 | ElementKind::I32 | ElementKind::F32 => 4,
            ElementKind::U64 | ElementKind::I64 | ElementKind::F64 => 8,
            ElementKind::USize | ElementKind::ISize => std::mem::size_of::<usize>(),
        }
    }

    /// Rust name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::U8 => "u8",
            ElementKind::I8 => "i8",
            ElementKind::U16 => "u16",
            ElementKind::I16 => "i16",
            ElementKind::U32 => "u32",
            ElementKind::I32 => "i32",
            ElementKind::U64 => "u64",
            ElementKind::I64 => "i64",
            ElementKind::USize => "usize",
            ElementKind::ISize => "isize",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }

    /// Resolves the kind of an arbitrary type, rejecting anything outside the
    /// supported set.
    ///
    /// # Errors
    ///
    /// Returns [`SimdError::UnsupportedElementType`] for any other type.
    pub fn of<T: 'static>() -> Result<ElementKind> {
        let id = TypeId::of::<T>();
        let kind = if id == TypeId::of::<u8>() {
            ElementKind::U8
        } else if id == TypeId::of::<i8>() {
            ElementKind::I8
        } else if id == TypeId::of::<u16>() {
            ElementKind::U16
        } else if id == TypeId::of::<i16>() {
            ElementKind::I16
        } else if id == TypeId::of::<u32>() {
            ElementKind::U32
        } else if id == TypeId::of::<i32>() {
            ElementKind::I32
        } else if id == TypeId::of::<u64>() {
            ElementKind::U64
        } else if id == TypeId::of::<i64>() {
            ElementKind::I64
        } else if id == TypeId::of::<usize>() {
            ElementKind::USize
        } else if id == TypeId::of::<isize>() {
            ElementKind::ISize
        } else if id == TypeId::of::<f32>() {
            ElementKind::F32
        } else if id == TypeId::of::<f64>() {
            ElementKind::F64
        } else {
            return Err(unsupported_element_type(std::any::type_name::<T>()));
        };
        Ok(kind)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = SimdError;

    fn from_str(s: &str) -> Result<Self> {
        ElementKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| unsupported_element_type(s))
    }
}

/// Rounding mode for [`SimdElement::round_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidpointRounding {
    /// Round half to even (banker's rounding).
    #[default]
    ToEven,
    /// Round half away from zero.
    AwayFromZero,
    /// Round toward zero.
    ToZero,
    /// Round toward negative infinity.
    ToNegativeInfinity,
    /// Round toward positive infinity.
    ToPositiveInfinity,
}

/// A primitive type that can occupy a vector lane.
///
/// This trait is sealed. Its functions are the scalar kernels every vector
/// operation applies per lane; they take their operands by value and never
/// panic except where scalar Rust does (integer division by zero).
pub trait SimdElement:
    sealed::Sealed + Pod + Default + Debug + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Runtime kind of this type.
    const KIND: ElementKind;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Value with every bit set (`-1` for signed integers, a NaN for floats).
    const ALL_BITS_SET: Self;
    /// Smallest finite value.
    const MIN_VALUE: Self;
    /// Largest finite value.
    const MAX_VALUE: Self;

    /// Same-width integer type used for shuffle indices and bit views.
    type Index: SimdInt;

    /// Storage of one 128-bit vector of this type.
    type Lanes128: Pod + Debug + Send + Sync;

    /// Lane value at position `position`, used to build index sequences.
    fn from_position(position: usize) -> Self;

    fn add(left: Self, right: Self) -> Self;
    fn sub(left: Self, right: Self) -> Self;
    fn mul(left: Self, right: Self) -> Self;
    fn div(left: Self, right: Self) -> Self;
    fn negate(value: Self) -> Self;

    /// Addition clamped to the representable range. Plain addition for floats.
    fn add_saturate(left: Self, right: Self) -> Self;
    /// Subtraction clamped to the representable range. Plain subtraction for floats.
    fn sub_saturate(left: Self, right: Self) -> Self;

    fn bitwise_and(left: Self, right: Self) -> Self;
    fn bitwise_or(left: Self, right: Self) -> Self;
    fn bitwise_xor(left: Self, right: Self) -> Self;
    fn bitwise_not(value: Self) -> Self;

    fn equals(left: Self, right: Self) -> bool;
    fn less_than(left: Self, right: Self) -> bool;
    fn less_than_or_equal(left: Self, right: Self) -> bool;

    /// IEEE 754-2019 `maximum`: NaN propagates and `+0` is greater than `-0`.
    fn max(left: Self, right: Self) -> Self;
    /// IEEE 754-2019 `minimum`: NaN propagates and `-0` is less than `+0`.
    fn min(left: Self, right: Self) -> Self;
    /// `left > right ? left : right`, matching a single hardware instruction.
    fn max_native(left: Self, right: Self) -> Self;
    /// `left < right ? left : right`, matching a single hardware instruction.
    fn min_native(left: Self, right: Self) -> Self;
    /// Like [`SimdElement::max`], but a NaN operand yields the other operand.
    fn max_number(left: Self, right: Self) -> Self;
    /// Like [`SimdElement::min`], but a NaN operand yields the other operand.
    fn min_number(left: Self, right: Self) -> Self;
    fn max_magnitude(left: Self, right: Self) -> Self;
    fn min_magnitude(left: Self, right: Self) -> Self;
    fn max_magnitude_number(left: Self, right: Self) -> Self;
    fn min_magnitude_number(left: Self, right: Self) -> Self;

    /// Absolute value. Wraps for the minimum signed integer.
    fn abs(value: Self) -> Self;
    fn ceiling(value: Self) -> Self;
    fn floor(value: Self) -> Self;
    /// Round half to even.
    fn round(value: Self) -> Self;
    fn round_with(value: Self, mode: MidpointRounding) -> Self;
    fn truncate(value: Self) -> Self;
    /// Square root. Integers go through `f64` and truncate.
    fn sqrt(value: Self) -> Self;
    /// Magnitude of `value` with the sign of `sign`.
    fn copy_sign(value: Self, sign: Self) -> Self;

    fn is_nan(value: Self) -> bool;
    fn is_negative(value: Self) -> bool;
    fn is_positive(value: Self) -> bool;
    fn is_finite(value: Self) -> bool;
    fn is_infinity(value: Self) -> bool;
    fn is_positive_infinity(value: Self) -> bool;
    fn is_negative_infinity(value: Self) -> bool;
    fn is_normal(value: Self) -> bool;
    fn is_subnormal(value: Self) -> bool;
    fn is_integer(value: Self) -> bool;
    fn is_even_integer(value: Self) -> bool;
    fn is_odd_integer(value: Self) -> bool;

    /// Top bit of the lane's binary representation.
    fn most_significant_bit(value: Self) -> bool;

    /// Reports whether every bit of the lane is set.
    #[inline(always)]
    fn is_all_bits_set(value: Self) -> bool {
        bytemuck::bytes_of(&value).iter().all(|&byte| byte == u8::MAX)
    }

    /// Mask lane for a comparison outcome.
    #[inline(always)]
    fn mask(condition: bool) -> Self {
        if condition {
            Self::ALL_BITS_SET
        } else {
            Self::ZERO
        }
    }
}

/// Integer lane types.
pub trait SimdInt: SimdElement + Eq + Ord {
    /// Shift left; the count is masked to the lane width.
    fn shift_left(value: Self, count: u32) -> Self;
    /// Shift right replicating the sign bit. Logical for unsigned types.
    fn shift_right_arithmetic(value: Self, count: u32) -> Self;
    /// Shift right filling with zeros.
    fn shift_right_logical(value: Self, count: u32) -> Self;
    /// The lane reinterpreted as an unsigned index.
    fn to_lane_index(value: Self) -> u64;
}

/// Floating-point lane types.
pub trait SimdFloat: SimdElement {
    /// `left * right + addend` with a single rounding.
    fn fused_multiply_add(left: Self, right: Self, addend: Self) -> Self;
    fn sin(value: Self) -> Self;
    fn cos(value: Self) -> Self;
    fn exp(value: Self) -> Self;
    /// Natural logarithm.
    fn log(value: Self) -> Self;
    fn log2(value: Self) -> Self;
    fn hypot(x: Self, y: Self) -> Self;
    /// `x + (y - x) * amount`, evaluated as `fma(x, 1 - amount, y * amount)`.
    fn lerp(x: Self, y: Self, amount: Self) -> Self;
    fn degrees_to_radians(degrees: Self) -> Self;
    fn radians_to_degrees(radians: Self) -> Self;
}

/// Lane types with a half-width counterpart.
pub trait Narrowing: SimdElement {
    /// The half-width type.
    type Narrow: SimdElement;
    /// Keeps the low bits (integers) or rounds to nearest (floats).
    fn narrow_truncating(value: Self) -> Self::Narrow;
    /// Clamps to the narrow type's range. Floats round to nearest.
    fn narrow_saturating(value: Self) -> Self::Narrow;
}

/// Lane types with a double-width counterpart.
pub trait Widening: SimdElement {
    /// The double-width type.
    type Wide: SimdElement;
    fn widen(value: Self) -> Self::Wide;
}

/// Same-width numeric conversion between lane types.
pub trait ConvertLane<U: SimdElement>: SimdElement {
    /// Saturating conversion; NaN becomes zero.
    fn convert(value: Self) -> U;
    /// Conversion with the platform's out-of-range behavior.
    ///
    /// On x86 out-of-range and NaN inputs produce the "integer indefinite"
    /// value (`MIN` for signed, `MAX` for unsigned targets); elsewhere this
    /// saturates like [`ConvertLane::convert`].
    fn convert_native(value: Self) -> U;
}

macro_rules! impl_int_common {
    ($t:ty, $kind:ident) => {
        impl sealed::Sealed for $t {}

        impl SimdElement for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ALL_BITS_SET: Self = !0;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;

            type Index = $t;
            type Lanes128 = [$t; 16 / std::mem::size_of::<$t>()];

            #[inline(always)]
            fn from_position(position: usize) -> Self {
                position as $t
            }

            #[inline(always)]
            fn add(left: Self, right: Self) -> Self {
                WrappingAdd::wrapping_add(&left, &right)
            }

            #[inline(always)]
            fn sub(left: Self, right: Self) -> Self {
                WrappingSub::wrapping_sub(&left, &right)
            }

            #[inline(always)]
            fn mul(left: Self, right: Self) -> Self {
                WrappingMul::wrapping_mul(&left, &right)
            }

            #[inline(always)]
            fn div(left: Self, right: Self) -> Self {
                left.wrapping_div(right)
            }

            #[inline(always)]
            fn negate(value: Self) -> Self {
                WrappingNeg::wrapping_neg(&value)
            }

            #[inline(always)]
            fn add_saturate(left: Self, right: Self) -> Self {
                SaturatingAdd::saturating_add(&left, &right)
            }

            #[inline(always)]
            fn sub_saturate(left: Self, right: Self) -> Self {
                SaturatingSub::saturating_sub(&left, &right)
            }

            #[inline(always)]
            fn bitwise_and(left: Self, right: Self) -> Self {
                left & right
            }

            #[inline(always)]
            fn bitwise_or(left: Self, right: Self) -> Self {
                left | right
            }

            #[inline(always)]
            fn bitwise_xor(left: Self, right: Self) -> Self {
                left ^ right
            }

            #[inline(always)]
            fn bitwise_not(value: Self) -> Self {
                !value
            }

            #[inline(always)]
            fn equals(left: Self, right: Self) -> bool {
                left == right
            }

            #[inline(always)]
            fn less_than(left: Self, right: Self) -> bool {
                left < right
            }

            #[inline(always)]
            fn less_than_or_equal(left: Self, right: Self) -> bool {
                left <= right
            }

            #[inline(always)]
            fn max(left: Self, right: Self) -> Self {
                Ord::max(left, right)
            }

            #[inline(always)]
            fn min(left: Self, right: Self) -> Self {
                Ord::min(left, right)
            }

            #[inline(always)]
            fn max_native(left: Self, right: Self) -> Self {
                Ord::max(left, right)
            }

            #[inline(always)]
            fn min_native(left: Self, right: Self) -> Self {
                Ord::min(left, right)
            }

            #[inline(always)]
            fn max_number(left: Self, right: Self) -> Self {
                Ord::max(left, right)
            }

            #[inline(always)]
            fn min_number(left: Self, right: Self) -> Self {
                Ord::min(left, right)
            }

            #[inline(always)]
            fn max_magnitude_number(left: Self, right: Self) -> Self {
                <$t as SimdElement>::max_magnitude(left, right)
            }

            #[inline(always)]
            fn min_magnitude_number(left: Self, right: Self) -> Self {
                <$t as SimdElement>::min_magnitude(left, right)
            }

            #[inline(always)]
            fn ceiling(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn floor(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn round(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn round_with(value: Self, _mode: MidpointRounding) -> Self {
                value
            }

            #[inline(always)]
            fn truncate(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn sqrt(value: Self) -> Self {
                (value as f64).sqrt() as $t
            }

            #[inline(always)]
            fn is_nan(_value: Self) -> bool {
                false
            }

            #[inline(always)]
            fn is_finite(_value: Self) -> bool {
                true
            }

            #[inline(always)]
            fn is_infinity(_value: Self) -> bool {
                false
            }

            #[inline(always)]
            fn is_positive_infinity(_value: Self) -> bool {
                false
            }

            #[inline(always)]
            fn is_negative_infinity(_value: Self) -> bool {
                false
            }

            #[inline(always)]
            fn is_normal(value: Self) -> bool {
                value != 0
            }

            #[inline(always)]
            fn is_subnormal(_value: Self) -> bool {
                false
            }

            #[inline(always)]
            fn is_integer(_value: Self) -> bool {
                true
            }

            #[inline(always)]
            fn is_even_integer(value: Self) -> bool {
                value & 1 == 0
            }

            #[inline(always)]
            fn is_odd_integer(value: Self) -> bool {
                value & 1 != 0
            }

            #[inline(always)]
            fn most_significant_bit(value: Self) -> bool {
                (value >> (<$t>::BITS - 1)) & 1 != 0
            }

            #[inline(always)]
            fn is_all_bits_set(value: Self) -> bool {
                value == !0
            }

            #[inline(always)]
            fn abs(value: Self) -> Self {
                <$t as SignedOps>::wrapping_abs(value)
            }

            #[inline(always)]
            fn copy_sign(value: Self, sign: Self) -> Self {
                <$t as SignedOps>::copy_sign(value, sign)
            }

            #[inline(always)]
            fn is_negative(value: Self) -> bool {
                <$t as SignedOps>::is_negative(value)
            }

            #[inline(always)]
            fn is_positive(value: Self) -> bool {
                !<$t as SignedOps>::is_negative(value)
            }

            #[inline(always)]
            fn max_magnitude(left: Self, right: Self) -> Self {
                let l = <$t as SignedOps>::magnitude(left);
                let r = <$t as SignedOps>::magnitude(right);
                if l > r {
                    left
                } else if l == r {
                    if <$t as SignedOps>::is_negative(left) {
                        right
                    } else {
                        left
                    }
                } else {
                    right
                }
            }

            #[inline(always)]
            fn min_magnitude(left: Self, right: Self) -> Self {
                let l = <$t as SignedOps>::magnitude(left);
                let r = <$t as SignedOps>::magnitude(right);
                if l < r {
                    left
                } else if l == r {
                    if <$t as SignedOps>::is_negative(left) {
                        left
                    } else {
                        right
                    }
                } else {
                    right
                }
            }
        }

        impl SimdInt for $t {
            #[inline(always)]
            fn shift_left(value: Self, count: u32) -> Self {
                value.wrapping_shl(count)
            }

            #[inline(always)]
            fn shift_right_arithmetic(value: Self, count: u32) -> Self {
                value.wrapping_shr(count)
            }

            #[inline(always)]
            fn shift_right_logical(value: Self, count: u32) -> Self {
                let bits: <$t as UnsignedTwin>::Unsigned = bytemuck::cast(value);
                bytemuck::cast(bits.wrapping_shr(count))
            }

            #[inline(always)]
            fn to_lane_index(value: Self) -> u64 {
                let bits: <$t as UnsignedTwin>::Unsigned = bytemuck::cast(value);
                bits as u64
            }
        }
    };
}

/// Maps each integer type to the unsigned type of the same width.
trait UnsignedTwin {
    type Unsigned: Pod + Copy;
}

/// Sign-dependent integer helpers, so that one macro serves both signednesses.
trait SignedOps: Sized {
    fn wrapping_abs(value: Self) -> Self;
    fn copy_sign(value: Self, sign: Self) -> Self;
    fn is_negative(value: Self) -> bool;
    fn magnitude(value: Self) -> u128;
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty, $kind:ident;)*) => {$(
        impl UnsignedTwin for $t {
            type Unsigned = $u;
        }

        impl SignedOps for $t {
            #[inline(always)]
            fn wrapping_abs(value: Self) -> Self {
                value.wrapping_abs()
            }

            #[inline(always)]
            fn copy_sign(value: Self, sign: Self) -> Self {
                let magnitude = value.wrapping_abs();
                if sign < 0 {
                    magnitude.wrapping_neg()
                } else {
                    magnitude
                }
            }

            #[inline(always)]
            fn is_negative(value: Self) -> bool {
                value < 0
            }

            #[inline(always)]
            fn magnitude(value: Self) -> u128 {
                value.unsigned_abs() as u128
            }
        }

        impl_int_common!($t, $kind);
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty, $kind:ident;)*) => {$(
        impl UnsignedTwin for $t {
            type Unsigned = $t;
        }

        impl SignedOps for $t {
            #[inline(always)]
            fn wrapping_abs(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn copy_sign(value: Self, _sign: Self) -> Self {
                value
            }

            #[inline(always)]
            fn is_negative(_value: Self) -> bool {
                false
            }

            #[inline(always)]
            fn magnitude(value: Self) -> u128 {
                value as u128
            }
        }

        impl_int_common!($t, $kind);
    )*};
}

impl_signed! {
    i8 => u8, I8;
    i16 => u16, I16;
    i32 => u32, I32;
    i64 => u64, I64;
    isize => usize, ISize;
}

impl_unsigned! {
    u8, U8;
    u16, U16;
    u32, U32;
    u64, U64;
    usize, USize;
}

macro_rules! impl_float {
    ($t:ty, $kind:ident, $index:ty, $bits:ty) => {
        impl sealed::Sealed for $t {}

        impl SimdElement for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ALL_BITS_SET: Self = <$t>::from_bits(<$bits>::MAX);
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;

            type Index = $index;
            type Lanes128 = [$t; 16 / std::mem::size_of::<$t>()];

            #[inline(always)]
            fn from_position(position: usize) -> Self {
                position as $t
            }

            #[inline(always)]
            fn add(left: Self, right: Self) -> Self {
                left + right
            }

            #[inline(always)]
            fn sub(left: Self, right: Self) -> Self {
                left - right
            }

            #[inline(always)]
            fn mul(left: Self, right: Self) -> Self {
                left * right
            }

            #[inline(always)]
            fn div(left: Self, right: Self) -> Self {
                left / right
            }

            #[inline(always)]
            fn negate(value: Self) -> Self {
                -value
            }

            #[inline(always)]
            fn add_saturate(left: Self, right: Self) -> Self {
                left + right
            }

            #[inline(always)]
            fn sub_saturate(left: Self, right: Self) -> Self {
                left - right
            }

            #[inline(always)]
            fn bitwise_and(left: Self, right: Self) -> Self {
                <$t>::from_bits(left.to_bits() & right.to_bits())
            }

            #[inline(always)]
            fn bitwise_or(left: Self, right: Self) -> Self {
                <$t>::from_bits(left.to_bits() | right.to_bits())
            }

            #[inline(always)]
            fn bitwise_xor(left: Self, right: Self) -> Self {
                <$t>::from_bits(left.to_bits() ^ right.to_bits())
            }

            #[inline(always)]
            fn bitwise_not(value: Self) -> Self {
                <$t>::from_bits(!value.to_bits())
            }

            #[inline(always)]
            fn equals(left: Self, right: Self) -> bool {
                left == right
            }

            #[inline(always)]
            fn less_than(left: Self, right: Self) -> bool {
                left < right
            }

            #[inline(always)]
            fn less_than_or_equal(left: Self, right: Self) -> bool {
                left <= right
            }

            #[inline(always)]
            fn max(left: Self, right: Self) -> Self {
                if left != right {
                    if left.is_nan() || right < left {
                        left
                    } else {
                        right
                    }
                } else if right.is_sign_negative() {
                    left
                } else {
                    right
                }
            }

            #[inline(always)]
            fn min(left: Self, right: Self) -> Self {
                if left != right {
                    if left.is_nan() || left < right {
                        left
                    } else {
                        right
                    }
                } else if left.is_sign_negative() {
                    left
                } else {
                    right
                }
            }

            #[inline(always)]
            fn max_native(left: Self, right: Self) -> Self {
                if left > right {
                    left
                } else {
                    right
                }
            }

            #[inline(always)]
            fn min_native(left: Self, right: Self) -> Self {
                if left < right {
                    left
                } else {
                    right
                }
            }

            #[inline(always)]
            fn max_number(left: Self, right: Self) -> Self {
                if left != right {
                    if right.is_nan() || right < left {
                        left
                    } else {
                        right
                    }
                } else if right.is_sign_negative() {
                    left
                } else {
                    right
                }
            }

            #[inline(always)]
            fn min_number(left: Self, right: Self) -> Self {
                if left != right {
                    if right.is_nan() || left < right {
                        left
                    } else {
                        right
                    }
                } else if left.is_sign_negative() {
                    left
                } else {
                    right
                }
            }

            #[inline(always)]
            fn max_magnitude(left: Self, right: Self) -> Self {
                let (l, r) = (left.abs(), right.abs());
                if l > r || l.is_nan() {
                    left
                } else if l == r {
                    if left.is_sign_negative() {
                        right
                    } else {
                        left
                    }
                } else {
                    right
                }
            }

            #[inline(always)]
            fn min_magnitude(left: Self, right: Self) -> Self {
                let (l, r) = (left.abs(), right.abs());
                if l < r || l.is_nan() {
                    left
                } else if l == r {
                    if left.is_sign_negative() {
                        left
                    } else {
                        right
                    }
                } else {
                    right
                }
            }

            #[inline(always)]
            fn max_magnitude_number(left: Self, right: Self) -> Self {
                let (l, r) = (left.abs(), right.abs());
                if l > r || r.is_nan() {
                    left
                } else if l == r {
                    if left.is_sign_negative() {
                        right
                    } else {
                        left
                    }
                } else {
                    right
                }
            }

            #[inline(always)]
            fn min_magnitude_number(left: Self, right: Self) -> Self {
                let (l, r) = (left.abs(), right.abs());
                if l < r || r.is_nan() {
                    left
                } else if l == r {
                    if left.is_sign_negative() {
                        left
                    } else {
                        right
                    }
                } else {
                    right
                }
            }

            #[inline(always)]
            fn abs(value: Self) -> Self {
                value.abs()
            }

            #[inline(always)]
            fn ceiling(value: Self) -> Self {
                value.ceil()
            }

            #[inline(always)]
            fn floor(value: Self) -> Self {
                value.floor()
            }

            #[inline(always)]
            fn round(value: Self) -> Self {
                value.round_ties_even()
            }

            #[inline(always)]
            fn round_with(value: Self, mode: MidpointRounding) -> Self {
                match mode {
                    MidpointRounding::ToEven => value.round_ties_even(),
                    MidpointRounding::AwayFromZero => value.round(),
                    MidpointRounding::ToZero => value.trunc(),
                    MidpointRounding::ToNegativeInfinity => value.floor(),
                    MidpointRounding::ToPositiveInfinity => value.ceil(),
                }
            }

            #[inline(always)]
            fn truncate(value: Self) -> Self {
                value.trunc()
            }

            #[inline(always)]
            fn sqrt(value: Self) -> Self {
                value.sqrt()
            }

            #[inline(always)]
            fn copy_sign(value: Self, sign: Self) -> Self {
                value.copysign(sign)
            }

            #[inline(always)]
            fn is_nan(value: Self) -> bool {
                value.is_nan()
            }

            #[inline(always)]
            fn is_negative(value: Self) -> bool {
                value.is_sign_negative()
            }

            #[inline(always)]
            fn is_positive(value: Self) -> bool {
                value.is_sign_positive()
            }

            #[inline(always)]
            fn is_finite(value: Self) -> bool {
                value.is_finite()
            }

            #[inline(always)]
            fn is_infinity(value: Self) -> bool {
                value.is_infinite()
            }

            #[inline(always)]
            fn is_positive_infinity(value: Self) -> bool {
                value == <$t>::INFINITY
            }

            #[inline(always)]
            fn is_negative_infinity(value: Self) -> bool {
                value == <$t>::NEG_INFINITY
            }

            #[inline(always)]
            fn is_normal(value: Self) -> bool {
                value.is_normal()
            }

            #[inline(always)]
            fn is_subnormal(value: Self) -> bool {
                value.is_subnormal()
            }

            #[inline(always)]
            fn is_integer(value: Self) -> bool {
                value.is_finite() && value == value.trunc()
            }

            #[inline(always)]
            fn is_even_integer(value: Self) -> bool {
                <$t as SimdElement>::is_integer(value) && (value % 2.0) == 0.0
            }

            #[inline(always)]
            fn is_odd_integer(value: Self) -> bool {
                <$t as SimdElement>::is_integer(value) && (value % 2.0).abs() == 1.0
            }

            #[inline(always)]
            fn most_significant_bit(value: Self) -> bool {
                value.is_sign_negative()
            }

            #[inline(always)]
            fn is_all_bits_set(value: Self) -> bool {
                value.to_bits() == <$bits>::MAX
            }
        }
    };
}

impl_float!(f32, F32, i32, u32);
impl_float!(f64, F64, i64, u64);

impl SimdFloat for f64 {
    #[inline(always)]
    fn fused_multiply_add(left: Self, right: Self, addend: Self) -> Self {
        left.mul_add(right, addend)
    }

    #[inline(always)]
    fn sin(value: Self) -> Self {
        math::sin(value)
    }

    #[inline(always)]
    fn cos(value: Self) -> Self {
        math::cos(value)
    }

    #[inline(always)]
    fn exp(value: Self) -> Self {
        math::exp(value)
    }

    #[inline(always)]
    fn log(value: Self) -> Self {
        math::log(value)
    }

    #[inline(always)]
    fn log2(value: Self) -> Self {
        math::log2(value)
    }

    #[inline(always)]
    fn hypot(x: Self, y: Self) -> Self {
        math::hypot(x, y)
    }

    #[inline(always)]
    fn lerp(x: Self, y: Self, amount: Self) -> Self {
        x.mul_add(1.0 - amount, y * amount)
    }

    #[inline(always)]
    fn degrees_to_radians(degrees: Self) -> Self {
        (degrees * std::f64::consts::PI) / 180.0
    }

    #[inline(always)]
    fn radians_to_degrees(radians: Self) -> Self {
        (radians * 180.0) / std::f64::consts::PI
    }
}

// Single precision evaluates every kernel in double precision and rounds once.
impl SimdFloat for f32 {
    #[inline(always)]
    fn fused_multiply_add(left: Self, right: Self, addend: Self) -> Self {
        left.mul_add(right, addend)
    }

    #[inline(always)]
    fn sin(value: Self) -> Self {
        math::sin(value as f64) as f32
    }

    #[inline(always)]
    fn cos(value: Self) -> Self {
        math::cos(value as f64) as f32
    }

    #[inline(always)]
    fn exp(value: Self) -> Self {
        math::exp(value as f64) as f32
    }

    #[inline(always)]
    fn log(value: Self) -> Self {
        math::log(value as f64) as f32
    }

    #[inline(always)]
    fn log2(value: Self) -> Self {
        math::log2(value as f64) as f32
    }

    #[inline(always)]
    fn hypot(x: Self, y: Self) -> Self {
        let (x, y) = (x as f64, y as f64);
        if x.is_infinite() || y.is_infinite() {
            return f32::INFINITY;
        }
        x.mul_add(x, y * y).sqrt() as f32
    }

    #[inline(always)]
    fn lerp(x: Self, y: Self, amount: Self) -> Self {
        x.mul_add(1.0 - amount, y * amount)
    }

    #[inline(always)]
    fn degrees_to_radians(degrees: Self) -> Self {
        (degrees * std::f32::consts::PI) / 180.0
    }

    #[inline(always)]
    fn radians_to_degrees(radians: Self) -> Self {
        (radians * 180.0) / std::f32::consts::PI
    }
}

macro_rules! impl_narrowing_int {
    ($($wide:ty => $narrow:ty;)*) => {$(
        impl Narrowing for $wide {
            type Narrow = $narrow;

            #[inline(always)]
            fn narrow_truncating(value: Self) -> $narrow {
                AsPrimitive::<$narrow>::as_(value)
            }

            #[inline(always)]
            fn narrow_saturating(value: Self) -> $narrow {
                let clamped = value.clamp(<$narrow>::MIN as $wide, <$narrow>::MAX as $wide);
                AsPrimitive::<$narrow>::as_(clamped)
            }
        }

        impl Widening for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn widen(value: Self) -> $wide {
                AsPrimitive::<$wide>::as_(value)
            }
        }
    )*};
}

impl_narrowing_int! {
    i16 => i8;
    u16 => u8;
    i32 => i16;
    u32 => u16;
    i64 => i32;
    u64 => u32;
}

impl Narrowing for f64 {
    type Narrow = f32;

    #[inline(always)]
    fn narrow_truncating(value: Self) -> f32 {
        value as f32
    }

    #[inline(always)]
    fn narrow_saturating(value: Self) -> f32 {
        value as f32
    }
}

impl Widening for f32 {
    type Wide = f64;

    #[inline(always)]
    fn widen(value: Self) -> f64 {
        value as f64
    }
}

macro_rules! impl_float_to_int {
    ($($float:ty => $int:ty, indefinite: $indefinite:expr, valid: $low:literal .. $high:literal;)*) => {$(
        impl ConvertLane<$int> for $float {
            #[inline(always)]
            fn convert(value: Self) -> $int {
                value as $int
            }

            #[inline(always)]
            fn convert_native(value: Self) -> $int {
                if cfg!(any(target_arch = "x86", target_arch = "x86_64"))
                    && !(value > $low && value < $high)
                {
                    return $indefinite;
                }
                value as $int
            }
        }
    )*};
}

// Bounds are the open interval of inputs whose truncation is representable.
impl_float_to_int! {
    f32 => i32, indefinite: i32::MIN, valid: -2147483904.0 .. 2147483648.0;
    f32 => u32, indefinite: u32::MAX, valid: -1.0 .. 4294967296.0;
    f64 => i64, indefinite: i64::MIN, valid: -9223372036854777856.0 .. 9223372036854775808.0;
    f64 => u64, indefinite: u64::MAX, valid: -1.0 .. 18446744073709551616.0;
}

macro_rules! impl_int_to_float {
    ($($int:ty => $float:ty;)*) => {$(
        impl ConvertLane<$float> for $int {
            #[inline(always)]
            fn convert(value: Self) -> $float {
                value as $float
            }

            #[inline(always)]
            fn convert_native(value: Self) -> $float {
                value as $float
            }
        }
    )*};
}

impl_int_to_float! {
    i32 => f32;
    u32 => f32;
    i64 => f64;
    u64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod kind_tests {
        use super::*;

        #[test]
        fn test_kind_of_supported_types() {
            assert_eq!(ElementKind::of::<u8>().unwrap(), ElementKind::U8);
            assert_eq!(ElementKind::of::<isize>().unwrap(), ElementKind::ISize);
            assert_eq!(ElementKind::of::<f64>().unwrap(), ElementKind::F64);
            assert_eq!(<f32 as SimdElement>::KIND, ElementKind::F32);
        }

        #[test]
        fn test_kind_of_unsupported_type() {
            let err = ElementKind::of::<bool>().unwrap_err();
            assert!(matches!(err, SimdError::UnsupportedElementType { .. }));
            assert!(ElementKind::of::<u128>().is_err());
            assert!(ElementKind::of::<char>().is_err());
        }

        #[test]
        fn test_kind_parse_round_trip() {
            for kind in ElementKind::ALL {
                assert_eq!(kind.name().parse::<ElementKind>().unwrap(), kind);
            }
            assert!("f16".parse::<ElementKind>().is_err());
        }

        #[test]
        fn test_kind_classification() {
            assert!(ElementKind::F32.is_float());
            assert!(ElementKind::USize.is_unsigned());
            assert!(ElementKind::I8.is_signed_integer());
            assert!(!ElementKind::F64.is_signed_integer());
            assert_eq!(ElementKind::U16.size(), 2);
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_integer_wraps() {
            assert_eq!(<u8 as SimdElement>::add(250, 10), 4);
            assert_eq!(<i8 as SimdElement>::sub(-128, 1), 127);
            assert_eq!(<i32 as SimdElement>::negate(i32::MIN), i32::MIN);
            assert_eq!(<i16 as SimdElement>::div(i16::MIN, -1), i16::MIN);
        }

        #[test]
        fn test_saturation() {
            assert_eq!(<u8 as SimdElement>::add_saturate(250, 10), 255);
            assert_eq!(<i8 as SimdElement>::sub_saturate(-128, 1), -128);
            assert_eq!(<f32 as SimdElement>::add_saturate(f32::MAX, f32::MAX), f32::INFINITY);
        }

        #[test]
        fn test_float_bitwise() {
            let neg = <f32 as SimdElement>::bitwise_or(1.0, -0.0);
            assert_eq!(neg, -1.0);
            assert!(<f64 as SimdElement>::is_all_bits_set(f64::ALL_BITS_SET));
            assert!(f64::ALL_BITS_SET.is_nan());
        }

        #[test]
        fn test_shifts_mask_count() {
            assert_eq!(<u8 as SimdInt>::shift_left(1, 9), 2);
            assert_eq!(<i16 as SimdInt>::shift_right_arithmetic(-8, 1), -4);
            assert_eq!(<i16 as SimdInt>::shift_right_logical(-1, 15), 1);
            assert_eq!(<i8 as SimdInt>::to_lane_index(-1), 255);
        }
    }

    mod min_max_tests {
        use super::*;

        #[test]
        fn test_max_propagates_nan() {
            assert!(<f32 as SimdElement>::max(f32::NAN, 1.0).is_nan());
            assert!(<f32 as SimdElement>::max(1.0, f32::NAN).is_nan());
            assert_eq!(<f32 as SimdElement>::max_number(f32::NAN, 1.0), 1.0);
            assert_eq!(<f32 as SimdElement>::max_number(1.0, f32::NAN), 1.0);
        }

        #[test]
        fn test_signed_zero_ordering() {
            assert!(<f64 as SimdElement>::max(-0.0, 0.0).is_sign_positive());
            assert!(<f64 as SimdElement>::max(0.0, -0.0).is_sign_positive());
            assert!(<f64 as SimdElement>::min(0.0, -0.0).is_sign_negative());
            assert!(<f64 as SimdElement>::min(-0.0, 0.0).is_sign_negative());
        }

        #[test]
        fn test_native_returns_second_on_nan() {
            assert_eq!(<f32 as SimdElement>::max_native(f32::NAN, 2.0), 2.0);
            assert_eq!(<f32 as SimdElement>::min_native(f32::NAN, 2.0), 2.0);
        }

        #[test]
        fn test_magnitude() {
            assert_eq!(<f32 as SimdElement>::max_magnitude(-3.0, 2.0), -3.0);
            assert_eq!(<f32 as SimdElement>::min_magnitude(-3.0, 2.0), 2.0);
            assert_eq!(<f32 as SimdElement>::max_magnitude(-2.0, 2.0), 2.0);
            assert_eq!(<f32 as SimdElement>::min_magnitude(-2.0, 2.0), -2.0);
            assert_eq!(<i8 as SimdElement>::max_magnitude(i8::MIN, 127), i8::MIN);
            assert_eq!(<u8 as SimdElement>::min_magnitude(3, 200), 3);
            assert_eq!(<f32 as SimdElement>::max_magnitude_number(f32::NAN, 2.0), 2.0);
            assert!(<f32 as SimdElement>::max_magnitude(f32::NAN, 2.0).is_nan());
        }
    }

    mod rounding_tests {
        use super::*;

        #[test]
        fn test_round_ties_to_even() {
            assert_eq!(<f64 as SimdElement>::round(2.5), 2.0);
            assert_eq!(<f64 as SimdElement>::round(3.5), 4.0);
            assert_eq!(<f64 as SimdElement>::round(-2.5), -2.0);
        }

        #[test]
        fn test_round_with_modes() {
            let r = |mode| <f32 as SimdElement>::round_with(-2.5, mode);
            assert_eq!(r(MidpointRounding::ToEven), -2.0);
            assert_eq!(r(MidpointRounding::AwayFromZero), -3.0);
            assert_eq!(r(MidpointRounding::ToZero), -2.0);
            assert_eq!(r(MidpointRounding::ToNegativeInfinity), -3.0);
            assert_eq!(r(MidpointRounding::ToPositiveInfinity), -2.0);
        }

        #[test]
        fn test_integer_rounding_is_identity() {
            assert_eq!(<i32 as SimdElement>::floor(-7), -7);
            assert_eq!(<u64 as SimdElement>::round_with(9, MidpointRounding::ToZero), 9);
        }

        #[test]
        fn test_integer_sqrt_truncates() {
            assert_eq!(<u32 as SimdElement>::sqrt(17), 4);
            assert_eq!(<i32 as SimdElement>::sqrt(-4), 0);
        }
    }

    mod classification_tests {
        use super::*;

        #[test]
        fn test_float_classification() {
            assert!(<f32 as SimdElement>::is_negative(-0.0));
            assert!(<f32 as SimdElement>::is_subnormal(f32::MIN_POSITIVE / 2.0));
            assert!(<f64 as SimdElement>::is_integer(-4.0));
            assert!(!<f64 as SimdElement>::is_integer(f64::INFINITY));
            assert!(<f64 as SimdElement>::is_even_integer(-4.0));
            assert!(<f64 as SimdElement>::is_odd_integer(-3.0));
            assert!(!<f64 as SimdElement>::is_odd_integer(2.5));
        }

        #[test]
        fn test_integer_classification() {
            assert!(!<i32 as SimdElement>::is_nan(0));
            assert!(<u8 as SimdElement>::is_finite(255));
            assert!(<i8 as SimdElement>::is_even_integer(-2));
            assert!(<u16 as SimdElement>::is_odd_integer(7));
            assert!(!<u16 as SimdElement>::is_negative(u16::MAX));
            assert!(<i16 as SimdElement>::most_significant_bit(-1));
            assert!(<u16 as SimdElement>::most_significant_bit(0x8000));
        }

        #[test]
        fn test_copy_sign() {
            assert_eq!(<i32 as SimdElement>::copy_sign(5, -1), -5);
            assert_eq!(<i32 as SimdElement>::copy_sign(-5, 0), 5);
            assert_eq!(<u32 as SimdElement>::copy_sign(5, 0), 5);
            assert_eq!(<f64 as SimdElement>::copy_sign(2.0, -0.0), -2.0);
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_narrowing() {
            assert_eq!(<i32 as Narrowing>::narrow_truncating(0x1_8000), i16::MIN);
            assert_eq!(<i32 as Narrowing>::narrow_saturating(70_000), i16::MAX);
            assert_eq!(<u16 as Narrowing>::narrow_saturating(300), u8::MAX);
            assert_eq!(<f64 as Narrowing>::narrow_saturating(1e300), f32::INFINITY);
        }

        #[test]
        fn test_widening() {
            assert_eq!(<i8 as Widening>::widen(-3), -3i16);
            assert_eq!(<u32 as Widening>::widen(u32::MAX), u32::MAX as u64);
        }

        #[test]
        fn test_saturating_float_to_int() {
            assert_eq!(<f32 as ConvertLane<i32>>::convert(f32::MAX), i32::MAX);
            assert_eq!(<f32 as ConvertLane<i32>>::convert(f32::NAN), 0);
            assert_eq!(<f64 as ConvertLane<u64>>::convert(-1.0), 0);
        }

        #[test]
        fn test_native_conversion_in_range_matches() {
            assert_eq!(<f32 as ConvertLane<i32>>::convert_native(-7.9), -7);
            assert_eq!(<f64 as ConvertLane<u64>>::convert_native(12.5), 12);
        }

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        #[test]
        fn test_native_conversion_indefinite_on_x86() {
            assert_eq!(<f32 as ConvertLane<i32>>::convert_native(f32::NAN), i32::MIN);
            assert_eq!(<f32 as ConvertLane<i32>>::convert_native(3e9), i32::MIN);
            assert_eq!(<f32 as ConvertLane<u32>>::convert_native(-1.0), u32::MAX);
        }
    }
}
