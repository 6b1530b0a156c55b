//! Transcendental functions over float vectors.
//!
//! Each function maps one lane kernel from [`crate::simd::math`] across the
//! vector through the usual dispatch primitives. Because the kernels are pure
//! functions of their lanes, the accelerated and decomposed paths return the
//! same bits.
//!
//! Accuracy against `std`: `f64` lanes within 2 ULP on the reduced domain,
//! `f32` lanes within 1 ULP (evaluated in `f64` and rounded once).

use crate::simd::element::SimdFloat;
use crate::simd::traits::SimdVector;

/// Elementary functions for `f32` and `f64` vectors.
pub trait SimdMath<T: SimdFloat>: SimdVector<T> {
    #[inline]
    fn sin(self) -> Self {
        self.unary(T::sin)
    }

    #[inline]
    fn cos(self) -> Self {
        self.unary(T::cos)
    }

    /// `(sin(self), cos(self))`.
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    #[inline]
    fn exp(self) -> Self {
        self.unary(T::exp)
    }

    /// Natural logarithm.
    #[inline]
    fn log(self) -> Self {
        self.unary(T::log)
    }

    #[inline]
    fn log2(self) -> Self {
        self.unary(T::log2)
    }

    /// `sqrt(self² + y²)` without intermediate overflow.
    #[inline]
    fn hypot(self, y: Self) -> Self {
        self.binary(y, T::hypot)
    }

    /// `self * (1 - amount) + y * amount`.
    #[inline]
    fn lerp(self, y: Self, amount: Self) -> Self {
        self.ternary(y, amount, T::lerp)
    }

    #[inline]
    fn degrees_to_radians(self) -> Self {
        self.unary(T::degrees_to_radians)
    }

    #[inline]
    fn radians_to_degrees(self) -> Self {
        self.unary(T::radians_to_degrees)
    }
}

impl<T: SimdFloat, V: SimdVector<T>> SimdMath<T> for V {}
