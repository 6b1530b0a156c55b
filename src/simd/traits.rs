//! The vector contract shared by every width.
//!
//! [`SimdVector`] is what a 512-bit vector requires of its 256-bit halves and
//! what a 256-bit vector requires of its 128-bit halves: lane storage, the
//! factory and memory API, and four dispatch primitives (`unary`, `binary`,
//! `ternary`, `reduce_sum`) plus the sign-bit mask. Every elementwise
//! operation in the crate is expressed through those primitives.
//!
//! [`Composite`] marks a vector made of two half-width vectors. Its dispatch
//! helpers implement the one structural rule of the crate:
//!
//! - if the width is hardware accelerated, run the lane kernel over the whole
//!   vector;
//! - otherwise apply the same operation to `lower` and `upper` and recombine.
//!
//! Lane kernels are pure functions of their lanes, so both branches produce
//! bit-identical results.

use std::fmt::Debug;

use bytemuck::{Pod, Zeroable};

use crate::error::{index_out_of_range, insufficient_length, misalignment, Result};
use crate::simd::capability::{self, VectorWidth};
use crate::simd::element::{SimdElement, SimdInt};

/// A fixed-width vector of `T` lanes.
pub trait SimdVector<T: SimdElement>: Copy + Pod + Debug + PartialEq + Send + Sync {
    /// Bit width of the vector.
    const WIDTH: VectorWidth;

    /// Number of lanes.
    const COUNT: usize = Self::WIDTH.bytes() / std::mem::size_of::<T>();

    /// Alignment in bytes required by the aligned memory operations.
    const ALIGNMENT: usize = Self::WIDTH.bytes();

    /// The vector of the same width over another lane type.
    type Rebind<U: SimdElement>: SimdVector<U>;

    /// Applies `op` to every lane.
    fn unary(self, op: impl Fn(T) -> T + Copy) -> Self;

    /// Applies `op` to every pair of lanes.
    fn binary(self, rhs: Self, op: impl Fn(T, T) -> T + Copy) -> Self;

    /// Applies `op` to every triple of lanes.
    fn ternary(self, b: Self, c: Self, op: impl Fn(T, T, T) -> T + Copy) -> Self;

    /// Sum of all lanes, combining `lower` before `upper` at every level.
    fn reduce_sum(self) -> T;

    /// Bit `i` is the most significant bit of lane `i`.
    fn most_significant_bits(self) -> u64;

    /// Applies `op` to every lane, producing a vector of the same width over `U`.
    fn map_lanes<U: SimdElement>(self, op: impl Fn(T) -> U + Copy) -> Self::Rebind<U>;

    /// `result[i] = self[indices[i]]`, with indices read as unsigned. Lanes
    /// whose index is `COUNT` or more are zero.
    fn permute(self, indices: Self::Rebind<T::Index>) -> Self;

    /// Reports whether this width runs on native hardware.
    #[inline]
    fn is_hardware_accelerated() -> bool {
        capability::is_hardware_accelerated(Self::WIDTH)
    }

    /// The lanes as a slice.
    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// The lanes as a mutable slice.
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// All lanes zero.
    #[inline(always)]
    fn zero() -> Self {
        Zeroable::zeroed()
    }

    /// All lanes one.
    #[inline(always)]
    fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// All bits of every lane set.
    #[inline(always)]
    fn all_bits_set() -> Self {
        Self::splat(T::ALL_BITS_SET)
    }

    /// Lane `i` holds `i`.
    #[inline]
    fn indices() -> Self {
        let mut v = Self::zero();
        for (i, lane) in v.as_mut_slice().iter_mut().enumerate() {
            *lane = T::from_position(i);
        }
        v
    }

    /// Every lane set to `value`.
    #[inline(always)]
    fn splat(value: T) -> Self {
        let mut v = Self::zero();
        v.as_mut_slice().fill(value);
        v
    }

    /// Lane 0 set to `value`, every other lane zero.
    #[inline(always)]
    fn create_scalar(value: T) -> Self {
        let mut v = Self::zero();
        v.as_mut_slice()[0] = value;
        v
    }

    /// Lane 0 set to `value`; the other lanes are unspecified.
    ///
    /// Callers must not read lanes other than 0. The current implementation
    /// broadcasts, which is one of the permitted outcomes.
    #[inline(always)]
    fn create_scalar_unsafe(value: T) -> Self {
        Self::splat(value)
    }

    /// Lane `i` holds `start + i * step`, wrapping for integers.
    #[inline]
    fn create_sequence(start: T, step: T) -> Self {
        Self::indices()
            .binary(Self::splat(step), T::mul)
            .binary(Self::splat(start), T::add)
    }

    /// Copies the first [`COUNT`](SimdVector::COUNT) elements of `values`.
    ///
    /// # Errors
    ///
    /// [`SimdError::InsufficientLength`](crate::error::SimdError::InsufficientLength)
    /// when `values` is shorter than one vector.
    #[inline]
    fn from_slice(values: &[T]) -> Result<Self> {
        let lanes = values
            .get(..Self::COUNT)
            .ok_or_else(|| insufficient_length(Self::COUNT, values.len()))?;
        let mut v = Self::zero();
        v.as_mut_slice().copy_from_slice(lanes);
        Ok(v)
    }

    /// Copies [`COUNT`](SimdVector::COUNT) elements of `values` starting at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= values.len()`, `InsufficientLength`
    /// when fewer than `COUNT` elements follow it.
    #[inline]
    fn from_slice_at(values: &[T], index: usize) -> Result<Self> {
        if index >= values.len() {
            return Err(index_out_of_range(index, values.len()));
        }
        Self::from_slice(&values[index..])
    }

    /// Loads one vector from `ptr` without any alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `COUNT` elements.
    #[inline(always)]
    unsafe fn load(ptr: *const T) -> Self {
        std::ptr::read_unaligned(ptr.cast::<Self>())
    }

    /// Loads one vector from `ptr + element_offset` elements.
    ///
    /// # Safety
    ///
    /// `ptr.add(element_offset)` must be valid for reading `COUNT` elements.
    #[inline(always)]
    unsafe fn load_unsafe(ptr: *const T, element_offset: usize) -> Self {
        Self::load(ptr.add(element_offset))
    }

    /// Loads one vector from an [`ALIGNMENT`](SimdVector::ALIGNMENT)-aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `COUNT` elements. The alignment is
    /// checked before memory is touched.
    ///
    /// # Errors
    ///
    /// `Misalignment` when `ptr` is not a multiple of `ALIGNMENT`.
    #[inline]
    unsafe fn load_aligned(ptr: *const T) -> Result<Self> {
        check_alignment::<T, Self>(ptr as usize)?;
        Ok(std::ptr::read(ptr.cast::<Self>()))
    }

    /// Aligned load with a non-temporal hint.
    ///
    /// The hint does not change the result; it is accepted for API parity.
    ///
    /// # Safety
    ///
    /// Same contract as [`SimdVector::load_aligned`].
    #[inline]
    unsafe fn load_aligned_non_temporal(ptr: *const T) -> Result<Self> {
        Self::load_aligned(ptr)
    }

    /// Safe aligned load from the start of `values`.
    ///
    /// # Errors
    ///
    /// `InsufficientLength` for a short slice, `Misalignment` when the slice
    /// does not start on an `ALIGNMENT` boundary.
    #[inline]
    fn load_aligned_from(values: &[T]) -> Result<Self> {
        if values.len() < Self::COUNT {
            return Err(insufficient_length(Self::COUNT, values.len()));
        }
        // SAFETY: the slice holds at least COUNT elements.
        unsafe { Self::load_aligned(values.as_ptr()) }
    }

    /// Stores the vector to `ptr` without any alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `COUNT` elements.
    #[inline(always)]
    unsafe fn store(self, ptr: *mut T) {
        std::ptr::write_unaligned(ptr.cast::<Self>(), self)
    }

    /// Stores the vector to `ptr + element_offset` elements.
    ///
    /// # Safety
    ///
    /// `ptr.add(element_offset)` must be valid for writing `COUNT` elements.
    #[inline(always)]
    unsafe fn store_unsafe(self, ptr: *mut T, element_offset: usize) {
        self.store(ptr.add(element_offset))
    }

    /// Stores the vector to an [`ALIGNMENT`](SimdVector::ALIGNMENT)-aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `COUNT` elements.
    ///
    /// # Errors
    ///
    /// `Misalignment` when `ptr` is not a multiple of `ALIGNMENT`; nothing is
    /// written in that case.
    #[inline]
    unsafe fn store_aligned(self, ptr: *mut T) -> Result<()> {
        check_alignment::<T, Self>(ptr as usize)?;
        std::ptr::write(ptr.cast::<Self>(), self);
        Ok(())
    }

    /// Aligned store with a non-temporal hint.
    ///
    /// # Safety
    ///
    /// Same contract as [`SimdVector::store_aligned`].
    #[inline]
    unsafe fn store_aligned_non_temporal(self, ptr: *mut T) -> Result<()> {
        self.store_aligned(ptr)
    }

    /// Safe aligned store to the start of `dest`.
    ///
    /// # Errors
    ///
    /// `InsufficientLength` or `Misalignment`.
    #[inline]
    fn store_aligned_to(self, dest: &mut [T]) -> Result<()> {
        if dest.len() < Self::COUNT {
            return Err(insufficient_length(Self::COUNT, dest.len()));
        }
        // SAFETY: the slice holds at least COUNT elements.
        unsafe { self.store_aligned(dest.as_mut_ptr()) }
    }

    /// Copies the lanes to the start of `dest`.
    ///
    /// # Errors
    ///
    /// `InsufficientLength` when `dest` is shorter than one vector.
    #[inline]
    fn copy_to(self, dest: &mut [T]) -> Result<()> {
        let actual = dest.len();
        let target = dest
            .get_mut(..Self::COUNT)
            .ok_or_else(|| insufficient_length(Self::COUNT, actual))?;
        target.copy_from_slice(self.as_slice());
        Ok(())
    }

    /// Copies the lanes to `dest` starting at `start`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `start >= dest.len()`, `InsufficientLength`
    /// when fewer than `COUNT` slots follow it.
    #[inline]
    fn copy_to_at(self, dest: &mut [T], start: usize) -> Result<()> {
        if start >= dest.len() {
            return Err(index_out_of_range(start, dest.len()));
        }
        self.copy_to(&mut dest[start..])
    }

    /// Like [`SimdVector::copy_to`], reporting failure as `false`.
    #[inline]
    fn try_copy_to(self, dest: &mut [T]) -> bool {
        self.copy_to(dest).is_ok()
    }

    /// The lanes as a `Vec`.
    #[inline]
    fn to_vec(self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Lane `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= COUNT`.
    #[inline]
    fn get_element(self, index: usize) -> Result<T> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| index_out_of_range(index, Self::COUNT))
    }

    /// A copy with lane `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= COUNT`.
    #[inline]
    fn with_element(mut self, index: usize, value: T) -> Result<Self> {
        let lane = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| index_out_of_range(index, Self::COUNT))?;
        *lane = value;
        Ok(self)
    }

    /// Lane `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `COUNT`.
    #[inline(always)]
    unsafe fn get_element_unchecked(self, index: usize) -> T {
        *self.as_slice().get_unchecked(index)
    }

    /// A copy with lane `index` replaced, without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `COUNT`.
    #[inline(always)]
    unsafe fn with_element_unchecked(mut self, index: usize, value: T) -> Self {
        *self.as_mut_slice().get_unchecked_mut(index) = value;
        self
    }

    /// Lane 0.
    #[inline(always)]
    fn to_scalar(self) -> T {
        self.as_slice()[0]
    }
}

/// A vector made of two half-width vectors.
pub trait Composite<T: SimdElement>: SimdVector<T> {
    /// The half-width vector type.
    type Half: SimdVector<T>;

    /// Builds a vector from its lower and upper halves.
    fn from_halves(lower: Self::Half, upper: Self::Half) -> Self;

    /// Lanes `0 .. COUNT / 2`.
    fn lower(self) -> Self::Half;

    /// Lanes `COUNT / 2 .. COUNT`.
    fn upper(self) -> Self::Half;

    /// Both halves set to `half`.
    #[inline(always)]
    fn from_half(half: Self::Half) -> Self {
        Self::from_halves(half, half)
    }

    /// A copy with the lower half replaced.
    #[inline(always)]
    fn with_lower(self, lower: Self::Half) -> Self {
        Self::from_halves(lower, self.upper())
    }

    /// A copy with the upper half replaced.
    #[inline(always)]
    fn with_upper(self, upper: Self::Half) -> Self {
        Self::from_halves(self.lower(), upper)
    }
}

#[inline]
fn check_alignment<T: SimdElement, V: SimdVector<T>>(address: usize) -> Result<()> {
    if address % V::ALIGNMENT != 0 {
        tracing::trace!(
            address,
            alignment = V::ALIGNMENT,
            "rejected misaligned vector access"
        );
        return Err(misalignment(address, V::ALIGNMENT));
    }
    Ok(())
}

/// Lane kernel: `op` over every lane of `v`.
#[inline(always)]
pub(crate) fn lanes_unary<T: SimdElement, V: SimdVector<T>>(
    v: V,
    op: impl Fn(T) -> T,
) -> V {
    let mut out = v;
    for lane in out.as_mut_slice() {
        *lane = op(*lane);
    }
    out
}

/// Lane kernel: `op` over every pair of lanes.
#[inline(always)]
pub(crate) fn lanes_binary<T: SimdElement, V: SimdVector<T>>(
    a: V,
    b: V,
    op: impl Fn(T, T) -> T,
) -> V {
    let mut out = a;
    for (lane, &rhs) in out.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *lane = op(*lane, rhs);
    }
    out
}

/// Lane kernel: `op` over every triple of lanes.
#[inline(always)]
pub(crate) fn lanes_ternary<T: SimdElement, V: SimdVector<T>>(
    a: V,
    b: V,
    c: V,
    op: impl Fn(T, T, T) -> T,
) -> V {
    let mut out = a;
    for ((lane, &y), &z) in out
        .as_mut_slice()
        .iter_mut()
        .zip(b.as_slice())
        .zip(c.as_slice())
    {
        *lane = op(*lane, y, z);
    }
    out
}

/// Pairwise sum: the left half is reduced, then the right half, then both
/// partial sums are added.
#[inline]
pub(crate) fn pairwise_sum<T: SimdElement>(lanes: &[T]) -> T {
    match lanes.len() {
        0 => T::ZERO,
        1 => lanes[0],
        n => {
            let (left, right) = lanes.split_at(n / 2);
            T::add(pairwise_sum(left), pairwise_sum(right))
        }
    }
}

/// Lane kernel: sign-bit mask.
#[inline(always)]
pub(crate) fn lanes_most_significant_bits<T: SimdElement>(lanes: &[T]) -> u64 {
    lanes
        .iter()
        .enumerate()
        .fold(0u64, |bits, (i, &lane)| {
            bits | ((T::most_significant_bit(lane) as u64) << i)
        })
}

/// Lane kernel: `op` over every lane, into another lane type.
#[inline(always)]
pub(crate) fn lanes_map<T: SimdElement, U: SimdElement, V: SimdVector<T>>(
    v: V,
    op: impl Fn(T) -> U,
) -> V::Rebind<U> {
    let mut out = <V::Rebind<U> as SimdVector<U>>::zero();
    for (lane, &x) in out.as_mut_slice().iter_mut().zip(v.as_slice()) {
        *lane = op(x);
    }
    out
}

/// Lane kernel: zero-filling permute.
#[inline(always)]
pub(crate) fn lanes_permute<T: SimdElement, V: SimdVector<T>>(
    v: V,
    indices: V::Rebind<T::Index>,
) -> V {
    let mut out = V::zero();
    let source = v.as_slice();
    for (lane, &index) in out.as_mut_slice().iter_mut().zip(indices.as_slice()) {
        let index = <T::Index as SimdInt>::to_lane_index(index);
        if index < V::COUNT as u64 {
            *lane = source[index as usize];
        }
    }
    out
}

#[inline(always)]
pub(crate) fn dispatch_unary<T: SimdElement, V: Composite<T>>(
    v: V,
    op: impl Fn(T) -> T + Copy,
) -> V {
    if V::is_hardware_accelerated() {
        lanes_unary(v, op)
    } else {
        V::from_halves(v.lower().unary(op), v.upper().unary(op))
    }
}

#[inline(always)]
pub(crate) fn dispatch_binary<T: SimdElement, V: Composite<T>>(
    a: V,
    b: V,
    op: impl Fn(T, T) -> T + Copy,
) -> V {
    if V::is_hardware_accelerated() {
        lanes_binary(a, b, op)
    } else {
        V::from_halves(
            a.lower().binary(b.lower(), op),
            a.upper().binary(b.upper(), op),
        )
    }
}

#[inline(always)]
pub(crate) fn dispatch_ternary<T: SimdElement, V: Composite<T>>(
    a: V,
    b: V,
    c: V,
    op: impl Fn(T, T, T) -> T + Copy,
) -> V {
    if V::is_hardware_accelerated() {
        lanes_ternary(a, b, c, op)
    } else {
        V::from_halves(
            a.lower().ternary(b.lower(), c.lower(), op),
            a.upper().ternary(b.upper(), c.upper(), op),
        )
    }
}

#[inline(always)]
pub(crate) fn dispatch_sum<T: SimdElement, V: Composite<T>>(v: V) -> T {
    if V::is_hardware_accelerated() {
        pairwise_sum(v.as_slice())
    } else {
        T::add(v.lower().reduce_sum(), v.upper().reduce_sum())
    }
}

#[inline(always)]
pub(crate) fn dispatch_most_significant_bits<T: SimdElement, V: Composite<T>>(v: V) -> u64 {
    if V::is_hardware_accelerated() {
        lanes_most_significant_bits(v.as_slice())
    } else {
        let half = <V::Half as SimdVector<T>>::COUNT;
        v.lower().most_significant_bits() | (v.upper().most_significant_bits() << half)
    }
}

/// Implements the fixed-size array conversions for one vector type.
macro_rules! impl_array_conversions {
    (@each $vector:ident, $bytes:expr, $($t:ty)*) => {$(
        impl From<[$t; $bytes / std::mem::size_of::<$t>()]> for $vector<$t> {
            #[inline(always)]
            fn from(lanes: [$t; $bytes / std::mem::size_of::<$t>()]) -> Self {
                bytemuck::cast(lanes)
            }
        }

        impl From<$vector<$t>> for [$t; $bytes / std::mem::size_of::<$t>()] {
            #[inline(always)]
            fn from(vector: $vector<$t>) -> Self {
                bytemuck::cast(vector)
            }
        }
    )*};
    ($vector:ident, $bytes:expr) => {
        impl_array_conversions!(@each $vector, $bytes,
            u8 i8 u16 i16 u32 i32 u64 i64 usize isize f32 f64);
    };
}

pub(crate) use impl_array_conversions;

/// Implements the traits every vector type shares: equality, formatting,
/// default, and the zeroable/plain-old-data markers.
macro_rules! impl_vector_common {
    ($vector:ident) => {
        // SAFETY: every field is a vector or lane array of a `Pod` element,
        // the layout is `repr(C)` and the size equals the alignment, so there
        // is no padding and every bit pattern is valid.
        unsafe impl<T: SimdElement> bytemuck::Zeroable for $vector<T> {}
        unsafe impl<T: SimdElement> bytemuck::Pod for $vector<T> {}

        impl<T: SimdElement> Default for $vector<T> {
            #[inline(always)]
            fn default() -> Self {
                <Self as SimdVector<T>>::zero()
            }
        }

        impl<T: SimdElement> PartialEq for $vector<T> {
            /// Lanewise equality; a NaN lane makes vectors unequal.
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                SimdVector::<T>::as_slice(self) == SimdVector::<T>::as_slice(other)
            }
        }

        impl<T: SimdElement> std::fmt::Debug for $vector<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($vector))
                    .field(&SimdVector::<T>::as_slice(self))
                    .finish()
            }
        }

        impl<T: SimdElement> std::fmt::Display for $vector<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("<")?;
                for (i, lane) in SimdVector::<T>::as_slice(self).iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{lane:?}")?;
                }
                f.write_str(">")
            }
        }
    };
}

pub(crate) use impl_vector_common;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_sum_order() {
        assert_eq!(pairwise_sum::<i32>(&[]), 0);
        assert_eq!(pairwise_sum(&[7i32]), 7);
        // ((1e16 + 1) + (-1e16 + 1)) loses both ones to rounding.
        assert_eq!(pairwise_sum(&[1e16f64, 1.0, -1e16, 1.0]), 0.0);
    }

    #[test]
    fn test_msb_mask() {
        assert_eq!(lanes_most_significant_bits(&[-1i8, 0, -5, 3]), 0b0101);
        assert_eq!(lanes_most_significant_bits(&[-0.0f32, 0.0]), 0b01);
    }
}
