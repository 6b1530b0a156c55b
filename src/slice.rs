//! Vector kernels over slices of any length.
//!
//! Slices are processed in [`Vector512`] chunks. The last, partial chunk is
//! copied into a zero-padded vector, so every element goes through the same
//! vector kernel. Search kernels scan the tail directly instead, since the
//! padding could otherwise match.
//!
//! Each operation comes in three flavors, as elsewhere in the crate:
//!
//! - `simd_*` / plain names: single-threaded vector kernel;
//! - `par_*`: splits the slice into [`PARALLEL_CHUNK_LANES`]-sized pieces and
//!   runs them on the `rayon` pool once the slice reaches
//!   [`PARALLEL_THRESHOLD`] elements;
//! - `scalar_*`: plain iterator fold, the reference the others are tested
//!   against.
//!
//! Parallel reductions combine per-chunk partial results in chunk order, so
//! they are deterministic for a given slice length regardless of the thread
//! count. They group additions differently from the single-threaded kernel,
//! so floating-point results of the two may differ in the last bits.
//!
//! # Examples
//!
//! ```rust
//! use simdwide::prelude::*;
//!
//! let a: Vec<f64> = (0..1000).map(|i| i as f64).collect();
//! assert_eq!(a.simd_sum(), 499_500.0);
//! assert_eq!(a.simd_index_of(640.0), Some(640));
//!
//! let roots = a.sqrt();
//! assert_eq!(roots[81], 9.0);
//! ```

use rayon::prelude::*;

use crate::error::{length_mismatch, Result};
use crate::simd::{SimdElement, SimdFloat, SimdMath, SimdOps, SimdReduce, SimdVector, Vector512};
use crate::{PARALLEL_CHUNK_LANES, PARALLEL_THRESHOLD};

/// Reductions and searches over a slice.
pub trait VectorSlice<T: SimdElement> {
    /// Sum of all elements. Integers wrap.
    fn simd_sum(&self) -> T;

    /// [`simd_sum`](VectorSlice::simd_sum) over parallel chunks.
    fn par_simd_sum(&self) -> T;

    /// Sequential left-to-right sum.
    fn scalar_sum(&self) -> T;

    /// Sum of the elementwise products.
    ///
    /// # Errors
    ///
    /// [`SimdError::LengthMismatch`](crate::error::SimdError::LengthMismatch)
    /// when the slices differ in length.
    fn simd_dot(&self, rhs: &[T]) -> Result<T>;

    /// [`simd_dot`](VectorSlice::simd_dot) over parallel chunks.
    ///
    /// # Errors
    ///
    /// Same as [`simd_dot`](VectorSlice::simd_dot).
    fn par_simd_dot(&self, rhs: &[T]) -> Result<T>;

    /// Position of the first element equal to `value`.
    fn simd_index_of(&self, value: T) -> Option<usize>;
}

/// Loads up to one vector of `lanes`, zero-filling the rest.
#[inline(always)]
fn load_padded<T: SimdElement>(lanes: &[T]) -> Vector512<T> {
    let mut v = Vector512::<T>::zero();
    v.as_mut_slice()[..lanes.len()].copy_from_slice(lanes);
    v
}

fn sum_kernel<T: SimdElement>(a: &[T]) -> T {
    let chunks = a.chunks_exact(Vector512::<T>::COUNT);
    let tail = chunks.remainder();

    let mut acc = Vector512::<T>::zero();
    for chunk in chunks {
        acc = acc.add(load_padded(chunk));
    }
    if !tail.is_empty() {
        acc = acc.add(load_padded(tail));
    }
    acc.sum()
}

fn dot_kernel<T: SimdElement>(a: &[T], b: &[T]) -> T {
    let count = Vector512::<T>::COUNT;
    let a_chunks = a.chunks_exact(count);
    let b_chunks = b.chunks_exact(count);
    let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());

    let mut acc = Vector512::<T>::zero();
    for (x, y) in a_chunks.zip(b_chunks) {
        acc = acc.add(load_padded(x).multiply(load_padded(y)));
    }
    if !a_tail.is_empty() {
        acc = acc.add(load_padded(a_tail).multiply(load_padded(b_tail)));
    }
    acc.sum()
}

/// Sums per-chunk partial results in chunk order.
fn fold_partials<T: SimdElement>(partials: Vec<T>) -> T {
    partials.into_iter().fold(T::ZERO, T::add)
}

impl<T: SimdElement> VectorSlice<T> for [T] {
    #[inline]
    fn simd_sum(&self) -> T {
        sum_kernel(self)
    }

    fn par_simd_sum(&self) -> T {
        if self.len() < PARALLEL_THRESHOLD {
            return sum_kernel(self);
        }

        tracing::trace!(
            len = self.len(),
            chunks = self.len().div_ceil(PARALLEL_CHUNK_LANES),
            "parallel slice sum"
        );

        let partials: Vec<T> = self
            .par_chunks(PARALLEL_CHUNK_LANES)
            .map(sum_kernel)
            .collect();
        fold_partials(partials)
    }

    #[inline]
    fn scalar_sum(&self) -> T {
        self.iter().copied().fold(T::ZERO, T::add)
    }

    fn simd_dot(&self, rhs: &[T]) -> Result<T> {
        if self.len() != rhs.len() {
            return Err(length_mismatch(self.len(), rhs.len()));
        }
        Ok(dot_kernel(self, rhs))
    }

    fn par_simd_dot(&self, rhs: &[T]) -> Result<T> {
        if self.len() != rhs.len() {
            return Err(length_mismatch(self.len(), rhs.len()));
        }
        if self.len() < PARALLEL_THRESHOLD {
            return Ok(dot_kernel(self, rhs));
        }

        let partials: Vec<T> = self
            .par_chunks(PARALLEL_CHUNK_LANES)
            .zip(rhs.par_chunks(PARALLEL_CHUNK_LANES))
            .map(|(a, b)| dot_kernel(a, b))
            .collect();
        Ok(fold_partials(partials))
    }

    fn simd_index_of(&self, value: T) -> Option<usize> {
        let count = Vector512::<T>::COUNT;
        let chunks = self.chunks_exact(count);
        let tail = chunks.remainder();

        for (i, chunk) in chunks.enumerate() {
            if let Some(lane) = load_padded(chunk).index_of(value) {
                return Some(i * count + lane);
            }
        }
        tail.iter()
            .position(|&x| T::equals(x, value))
            .map(|lane| self.len() - tail.len() + lane)
    }
}

/// Elementwise math over float slices, returning a new `Vec`.
pub trait SliceMath<T: SimdFloat> {
    fn sin(&self) -> Vec<T>;
    fn cos(&self) -> Vec<T>;
    fn exp(&self) -> Vec<T>;
    /// Natural logarithm.
    fn ln(&self) -> Vec<T>;
    fn log2(&self) -> Vec<T>;
    fn sqrt(&self) -> Vec<T>;
    fn abs(&self) -> Vec<T>;

    fn par_sin(&self) -> Vec<T>;
    fn par_cos(&self) -> Vec<T>;
    fn par_exp(&self) -> Vec<T>;
    fn par_ln(&self) -> Vec<T>;
    fn par_log2(&self) -> Vec<T>;
    fn par_sqrt(&self) -> Vec<T>;
    fn par_abs(&self) -> Vec<T>;
}

/// Applies `op` to `src` one vector at a time, writing into `dst`.
///
/// `dst` must have the same length as `src`.
#[inline(always)]
fn map_into<T, F>(src: &[T], dst: &mut [T], op: &F)
where
    T: SimdElement,
    F: Fn(Vector512<T>) -> Vector512<T>,
{
    let count = Vector512::<T>::COUNT;
    for (s, d) in src.chunks(count).zip(dst.chunks_mut(count)) {
        let out = op(load_padded(s));
        d.copy_from_slice(&out.as_slice()[..d.len()]);
    }
}

fn map_slice<T, F>(src: &[T], op: F) -> Vec<T>
where
    T: SimdElement,
    F: Fn(Vector512<T>) -> Vector512<T>,
{
    let mut dst = vec![T::ZERO; src.len()];
    map_into(src, &mut dst, &op);
    dst
}

fn par_map_slice<T, F>(src: &[T], op: F) -> Vec<T>
where
    T: SimdElement,
    F: Fn(Vector512<T>) -> Vector512<T> + Sync,
{
    if src.len() < PARALLEL_THRESHOLD {
        return map_slice(src, op);
    }

    let mut dst = vec![T::ZERO; src.len()];
    dst.par_chunks_mut(PARALLEL_CHUNK_LANES)
        .zip(src.par_chunks(PARALLEL_CHUNK_LANES))
        .for_each(|(d, s)| map_into(s, d, &op));
    dst
}

impl<T: SimdFloat> SliceMath<T> for [T] {
    #[inline]
    fn sin(&self) -> Vec<T> {
        map_slice(self, |v| v.sin())
    }

    #[inline]
    fn cos(&self) -> Vec<T> {
        map_slice(self, |v| v.cos())
    }

    #[inline]
    fn exp(&self) -> Vec<T> {
        map_slice(self, |v| v.exp())
    }

    #[inline]
    fn ln(&self) -> Vec<T> {
        map_slice(self, |v| v.log())
    }

    #[inline]
    fn log2(&self) -> Vec<T> {
        map_slice(self, |v| v.log2())
    }

    #[inline]
    fn sqrt(&self) -> Vec<T> {
        map_slice(self, |v| v.sqrt())
    }

    #[inline]
    fn abs(&self) -> Vec<T> {
        map_slice(self, |v| v.abs())
    }

    #[inline]
    fn par_sin(&self) -> Vec<T> {
        par_map_slice(self, |v| v.sin())
    }

    #[inline]
    fn par_cos(&self) -> Vec<T> {
        par_map_slice(self, |v| v.cos())
    }

    #[inline]
    fn par_exp(&self) -> Vec<T> {
        par_map_slice(self, |v| v.exp())
    }

    #[inline]
    fn par_ln(&self) -> Vec<T> {
        par_map_slice(self, |v| v.log())
    }

    #[inline]
    fn par_log2(&self) -> Vec<T> {
        par_map_slice(self, |v| v.log2())
    }

    #[inline]
    fn par_sqrt(&self) -> Vec<T> {
        par_map_slice(self, |v| v.sqrt())
    }

    #[inline]
    fn par_abs(&self) -> Vec<T> {
        par_map_slice(self, |v| v.abs())
    }
}
