//! Width-generic SIMD vectors.
//!
//! `simdwide` provides 128, 256 and 512-bit vector types over twelve lane
//! types (`u8 i8 u16 i16 u32 i32 u64 i64 usize isize f32 f64`). A wider vector
//! is two half-width vectors. When the CPU runs a width natively the whole
//! vector is processed in one kernel; otherwise the operation is applied to
//! both halves and the results recombined. Both paths produce identical
//! results, floating-point sums included.
//!
//! ```rust
//! use simdwide::prelude::*;
//!
//! let a = Vector512::<f32>::create_sequence(0.0, 1.0);
//! let b = Vector512::<f32>::splat(2.0);
//! assert_eq!((a * b).sum(), 240.0);
//! assert_eq!(a.index_of(5.0), Some(5));
//! ```
//!
//! The [`slice`] module applies the vectors to slices of any length, with
//! `rayon`-parallel variants for large inputs.

pub mod error;
pub mod simd;
pub mod slice;

/// Slices with fewer elements than this run sequentially in the `par_*` kernels.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Elements per task in the `par_*` kernels. A multiple of every `Vector512` lane count.
pub const PARALLEL_CHUNK_LANES: usize = 1 << 14;

pub use error::{Result, SimdError};

/// Everything needed to use the vector types.
pub mod prelude {
    pub use crate::error::{Result, SimdError};
    pub use crate::simd::{
        Composite, MidpointRounding, SimdConvert, SimdElement, SimdFloat, SimdInt, SimdMath,
        SimdOps, SimdReduce, SimdShuffle, SimdVector, Vector128, Vector256, Vector512,
        VectorWidth,
    };
    pub use crate::slice::{SliceMath, VectorSlice};
}
