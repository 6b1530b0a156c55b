//! Fixed-width vectors and their operations.
//!
//! The width hierarchy is `Vector128` → `Vector256` → `Vector512`; each wider
//! type is two values of the next narrower one. Operations are grouped into
//! extension traits that are implemented for every width:
//!
//! | Trait | Module |
//! |-------|--------|
//! | [`SimdVector`] construction, memory, lane access | [`traits`] |
//! | [`SimdOps`] arithmetic, comparison, bitwise, classification | [`ops`] |
//! | [`SimdReduce`] sums, searches, all/any predicates | [`reduce`] |
//! | [`SimdShuffle`] per-lane gather | [`shuffle`] |
//! | [`SimdConvert`] reinterpretation and lane conversion | [`convert`] |
//! | [`SimdMath`] transcendental functions | [`transcendental`] |

pub mod capability;
pub mod convert;
pub mod element;
pub mod math;
pub mod ops;
pub mod reduce;
pub mod shuffle;
pub mod traits;
pub mod transcendental;
pub mod vector128;
pub mod vector256;
pub mod vector512;

pub use capability::{DispatchPath, VectorWidth};
pub use convert::SimdConvert;
pub use element::{
    ConvertLane, ElementKind, MidpointRounding, Narrowing, SimdElement, SimdFloat, SimdInt,
    Widening,
};
pub use ops::SimdOps;
pub use reduce::SimdReduce;
pub use shuffle::SimdShuffle;
pub use traits::{Composite, SimdVector};
pub use transcendental::SimdMath;
pub use vector128::Vector128;
pub use vector256::Vector256;
pub use vector512::Vector512;
