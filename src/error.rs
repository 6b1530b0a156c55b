//! Error types for simdwide operations.
//!
//! Every fallible constructor, memory operation and element accessor returns
//! [`Result`], so out-of-range indices, short buffers and misaligned pointers
//! surface as values instead of panics.

use thiserror::Error;

use crate::simd::VectorWidth;

/// Errors that can occur during simdwide operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimdError {
    /// The element type is not one of the twelve supported primitive types.
    #[error("Unsupported element type: {type_name}")]
    UnsupportedElementType {
        /// Name of the rejected type.
        type_name: String,
    },

    /// A lane or start index was outside the valid range.
    #[error("Index out of range: {index} (valid range is 0..{count})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Exclusive upper bound for the index.
        count: usize,
    },

    /// A source or destination buffer was shorter than one vector.
    #[error("Insufficient length: required {required} elements, got {actual}")]
    InsufficientLength {
        /// Number of elements the operation needed.
        required: usize,
        /// Number of elements that were available.
        actual: usize,
    },

    /// An aligned load or store was given a pointer that is not aligned.
    #[error("Misaligned address {address:#x} (required alignment: {alignment} bytes)")]
    Misalignment {
        /// The offending address.
        address: usize,
        /// Alignment requirement in bytes.
        alignment: usize,
    },

    /// The requested vector width has no hardware acceleration on this platform.
    #[error("Platform not supported: {width} is not hardware accelerated")]
    PlatformNotSupported {
        /// The width that was required.
        width: VectorWidth,
    },

    /// Two input slices had different lengths.
    #[error("Length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

/// Result type alias for simdwide operations.
pub type Result<T> = std::result::Result<T, SimdError>;

/// Creates an unsupported element type error.
pub fn unsupported_element_type(type_name: impl Into<String>) -> SimdError {
    SimdError::UnsupportedElementType {
        type_name: type_name.into(),
    }
}

/// Creates an index out of range error.
pub fn index_out_of_range(index: usize, count: usize) -> SimdError {
    SimdError::IndexOutOfRange { index, count }
}

/// Creates an insufficient length error.
pub fn insufficient_length(required: usize, actual: usize) -> SimdError {
    SimdError::InsufficientLength { required, actual }
}

/// Creates a misalignment error.
pub fn misalignment(address: usize, alignment: usize) -> SimdError {
    SimdError::Misalignment { address, alignment }
}

/// Creates a platform not supported error.
pub fn platform_not_supported(width: VectorWidth) -> SimdError {
    SimdError::PlatformNotSupported { width }
}

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> SimdError {
    SimdError::LengthMismatch { left, right }
}
