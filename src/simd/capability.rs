//! Process-wide hardware acceleration flags.
//!
//! Every composite vector operation asks this module whether its width is
//! hardware accelerated. The answer decides between running the whole-width
//! lane kernel and decomposing the vector into two half-width vectors.
//!
//! # Configuration
//!
//! - The `software-fallback` Cargo feature reports every width as not
//!   accelerated at build time.
//! - The `SIMDWIDE_DISABLE_ACCELERATION` environment variable (`1`, `true`
//!   or `yes`) does the same at runtime. It is read once, on first query.
//! - [`with_dispatch_path`] pins the answer for the current thread for the
//!   duration of a closure, which lets tests and benchmarks run both paths on
//!   one machine.
//!
//! Detection is lazy and idempotent; the flags never change after the first
//! read.

use std::cell::Cell;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{platform_not_supported, Result};

/// Environment variable that disables hardware acceleration when set to a truthy value.
pub const DISABLE_ACCELERATION_ENV: &str = "SIMDWIDE_DISABLE_ACCELERATION";

/// Bit width of a vector type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VectorWidth {
    /// 128-bit vectors (SSE2 / NEON).
    W128,
    /// 256-bit vectors (AVX2).
    W256,
    /// 512-bit vectors (AVX-512F).
    W512,
}

impl VectorWidth {
    /// Width in bits.
    #[inline(always)]
    pub const fn bits(self) -> usize {
        match self {
            VectorWidth::W128 => 128,
            VectorWidth::W256 => 256,
            VectorWidth::W512 => 512,
        }
    }

    /// Width in bytes, which is also the natural alignment of the vector.
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }
}

impl fmt::Display for VectorWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Which implementation a composite operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPath {
    /// Run the whole-width lane kernel, as on hardware with native support.
    Accelerated,
    /// Split into two half-width vectors and recombine.
    Decomposed,
}

/// Snapshot of the detected CPU capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// 128-bit vectors are natively supported.
    pub w128: bool,
    /// 256-bit vectors are natively supported.
    pub w256: bool,
    /// 512-bit vectors are natively supported.
    pub w512: bool,
    /// Fused multiply-add is natively supported.
    pub fma: bool,
    /// Acceleration was disabled by the feature flag or the environment.
    pub forced_software: bool,
}

impl Capabilities {
    fn detect() -> Self {
        Self::resolve(cfg!(feature = "software-fallback") || env_disables_acceleration())
    }

    fn resolve(forced_software: bool) -> Self {
        let (w128, w256, w512, fma) = if forced_software {
            (false, false, false, false)
        } else {
            detect_hardware()
        };

        let caps = Capabilities {
            w128,
            w256,
            w512,
            fma,
            forced_software,
        };

        tracing::debug!(
            w128 = caps.w128,
            w256 = caps.w256,
            w512 = caps.w512,
            fma = caps.fma,
            forced_software = caps.forced_software,
            "detected vector capabilities"
        );

        caps
    }

    /// Reports whether `width` is natively supported.
    #[inline(always)]
    pub fn supports(&self, width: VectorWidth) -> bool {
        match width {
            VectorWidth::W128 => self.w128,
            VectorWidth::W256 => self.w256,
            VectorWidth::W512 => self.w512,
        }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_hardware() -> (bool, bool, bool, bool) {
    (
        is_x86_feature_detected!("sse2"),
        is_x86_feature_detected!("avx2"),
        is_x86_feature_detected!("avx512f"),
        is_x86_feature_detected!("fma"),
    )
}

#[cfg(target_arch = "aarch64")]
fn detect_hardware() -> (bool, bool, bool, bool) {
    let neon = std::arch::is_aarch64_feature_detected!("neon");
    (neon, false, false, neon)
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_hardware() -> (bool, bool, bool, bool) {
    (false, false, false, false)
}

fn env_disables_acceleration() -> bool {
    match std::env::var(DISABLE_ACCELERATION_ENV) {
        Ok(value) => parses_as_disable(&value),
        Err(_) => false,
    }
}

/// `1`, `true` and `yes`, ignoring case and surrounding whitespace.
fn parses_as_disable(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

static CAPABILITIES: Lazy<Capabilities> = Lazy::new(Capabilities::detect);

thread_local! {
    static PATH_OVERRIDE: Cell<Option<DispatchPath>> = const { Cell::new(None) };
}

/// Returns the detected capabilities, running detection on first use.
#[inline]
pub fn capabilities() -> Capabilities {
    *CAPABILITIES
}

/// Reports whether vectors of `width` run on native hardware.
///
/// A path pinned with [`with_dispatch_path`] on the current thread takes
/// precedence over detection.
#[inline]
pub fn is_hardware_accelerated(width: VectorWidth) -> bool {
    match PATH_OVERRIDE.with(Cell::get) {
        Some(DispatchPath::Accelerated) => true,
        Some(DispatchPath::Decomposed) => false,
        None => CAPABILITIES.supports(width),
    }
}

/// Reports whether fused multiply-add runs on native hardware.
#[inline]
pub fn has_fused_multiply_add() -> bool {
    match PATH_OVERRIDE.with(Cell::get) {
        Some(DispatchPath::Accelerated) => true,
        Some(DispatchPath::Decomposed) => false,
        None => CAPABILITIES.fma,
    }
}

/// Fails with [`SimdError::PlatformNotSupported`](crate::error::SimdError::PlatformNotSupported)
/// unless `width` is hardware accelerated.
pub fn require(width: VectorWidth) -> Result<()> {
    if is_hardware_accelerated(width) {
        Ok(())
    } else {
        Err(platform_not_supported(width))
    }
}

struct RestorePath(Option<DispatchPath>);

impl Drop for RestorePath {
    fn drop(&mut self) {
        PATH_OVERRIDE.with(|cell| cell.set(self.0));
    }
}

/// Runs `f` with every width on the current thread reported as `path`.
///
/// The previous setting is restored when `f` returns or unwinds. Calls nest.
///
/// # Examples
///
/// ```rust
/// use simdwide::simd::capability::{with_dispatch_path, DispatchPath};
/// use simdwide::prelude::*;
///
/// let v = Vector512::<f32>::splat(1.5);
/// let fast = with_dispatch_path(DispatchPath::Accelerated, || v.sum());
/// let slow = with_dispatch_path(DispatchPath::Decomposed, || v.sum());
/// assert_eq!(fast.to_bits(), slow.to_bits());
/// ```
pub fn with_dispatch_path<R>(path: DispatchPath, f: impl FnOnce() -> R) -> R {
    let previous = PATH_OVERRIDE.with(|cell| cell.replace(Some(path)));
    let _restore = RestorePath(previous);
    f()
}
