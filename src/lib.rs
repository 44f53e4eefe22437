//! vadd: Vectorized Elementwise Addition
//!
//! **vadd** computes `c[i] = a[i] + b[i]` over two equal-length `f32` slices
//! using the widest SIMD instruction set the running CPU offers:
//!
//! 1. **x86_64** - SSE2 (4 lanes), AVX/AVX2 (8 lanes), AVX-512 (16 lanes)
//! 2. **ARM** - NEON (4 lanes, aarch64)
//! 3. **WebAssembly** - SIMD128 (4 lanes)
//!
//! Whole vector widths go through the SIMD backend; whatever is left over
//! (`len % lanes` elements) is finished by a scalar tail loop.
//!
//! # Design Principles
//!
//! - **Runtime dispatch**: Best backend is probed once per process and cached
//! - **Zero unsafe in public API**: `unsafe` isolated in backends
//! - **Bit-exact**: Vector and scalar phases produce identical IEEE-754 sums
//!
//! # Quick Start
//!
//! ```rust
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let b = [5.0, 6.0, 7.0, 8.0, 9.0];
//!
//! // Auto-selects best backend (AVX-512/AVX2/SSE2/NEON/SIMD128/Scalar)
//! let c = vadd::add(&a, &b).unwrap();
//! assert_eq!(c, vec![6.0, 8.0, 10.0, 12.0, 14.0]);
//! ```

use std::sync::OnceLock;

pub mod backends;
pub mod error;
pub mod kernel;

pub use backends::{phase_split, PhaseSplit};
pub use error::{ErrorKind, Result, VaddError};
pub use kernel::{add, add_into, Kernel};

/// Backend execution target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Scalar fallback (no SIMD)
    Scalar,
    /// SSE2 (x86_64 baseline, 128-bit)
    SSE2,
    /// AVX (256-bit)
    AVX,
    /// AVX2 (256-bit, detected together with FMA)
    AVX2,
    /// AVX-512 (512-bit)
    AVX512,
    /// ARM NEON (128-bit)
    NEON,
    /// WebAssembly SIMD128
    WasmSIMD,
    /// Auto-select best available
    Auto,
}

impl Backend {
    /// Select the best available backend for the current platform
    ///
    /// This is a convenience wrapper around `select_best_available_backend()`
    pub fn select_best() -> Self {
        select_best_available_backend()
    }

    /// Resolve `Auto` to a concrete backend; other variants are returned as-is
    pub fn resolve(self) -> Self {
        match self {
            Backend::Auto => select_best_available_backend(),
            other => other,
        }
    }

    /// Number of `f32` lanes processed per vector instruction
    ///
    /// # Examples
    ///
    /// ```
    /// use vadd::Backend;
    ///
    /// assert_eq!(Backend::Scalar.lanes(), 1);
    /// assert_eq!(Backend::SSE2.lanes(), 4);
    /// assert_eq!(Backend::AVX2.lanes(), 8);
    /// assert_eq!(Backend::AVX512.lanes(), 16);
    /// ```
    pub fn lanes(self) -> usize {
        match self {
            Backend::Scalar => 1,
            Backend::SSE2 | Backend::NEON | Backend::WasmSIMD => 4,
            Backend::AVX | Backend::AVX2 => 8,
            Backend::AVX512 => 16,
            Backend::Auto => select_best_available_backend().lanes(),
        }
    }

    /// Whether this backend can run on the current CPU
    pub fn is_available(self) -> bool {
        match self {
            Backend::Scalar | Backend::Auto => true,
            #[cfg(target_arch = "x86_64")]
            Backend::SSE2 => is_x86_feature_detected!("sse2"),
            #[cfg(target_arch = "x86_64")]
            Backend::AVX => is_x86_feature_detected!("avx"),
            #[cfg(target_arch = "x86_64")]
            Backend::AVX2 => is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma"),
            #[cfg(target_arch = "x86_64")]
            Backend::AVX512 => is_x86_feature_detected!("avx512f"),
            #[cfg(target_arch = "aarch64")]
            Backend::NEON => cfg!(target_feature = "neon"),
            #[cfg(target_arch = "wasm32")]
            Backend::WasmSIMD => cfg!(target_feature = "simd128"),
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }
}

/// Detect best SIMD backend for x86_64 platforms
#[cfg(target_arch = "x86_64")]
fn detect_x86_backend() -> Backend {
    if is_x86_feature_detected!("avx512f") {
        return Backend::AVX512;
    }
    if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
        return Backend::AVX2;
    }
    if is_x86_feature_detected!("avx") {
        return Backend::AVX;
    }
    if is_x86_feature_detected!("sse2") {
        return Backend::SSE2;
    }
    Backend::Scalar
}

/// Detect best SIMD backend for ARM platforms
#[cfg(target_arch = "aarch64")]
fn detect_arm_backend() -> Backend {
    #[cfg(target_feature = "neon")]
    {
        Backend::NEON
    }
    #[cfg(not(target_feature = "neon"))]
    {
        Backend::Scalar
    }
}

/// Detect best SIMD backend for WebAssembly
#[cfg(target_arch = "wasm32")]
fn detect_wasm_backend() -> Backend {
    #[cfg(target_feature = "simd128")]
    {
        Backend::WasmSIMD
    }
    #[cfg(not(target_feature = "simd128"))]
    {
        Backend::Scalar
    }
}

fn detect_backend() -> Backend {
    #[cfg(target_arch = "x86_64")]
    {
        detect_x86_backend()
    }

    #[cfg(target_arch = "aarch64")]
    {
        detect_arm_backend()
    }

    #[cfg(target_arch = "wasm32")]
    {
        detect_wasm_backend()
    }

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "wasm32"
    )))]
    {
        Backend::Scalar
    }
}

/// Select the best available backend for the current platform
///
/// Performs runtime CPU feature detection on first call and caches the
/// result for the lifetime of the process. The selection follows this
/// priority:
///
/// **x86_64**:
/// 1. AVX-512 (if `avx512f` feature detected)
/// 2. AVX2 (if `avx2` and `fma` features detected)
/// 3. AVX (if `avx` feature detected)
/// 4. SSE2 (baseline for x86_64)
/// 5. Scalar (fallback)
///
/// **aarch64**: NEON (if available), else Scalar
///
/// **WASM**: SIMD128 (if available), else Scalar
///
/// **Other platforms**: Scalar
///
/// # Examples
///
/// ```
/// use vadd::select_best_available_backend;
///
/// let backend = select_best_available_backend();
/// println!("Using backend: {:?} ({} lanes)", backend, backend.lanes());
/// ```
pub fn select_best_available_backend() -> Backend {
    static SELECTED: OnceLock<Backend> = OnceLock::new();

    *SELECTED.get_or_init(|| {
        let backend = detect_backend();
        #[cfg(feature = "tracing")]
        tracing::debug!(?backend, lanes = backend.lanes(), "selected SIMD backend");
        backend
    })
}

/// Every concrete backend usable on the current CPU, narrowest first
///
/// Always starts with [`Backend::Scalar`].
pub fn available_backends() -> Vec<Backend> {
    [
        Backend::Scalar,
        Backend::SSE2,
        Backend::NEON,
        Backend::WasmSIMD,
        Backend::AVX,
        Backend::AVX2,
        Backend::AVX512,
    ]
    .into_iter()
    .filter(|backend| backend.is_available())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_enum() {
        assert_eq!(Backend::Scalar, Backend::Scalar);
        assert_ne!(Backend::Scalar, Backend::AVX2);
    }

    #[test]
    fn test_lanes_are_positive() {
        for backend in [
            Backend::Scalar,
            Backend::SSE2,
            Backend::AVX,
            Backend::AVX2,
            Backend::AVX512,
            Backend::NEON,
            Backend::WasmSIMD,
            Backend::Auto,
        ] {
            assert!(backend.lanes() >= 1, "{backend:?} reported zero lanes");
        }
    }

    #[test]
    fn test_auto_resolves_to_concrete_backend() {
        let resolved = Backend::Auto.resolve();
        assert_ne!(resolved, Backend::Auto);
        assert_eq!(resolved, select_best_available_backend());
        assert_eq!(Backend::Auto.lanes(), resolved.lanes());
        assert_eq!(Backend::SSE2.resolve(), Backend::SSE2);
    }

    #[test]
    fn test_select_best_available_backend() {
        let backend = select_best_available_backend();

        #[cfg(target_arch = "x86_64")]
        {
            // x86_64 baseline is SSE2, so we should never get Scalar on x86_64
            assert_ne!(backend, Backend::Scalar);
            assert!(matches!(
                backend,
                Backend::SSE2 | Backend::AVX | Backend::AVX2 | Backend::AVX512
            ));
        }

        #[cfg(not(target_arch = "x86_64"))]
        {
            assert!(matches!(
                backend,
                Backend::Scalar | Backend::NEON | Backend::WasmSIMD
            ));
        }

        assert!(backend.is_available());
    }

    #[test]
    fn test_backend_selection_is_deterministic() {
        let backend1 = select_best_available_backend();
        let backend2 = select_best_available_backend();
        assert_eq!(backend1, backend2);
        assert_eq!(backend1, detect_backend());
    }

    #[test]
    fn test_available_backends_contains_selected() {
        let available = available_backends();
        assert_eq!(available[0], Backend::Scalar);
        assert!(available.contains(&select_best_available_backend()));
        assert!(!available.contains(&Backend::Auto));
    }

    #[test]
    fn test_foreign_backends_unavailable() {
        #[cfg(target_arch = "x86_64")]
        {
            assert!(!Backend::NEON.is_available());
            assert!(!Backend::WasmSIMD.is_available());
        }
        #[cfg(target_arch = "aarch64")]
        {
            assert!(!Backend::SSE2.is_available());
            assert!(!Backend::AVX512.is_available());
        }
    }
}
