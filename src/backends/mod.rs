//! Backend implementations for different SIMD instruction sets
//!
//! Each backend implements the same [`VectorBackend`] interface: a vector
//! phase over whole register widths followed by a scalar tail for the
//! `len % LANES` leftover elements.
//!
//! # Safety
//!
//! All `unsafe` code is isolated within backend implementations. The public API
//! remains 100% safe.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline implementation (no SIMD)
//! - `sse2`: x86_64 baseline SIMD (128-bit)
//! - `avx`: x86_64 256-bit SIMD (used for both AVX and AVX2 tiers)
//! - `avx512`: x86_64 maximum SIMD (512-bit)
//! - `neon`: ARM SIMD (128-bit)
//! - `wasm`: WebAssembly SIMD128

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod sse2;

#[cfg(target_arch = "x86_64")]
pub mod avx;

#[cfg(target_arch = "x86_64")]
pub mod avx512;

#[cfg(target_arch = "aarch64")]
pub mod neon;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

/// Backend trait for the elementwise-add kernel
///
/// # Safety
///
/// Implementations may use unsafe SIMD intrinsics. Callers must ensure:
/// - The CPU supports the backend's instruction set
/// - Slices `a`, `b` and `result` have the same length
pub trait VectorBackend {
    /// Number of `f32` lanes in one vector register
    const LANES: usize;

    /// Element-wise addition: result[i] = a[i] + b[i]
    ///
    /// # Safety
    ///
    /// - The target feature this backend is compiled for must be present
    /// - `a` and `b` must have the same length
    /// - `result` must have length >= `a.len()`
    unsafe fn add(a: &[f32], b: &[f32], result: &mut [f32]);
}

/// Boundary between the vector phase and the scalar tail of one call
///
/// # Examples
///
/// ```
/// use vadd::phase_split;
///
/// let split = phase_split(9, 8);
/// assert_eq!(split.vector_len, 8);
/// assert_eq!(split.tail_len, 1);
/// assert_eq!(split.blocks, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSplit {
    /// Elements covered by whole vector registers
    pub vector_len: usize,
    /// Elements finished by the scalar loop
    pub tail_len: usize,
    /// Number of vector iterations
    pub blocks: usize,
}

impl PhaseSplit {
    /// True when `len < lanes`, i.e. the vector phase does no work
    pub fn skips_vector_phase(&self) -> bool {
        self.blocks == 0
    }

    /// True when the length is a whole multiple of the lane count
    pub fn skips_scalar_phase(&self) -> bool {
        self.tail_len == 0
    }
}

/// Split `len` elements into whole `lanes`-wide blocks plus a scalar tail
///
/// `lanes` of zero is treated as one (pure scalar).
pub fn phase_split(len: usize, lanes: usize) -> PhaseSplit {
    let lanes = lanes.max(1);
    let blocks = len / lanes;
    let vector_len = blocks * lanes;
    PhaseSplit {
        vector_len,
        tail_len: len - vector_len,
        blocks,
    }
}
