//! Scalar (non-SIMD) backend implementation
//!
//! This is the portable baseline implementation that works on all platforms,
//! and the reference every SIMD backend is tested against.
//!
//! # Performance
//!
//! Correctness reference only; expected to be 4-16x slower than the SIMD
//! backends on inputs with 1K+ elements.

use super::VectorBackend;

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl VectorBackend for ScalarBackend {
    const LANES: usize = 1;

    // SAFETY: This function is safe because:
    // 1. All slice accesses are bounds-checked by Rust indexing
    // 2. No raw pointer arithmetic is performed
    // 3. Marked unsafe only to match VectorBackend trait interface
    unsafe fn add(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        for i in 0..len {
            result[i] = a[i] + b[i];
        }
    }
}
