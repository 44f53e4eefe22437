//! AVX backend implementation (x86_64 256-bit SIMD)
//!
//! This backend uses 256-bit AVX intrinsics. `_mm256_add_ps` only requires
//! AVX, so the same kernel serves both the AVX tier (Sandy Bridge, 2011+)
//! and the AVX2 tier (Haswell 2013+, Excavator 2015+).
//!
//! # Performance
//!
//! Expected speedup: 8x on f32 inputs (8 elements per register) while the
//! working set fits in cache.
//!
//! # Safety
//!
//! All AVX intrinsics are marked `unsafe` by Rust. This module carefully isolates
//! all unsafe code and verifies correctness through comprehensive testing.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{phase_split, VectorBackend};

/// AVX backend (256-bit SIMD for x86_64)
pub struct AvxBackend;

impl VectorBackend for AvxBackend {
    const LANES: usize = 8;

    #[target_feature(enable = "avx")]
    // SAFETY: Pointer arithmetic and SIMD intrinsics are safe because:
    // 1. `i + 8 <= vector_len <= len` holds before every `.add(i)`
    // 2. All pointers derived from valid slice references with sufficient backing storage
    // 3. Unaligned loads/stores used (_mm256_loadu_ps/_mm256_storeu_ps) - no alignment requirement
    unsafe fn add(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let vector_len = phase_split(len, Self::LANES).vector_len;
        let mut i = 0;

        // Process 8 elements at a time using AVX (256-bit = 8 x f32)
        while i < vector_len {
            // Load 8 floats from a and b
            let va = _mm256_loadu_ps(a.as_ptr().add(i));
            let vb = _mm256_loadu_ps(b.as_ptr().add(i));

            // Add them
            let vresult = _mm256_add_ps(va, vb);

            // Store result
            _mm256_storeu_ps(result.as_mut_ptr().add(i), vresult);

            i += 8;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}
