//! SSE2 backend implementation (x86_64 baseline SIMD)
//!
//! This backend uses SSE2 intrinsics for 128-bit SIMD operations.
//! SSE2 is available on all x86_64 CPUs as a baseline requirement.
//!
//! # Performance
//!
//! Expected speedup: 4x on f32 inputs (4 elements per register), usually
//! less on large inputs where memory bandwidth dominates.
//!
//! # Safety
//!
//! All SSE2 intrinsics are marked `unsafe` by Rust. This module carefully isolates
//! all unsafe code and verifies correctness through comprehensive testing.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{phase_split, VectorBackend};

/// SSE2 backend (128-bit SIMD for x86_64)
pub struct Sse2Backend;

impl VectorBackend for Sse2Backend {
    const LANES: usize = 4;

    #[target_feature(enable = "sse2")]
    // SAFETY: Pointer arithmetic and SIMD intrinsics are safe because:
    // 1. `i + 4 <= vector_len <= len` holds before every `.add(i)`
    // 2. All pointers derived from valid slice references with sufficient backing storage
    // 3. Unaligned loads/stores used (_mm_loadu_ps/_mm_storeu_ps) - no alignment requirement
    unsafe fn add(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let vector_len = phase_split(len, Self::LANES).vector_len;
        let mut i = 0;

        // Process 4 elements at a time using SSE2 (128-bit = 4 x f32)
        while i < vector_len {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            let vb = _mm_loadu_ps(b.as_ptr().add(i));

            let vresult = _mm_add_ps(va, vb);

            _mm_storeu_ps(result.as_mut_ptr().add(i), vresult);

            i += 4;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarBackend;

    #[test]
    fn test_sse2_add() {
        if !is_x86_feature_detected!("sse2") {
            eprintln!("Skipping SSE2 test: CPU does not support SSE2");
            return;
        }

        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let mut result = [0.0; 6];
        // SAFETY: SSE2 presence checked above
        unsafe {
            Sse2Backend::add(&a, &b, &mut result);
        }
        assert_eq!(result, [7.0; 6]);
    }

    #[test]
    fn test_sse2_matches_scalar() {
        if !is_x86_feature_detected!("sse2") {
            eprintln!("Skipping SSE2 test: CPU does not support SSE2");
            return;
        }

        for len in 0..=13 {
            let a: Vec<f32> = (0..len).map(|i| i as f32 * 0.37 - 2.0).collect();
            let b: Vec<f32> = (0..len).map(|i| 1.5 - i as f32 * 1.13).collect();
            let mut simd = vec![0.0; len];
            let mut scalar = vec![0.0; len];
            // SAFETY: SSE2 presence checked above, lengths equal
            unsafe {
                Sse2Backend::add(&a, &b, &mut simd);
                ScalarBackend::add(&a, &b, &mut scalar);
            }
            assert_eq!(simd, scalar, "len={len}");
        }
    }
}
