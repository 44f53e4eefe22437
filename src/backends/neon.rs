//! ARM NEON backend implementation (aarch64 128-bit SIMD)
//!
//! NEON is mandatory on ARMv8/AArch64, so this backend is compiled for
//! `aarch64` only.
//!
//! # Performance
//!
//! Expected speedup: 4x on f32 inputs (4 elements per register).
//! Similar performance characteristics to SSE2 on x86_64.
//!
//! # Safety
//!
//! All NEON intrinsics are marked `unsafe` by Rust. This module carefully isolates
//! all unsafe code and verifies correctness through comprehensive testing.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::{phase_split, VectorBackend};

/// ARM NEON backend (128-bit SIMD)
pub struct NeonBackend;

impl VectorBackend for NeonBackend {
    const LANES: usize = 4;

    #[target_feature(enable = "neon")]
    // SAFETY: `i + 4 <= vector_len <= len` holds before every `.add(i)`;
    // vld1q_f32/vst1q_f32 have no alignment requirement
    unsafe fn add(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let vector_len = phase_split(len, Self::LANES).vector_len;
        let mut i = 0;

        // Process 4 elements at a time using NEON (128-bit = 4 x f32)
        while i < vector_len {
            let va = vld1q_f32(a.as_ptr().add(i));
            let vb = vld1q_f32(b.as_ptr().add(i));

            let vresult = vaddq_f32(va, vb);

            vst1q_f32(result.as_mut_ptr().add(i), vresult);

            i += 4;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}
