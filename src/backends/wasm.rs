//! WebAssembly SIMD128 backend implementation
//!
//! This backend uses WebAssembly SIMD128 intrinsics for 128-bit SIMD operations.
//! SIMD128 is supported in modern browsers and wasm runtimes.
//!
//! # Safety
//!
//! Wasm has no runtime feature detection; this backend is only selected
//! when the crate is compiled with `target_feature = "simd128"`.

#[cfg(target_arch = "wasm32")]
use std::arch::wasm32::*;

use super::{phase_split, VectorBackend};

/// WebAssembly SIMD128 backend (128-bit SIMD)
pub struct WasmBackend;

impl VectorBackend for WasmBackend {
    const LANES: usize = 4;

    #[target_feature(enable = "simd128")]
    unsafe fn add(a: &[f32], b: &[f32], result: &mut [f32]) {
        let len = a.len();
        let vector_len = phase_split(len, Self::LANES).vector_len;
        let mut i = 0;

        // Process 4 elements at a time using SIMD128 (128-bit = 4 x f32)
        while i < vector_len {
            let va = v128_load(a.as_ptr().add(i) as *const v128);
            let vb = v128_load(b.as_ptr().add(i) as *const v128);

            let vresult = f32x4_add(va, vb);

            v128_store(result.as_mut_ptr().add(i) as *mut v128, vresult);

            i += 4;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = a[j] + b[j];
        }
    }
}
