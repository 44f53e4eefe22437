//! Example demonstrating runtime CPU feature detection
//!
//! Run with:
//! ```
//! cargo run --example backend_detection
//! ```

use vadd::{available_backends, select_best_available_backend, Backend, Kernel};

fn main() {
    println!("vadd Backend Detection Example");
    println!("==============================\n");

    let backend = select_best_available_backend();
    println!("Auto-detected backend: {:?} ({} lanes)", backend, backend.lanes());

    #[cfg(target_arch = "x86_64")]
    {
        println!("\nx86_64 CPU Features:");
        println!("  SSE2:    {}", is_x86_feature_detected!("sse2"));
        println!("  AVX:     {}", is_x86_feature_detected!("avx"));
        println!("  AVX2:    {}", is_x86_feature_detected!("avx2"));
        println!("  FMA:     {}", is_x86_feature_detected!("fma"));
        println!("  AVX512F: {}", is_x86_feature_detected!("avx512f"));
    }

    println!("\nBackend Selection Priority:");
    println!("  x86_64:  AVX-512 → AVX2+FMA → AVX → SSE2 → Scalar");
    println!("  aarch64: NEON → Scalar");
    println!("  WASM:    SIMD128 → Scalar");

    println!("\nAvailable Backends:");
    for available in available_backends() {
        println!("  {:?} ({} lanes)", available, available.lanes());
    }

    println!("\nPhase Split (len = 100):");
    for available in available_backends() {
        let Ok(kernel) = Kernel::with_backend(available) else {
            continue;
        };
        let split = kernel.split(100);
        println!(
            "  {:?}: {} vector blocks covering {} elements, {} scalar tail",
            available, split.blocks, split.vector_len, split.tail_len
        );
    }

    println!("\nBackend Transparency:");
    let a: Vec<f32> = (0..9).map(|i| i as f32).collect();
    let b: Vec<f32> = a.iter().rev().copied().collect();
    for available in [Backend::Scalar, Backend::Auto] {
        match Kernel::with_backend(available).and_then(|kernel| kernel.add(&a, &b)) {
            Ok(sum) => println!("  {:?}: {:?}", available, sum),
            Err(err) => println!("  {:?}: {}", available, err),
        }
    }
}
