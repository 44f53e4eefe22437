//! Elementwise-add kernel with backend dispatch

#[cfg(target_arch = "aarch64")]
use crate::backends::neon::NeonBackend;
use crate::backends::scalar::ScalarBackend;
#[cfg(target_arch = "wasm32")]
use crate::backends::wasm::WasmBackend;
#[cfg(target_arch = "x86_64")]
use crate::backends::{avx::AvxBackend, avx512::Avx512Backend, sse2::Sse2Backend};
use crate::backends::{phase_split, PhaseSplit, VectorBackend};
use crate::{Backend, Result, VaddError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Elementwise-add kernel bound to one concrete backend
///
/// The backend is resolved and validated at construction, so every call
/// dispatches without re-probing the CPU.
///
/// # Examples
///
/// ```
/// use vadd::{Backend, Kernel};
///
/// let kernel = Kernel::with_backend(Backend::Scalar).unwrap();
/// let c = kernel.add(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(c, vec![4.0, 6.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    backend: Backend,
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel {
    /// Create a kernel using the auto-selected best backend
    pub fn new() -> Self {
        Self {
            backend: crate::select_best_available_backend(),
        }
    }

    /// Create a kernel with a specific backend (for benchmarking or testing)
    ///
    /// `Backend::Auto` resolves to the best available backend.
    ///
    /// # Errors
    ///
    /// Returns [`VaddError::UnsupportedBackend`] if the CPU lacks the
    /// requested instruction set.
    pub fn with_backend(backend: Backend) -> Result<Self> {
        let backend = backend.resolve();
        if !backend.is_available() {
            return Err(VaddError::UnsupportedBackend(backend));
        }
        Ok(Self { backend })
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Vector width `W` of this kernel's backend
    pub fn lanes(&self) -> usize {
        self.backend.lanes()
    }

    /// Phase boundary this kernel uses for an input of `len` elements
    pub fn split(&self, len: usize) -> PhaseSplit {
        phase_split(len, self.lanes())
    }

    /// Element-wise addition into a freshly allocated buffer
    ///
    /// # Examples
    ///
    /// ```
    /// use vadd::Kernel;
    ///
    /// let a = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    /// let b = [8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
    /// let c = Kernel::new().add(&a, &b).unwrap();
    /// assert_eq!(c, vec![8.0; 9]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`VaddError::SizeMismatch`] if `a` and `b` differ in length
    /// - [`VaddError::AllocationFailure`] if the output cannot be allocated
    #[cfg_attr(feature = "tracing", instrument(skip(self, a, b), fields(backend = ?self.backend, len = a.len())))]
    pub fn add(&self, a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
        check_len(a.len(), b.len())?;

        let len = a.len();
        let mut result = Vec::new();
        result
            .try_reserve_exact(len)
            .map_err(|_| VaddError::AllocationFailure { len })?;
        result.resize(len, 0.0);

        self.dispatch(a, b, &mut result);
        Ok(result)
    }

    /// Element-wise addition into a caller-supplied buffer
    ///
    /// # Errors
    ///
    /// Returns [`VaddError::SizeMismatch`] if `b` or `out` differ in length
    /// from `a`. `out` is untouched on error.
    #[cfg_attr(feature = "tracing", instrument(skip(self, a, b, out), fields(backend = ?self.backend, len = a.len())))]
    pub fn add_into(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
        check_len(a.len(), b.len())?;
        check_len(a.len(), out.len())?;

        self.dispatch(a, b, out);
        Ok(())
    }

    fn dispatch(&self, a: &[f32], b: &[f32], out: &mut [f32]) {
        // SAFETY: lengths were checked by the caller, and `self.backend`
        // passed `is_available()` at construction
        unsafe {
            match self.backend {
                #[cfg(target_arch = "x86_64")]
                Backend::SSE2 => Sse2Backend::add(a, b, out),
                #[cfg(target_arch = "x86_64")]
                Backend::AVX | Backend::AVX2 => AvxBackend::add(a, b, out),
                #[cfg(target_arch = "x86_64")]
                Backend::AVX512 => Avx512Backend::add(a, b, out),
                #[cfg(target_arch = "aarch64")]
                Backend::NEON => NeonBackend::add(a, b, out),
                #[cfg(target_arch = "wasm32")]
                Backend::WasmSIMD => WasmBackend::add(a, b, out),
                _ => ScalarBackend::add(a, b, out),
            }
        }
    }
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(VaddError::SizeMismatch { expected, actual });
    }
    Ok(())
}

/// Element-wise addition using the auto-selected backend
///
/// # Examples
///
/// ```
/// let c = vadd::add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(c, vec![5.0, 7.0, 9.0]);
/// ```
///
/// # Errors
///
/// Returns [`VaddError::SizeMismatch`] if `a` and `b` have different lengths.
pub fn add(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    Kernel::new().add(a, b)
}

/// Element-wise addition into `out` using the auto-selected backend
///
/// # Examples
///
/// ```
/// let mut out = [0.0; 3];
/// vadd::add_into(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut out).unwrap();
/// assert_eq!(out, [5.0, 7.0, 9.0]);
/// ```
pub fn add_into(a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
    Kernel::new().add_into(a, b, out)
}
