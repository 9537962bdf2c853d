use mulconst_backend::{MulConstFn, Sample, reference::mul_const_v_ref};

use crate::config::MultiplyConstConfig;

/// Which execution path an operator was bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Scalar,
    Accelerated,
}

impl KernelKind {
    pub const fn name(self) -> &'static str {
        match self {
            KernelKind::Scalar => "scalar",
            KernelKind::Accelerated => "accelerated",
        }
    }
}

/// Kernel bound once at construction and never changed afterwards.
#[derive(Clone, Copy)]
pub enum ElementKernel<T: Sample> {
    /// Generic loop over any sample type and `vlen`.
    Scalar,
    /// Vectorized adapter over the flattened `noutput_items * vlen` run.
    Accelerated(MulConstFn<T>),
}

impl<T: Sample> ElementKernel<T> {
    pub fn select(config: &MultiplyConstConfig) -> Self {
        match T::ACCELERATED {
            Some(kernel) if config.accelerate => ElementKernel::Accelerated(kernel),
            _ => ElementKernel::Scalar,
        }
    }

    pub fn kind(&self) -> KernelKind {
        match self {
            ElementKernel::Scalar => KernelKind::Scalar,
            ElementKernel::Accelerated(_) => KernelKind::Accelerated,
        }
    }

    /// Multiplies the first `n` samples of `input` into `output`,
    /// `output[k] = input[k] * constant[k % constant.len()]`.
    ///
    /// `constant` is the working constant or, for the accelerated kernel, its
    /// tile. Both buffers must hold at least `n` samples.
    #[inline]
    pub fn run(&self, n: usize, input: &[T], output: &mut [T], constant: &[T]) {
        match self {
            ElementKernel::Scalar => scalar_kernel(&mut output[..n], &input[..n], constant),
            ElementKernel::Accelerated(kernel) => kernel(&mut output[..n], &input[..n], constant),
        }
    }
}

impl<T: Sample> std::fmt::Debug for ElementKernel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind().name())
    }
}

/// `output[k] = input[k] * constant[k % vlen]` over equal-length runs.
///
/// `vlen == 1` broadcasts the single multiplier.
#[inline]
pub fn scalar_kernel<T: Sample>(output: &mut [T], input: &[T], constant: &[T]) {
    mul_const_v_ref(output, input, constant);
}
