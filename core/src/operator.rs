use mulconst_backend::{Complex64, Sample, SampleKind, accelerated::tile_len, alignment};
use tracing::{debug, trace, warn};

use crate::{
    config::MultiplyConstConfig,
    constant::ConstantStore,
    error::Result,
    kernel::{ElementKernel, KernelKind},
};

/// Stream signature of one port side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IoSignature {
    pub min_streams: usize,
    pub max_streams: usize,
    /// Bytes per item: `size_of::<T>() * vlen`.
    pub item_size: usize,
}

/// Streaming multiply-by-constant-vector operator.
///
/// Every call to [`MultiplyConstV::process`] produces exactly as many items
/// as requested, each item being `vlen` samples multiplied position-wise by
/// the constant vector. The element type `T`, `vlen` and the kernel are fixed
/// at construction; the constant values can be replaced at any time with
/// [`MultiplyConstV::set_constant`].
///
/// Both `process` and `set_constant` take `&mut self`: a host that drives
/// processing and configuration from different threads has to serialize
/// them itself (e.g. behind a lock, or only reconfiguring while paused).
#[derive(Debug)]
pub struct MultiplyConstV<T: Sample> {
    constant: ConstantStore<T>,
    kernel: ElementKernel<T>,
    output_multiple: usize,
}

impl<T: Sample> MultiplyConstV<T> {
    pub const NAME: &'static str = "multiply_const_v";

    /// Creates an operator from native samples with the default configuration.
    pub fn new(initial: &[T]) -> Result<Self> {
        Self::with_config(initial, MultiplyConstConfig::default())
    }

    pub fn with_config(initial: &[T], config: MultiplyConstConfig) -> Result<Self> {
        Ok(Self::from_constant(ConstantStore::from_native(initial)?, config))
    }

    /// Creates an operator directly from canonical values, narrowed to `T`.
    pub fn from_complex64(initial: &[Complex64], config: MultiplyConstConfig) -> Result<Self> {
        Ok(Self::from_constant(ConstantStore::new(initial)?, config))
    }

    fn from_constant(constant: ConstantStore<T>, config: MultiplyConstConfig) -> Self {
        let kernel: ElementKernel<T> = ElementKernel::select(&config);

        let (constant, output_multiple): (ConstantStore<T>, usize) = match kernel.kind() {
            KernelKind::Accelerated => {
                let tile: usize = tile_len::<T>(constant.vlen());
                (constant.with_tile(tile), (alignment() / size_of::<T>()).max(1))
            }
            KernelKind::Scalar => (constant, 1),
        };

        let kind: SampleKind = T::KIND;
        debug!(
            %kind,
            vlen = constant.vlen(),
            kernel = kernel.kind().name(),
            output_multiple,
            tile = constant.kernel_constant().len(),
            "multiply_const_v constructed"
        );

        Self {
            constant,
            kernel,
            output_multiple,
        }
    }

    /// Multiplies `noutput_items` items of `input` into `output` and returns
    /// the number of items produced, always `noutput_items`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer holds fewer than `noutput_items * vlen` samples.
    pub fn process(&mut self, noutput_items: usize, input: &[T], output: &mut [T]) -> usize {
        let n: usize = noutput_items * self.vlen();
        assert!(
            input.len() >= n,
            "input holds {} samples, {noutput_items} items need {n}",
            input.len()
        );
        assert!(
            output.len() >= n,
            "output holds {} samples, {noutput_items} items need {n}",
            output.len()
        );

        trace!(noutput_items, kernel = self.kernel.kind().name(), "multiply_const_v process");

        self.kernel.run(n, input, output, self.constant.kernel_constant());
        noutput_items
    }

    /// Replaces the constant vector.
    ///
    /// Fails with [`crate::MultiplyConstError::LengthMismatch`] if
    /// `values.len() != vlen`, in which case the previous constant stays in
    /// effect.
    pub fn set_constant(&mut self, values: &[Complex64]) -> Result<()> {
        let kind: SampleKind = T::KIND;
        match self.constant.set(values) {
            Ok(()) => {
                debug!(%kind, vlen = self.vlen(), "multiply_const_v constant replaced");
                Ok(())
            }
            Err(err) => {
                warn!(%kind, %err, "multiply_const_v constant rejected");
                Err(err)
            }
        }
    }

    /// Copy of the canonical constant, exact even when `T` is lossy.
    pub fn get_constant(&self) -> Vec<Complex64> {
        self.constant.get()
    }

    /// Constant narrowed to `T`, as multiplied by the kernel.
    pub fn working_constant(&self) -> &[T] {
        self.constant.working()
    }

    pub fn vlen(&self) -> usize {
        self.constant.vlen()
    }

    /// Granularity, in items, the host must request per call.
    ///
    /// `max(1, alignment / size_of::<T>())` when the accelerated kernel is
    /// bound, `1` otherwise.
    pub fn output_multiple(&self) -> usize {
        self.output_multiple
    }

    pub fn kernel(&self) -> KernelKind {
        self.kernel.kind()
    }

    pub fn is_accelerated(&self) -> bool {
        self.kernel.kind() == KernelKind::Accelerated
    }

    pub fn kind(&self) -> SampleKind {
        T::KIND
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Bytes per item on both ports.
    pub fn item_size(&self) -> usize {
        size_of::<T>() * self.vlen()
    }

    pub fn input_signature(&self) -> IoSignature {
        IoSignature {
            min_streams: 1,
            max_streams: 1,
            item_size: self.item_size(),
        }
    }

    pub fn output_signature(&self) -> IoSignature {
        self.input_signature()
    }
}
