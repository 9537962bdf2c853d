use std::any::Any;

use mulconst_backend::{Complex64, Fc32, Sample, SampleKind, Sc8, Sc16, Sc32, cast, cast_mut};

use crate::{
    config::MultiplyConstConfig,
    error::{MultiplyConstError, Result},
    kernel::KernelKind,
    operator::{IoSignature, MultiplyConstV},
};

/// An operator of any supported sample type, chosen at runtime.
///
/// Lets a host hold heterogeneous instances behind one type and drive them
/// with raw byte buffers.
#[derive(Debug)]
pub enum MultiplyConst {
    Fc32(MultiplyConstV<Fc32>),
    F32(MultiplyConstV<f32>),
    Sc32(MultiplyConstV<Sc32>),
    Sc16(MultiplyConstV<Sc16>),
    Sc8(MultiplyConstV<Sc8>),
    S32(MultiplyConstV<i32>),
    S16(MultiplyConstV<i16>),
    S8(MultiplyConstV<i8>),
}

macro_rules! dispatch {
    ($self:expr, $op:ident => $body:expr) => {
        match $self {
            MultiplyConst::Fc32($op) => $body,
            MultiplyConst::F32($op) => $body,
            MultiplyConst::Sc32($op) => $body,
            MultiplyConst::Sc16($op) => $body,
            MultiplyConst::Sc8($op) => $body,
            MultiplyConst::S32($op) => $body,
            MultiplyConst::S16($op) => $body,
            MultiplyConst::S8($op) => $body,
        }
    };
}

impl MultiplyConst {
    /// Builds an operator of type `kind` from canonical values.
    pub fn new(kind: SampleKind, initial: &[Complex64], config: MultiplyConstConfig) -> Result<Self> {
        Ok(match kind {
            SampleKind::Fc32 => MultiplyConst::Fc32(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::F32 => MultiplyConst::F32(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::Sc32 => MultiplyConst::Sc32(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::Sc16 => MultiplyConst::Sc16(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::Sc8 => MultiplyConst::Sc8(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::S32 => MultiplyConst::S32(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::S16 => MultiplyConst::S16(MultiplyConstV::from_complex64(initial, config)?),
            SampleKind::S8 => MultiplyConst::S8(MultiplyConstV::from_complex64(initial, config)?),
        })
    }

    pub fn kind(&self) -> SampleKind {
        dispatch!(self, op => op.kind())
    }

    pub fn vlen(&self) -> usize {
        dispatch!(self, op => op.vlen())
    }

    pub fn output_multiple(&self) -> usize {
        dispatch!(self, op => op.output_multiple())
    }

    pub fn kernel(&self) -> KernelKind {
        dispatch!(self, op => op.kernel())
    }

    pub fn item_size(&self) -> usize {
        dispatch!(self, op => op.item_size())
    }

    pub fn input_signature(&self) -> IoSignature {
        dispatch!(self, op => op.input_signature())
    }

    pub fn output_signature(&self) -> IoSignature {
        dispatch!(self, op => op.output_signature())
    }

    pub fn set_constant(&mut self, values: &[Complex64]) -> Result<()> {
        dispatch!(self, op => op.set_constant(values))
    }

    pub fn get_constant(&self) -> Vec<Complex64> {
        dispatch!(self, op => op.get_constant())
    }

    /// Typed view of the operator; fails if `T` is not its sample type.
    pub fn as_typed_mut<T: Sample>(&mut self) -> Result<&mut MultiplyConstV<T>> {
        let expected: SampleKind = self.kind();
        let typed: Option<&mut MultiplyConstV<T>> = dispatch!(self, op => (op as &mut dyn Any).downcast_mut::<MultiplyConstV<T>>());
        typed.ok_or(MultiplyConstError::KindMismatch {
            expected: expected.name(),
            got: T::KIND.name(),
        })
    }

    /// Typed processing entry point.
    pub fn process<T: Sample>(&mut self, noutput_items: usize, input: &[T], output: &mut [T]) -> Result<usize> {
        Ok(self.as_typed_mut::<T>()?.process(noutput_items, input, output))
    }

    /// Processing entry point over raw sample bytes.
    ///
    /// # Panics
    ///
    /// Panics if a buffer is not aligned for the sample type, is not a whole
    /// number of samples, or is shorter than `noutput_items * item_size()` bytes.
    pub fn process_bytes(&mut self, noutput_items: usize, input: &[u8], output: &mut [u8]) -> usize {
        dispatch!(self, op => op.process(noutput_items, cast(input), cast_mut(output)))
    }
}

macro_rules! impl_from_operator {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<MultiplyConstV<$t>> for MultiplyConst {
                fn from(op: MultiplyConstV<$t>) -> Self {
                    MultiplyConst::$variant(op)
                }
            }
        )*
    };
}

impl_from_operator! {
    Fc32 => Fc32,
    f32 => F32,
    Sc32 => Sc32,
    Sc16 => Sc16,
    Sc8 => Sc8,
    i32 => S32,
    i16 => S16,
    i8 => S8,
}
