use std::sync::OnceLock;

/// Instruction set the accelerated kernels run on.
///
/// Resolved once per process by [`machine`]; this is the only hardware query
/// performed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Machine {
    /// 256-bit AVX lanes (8 x `f32`, 4 x `Complex<f32>`).
    Avx,
    /// Portable loops left to the compiler's auto-vectorizer.
    Generic,
}

impl Machine {
    /// Preferred buffer alignment in bytes.
    pub const fn alignment(self) -> usize {
        match self {
            Machine::Avx => 32,
            Machine::Generic => 16,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Machine::Avx => "avx",
            Machine::Generic => "generic",
        }
    }

    fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::arch::is_x86_feature_detected!("avx") {
                return Machine::Avx;
            }
        }
        Machine::Generic
    }
}

static MACHINE: OnceLock<Machine> = OnceLock::new();

/// Returns the machine selected for this process.
pub fn machine() -> Machine {
    *MACHINE.get_or_init(Machine::detect)
}

/// Byte boundary the accelerated kernels want their buffers aligned to.
pub fn alignment() -> usize {
    machine().alignment()
}
