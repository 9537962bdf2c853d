//! Error type for operator construction and constant replacement.

use thiserror::Error;

/// Failures surfaced by the operator.
///
/// Only configuration calls fail. A rejected call leaves the operator exactly
/// as it was, and `process` never returns an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiplyConstError {
    /// `set_constant` was given a vector whose length differs from `vlen`.
    #[error("set_constant called with the wrong length: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// The initial constant vector was empty; `vlen` must be at least one.
    #[error("constant vector must hold at least one value")]
    EmptyConstant,

    /// A byte-level call was made with a sample type other than the operator's.
    #[error("sample type mismatch: operator is {expected}, buffers are {got}")]
    KindMismatch { expected: &'static str, got: &'static str },
}

pub type Result<T> = std::result::Result<T, MultiplyConstError>;
