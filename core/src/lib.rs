//! # mulconst-core
//!
//! Streaming multiply-by-constant-vector operator.
//!
//! An operator multiplies every item of `vlen` samples by a constant vector
//! of the same length, position by position:
//! `output[k] = input[k] * constant[k % vlen]`. It is driven by an external
//! streaming runtime which hands it ready-made input and output buffers and
//! a requested item count.
//!
//! ## Execution paths
//!
//! The kernel is chosen once at construction:
//! - `Complex<f32>` and `f32` bind the accelerated kernel of
//!   [`mulconst_backend::accelerated`], which works on the flattened
//!   `noutput_items * vlen` run. The operator then exports an
//!   [output multiple](MultiplyConstV::output_multiple) derived from
//!   [`mulconst_backend::alignment`].
//! - Every other sample type binds the generic scalar kernel.
//!
//! ## Constants
//!
//! Constants are set and queried as `Complex<f64>` for every sample type.
//! The canonical vector is kept as given, and the copy the kernel multiplies
//! with is narrowed from it on every update (see [`mulconst_backend::Sample`]
//! for the narrowing rules). Replacing a constant with a vector of the wrong
//! length fails and changes nothing.
//!
//! ## Concurrency
//!
//! Operators do no internal locking. `process` and `set_constant` both take
//! `&mut self`; hosts serialize them.

mod any;
mod config;
mod constant;
mod error;
mod factory;
mod kernel;
mod operator;


pub use any::*;
pub use config::*;
pub use constant::*;
pub use error::*;
pub use factory::*;
pub use kernel::*;
pub use operator::*;

pub use mulconst_backend::{Complex64, Fc32, Sample, SampleKind, Sc8, Sc16, Sc32};
