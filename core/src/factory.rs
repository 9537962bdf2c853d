//! One constructor per supported sample type.
//!
//! Each takes the initial constant in the native type; `vlen` is its length.
//! Only [`make_fc32_fc32`] and [`make_f32_f32`] bind the accelerated kernel.

use mulconst_backend::{Fc32, Sc8, Sc16, Sc32};

use crate::{error::Result, operator::MultiplyConstV};

pub fn make_fc32_fc32(vec: &[Fc32]) -> Result<MultiplyConstV<Fc32>> {
    MultiplyConstV::new(vec)
}

pub fn make_f32_f32(vec: &[f32]) -> Result<MultiplyConstV<f32>> {
    MultiplyConstV::new(vec)
}

pub fn make_sc32_sc32(vec: &[Sc32]) -> Result<MultiplyConstV<Sc32>> {
    MultiplyConstV::new(vec)
}

pub fn make_sc16_sc16(vec: &[Sc16]) -> Result<MultiplyConstV<Sc16>> {
    MultiplyConstV::new(vec)
}

pub fn make_sc8_sc8(vec: &[Sc8]) -> Result<MultiplyConstV<Sc8>> {
    MultiplyConstV::new(vec)
}

pub fn make_s32_s32(vec: &[i32]) -> Result<MultiplyConstV<i32>> {
    MultiplyConstV::new(vec)
}

pub fn make_s16_s16(vec: &[i16]) -> Result<MultiplyConstV<i16>> {
    MultiplyConstV::new(vec)
}

pub fn make_s8_s8(vec: &[i8]) -> Result<MultiplyConstV<i8>> {
    MultiplyConstV::new(vec)
}
