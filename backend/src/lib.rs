//! # mulconst-backend
//!
//! Sample types and multiply kernels for the multiply-by-constant-vector
//! operator.
//!
//! ## Sample types
//!
//! The [`Sample`] trait covers the closed set of element types the operator
//! is instantiated for: `Complex<f32>`, `f32`, `Complex<i32>`, `Complex<i16>`,
//! `Complex<i8>`, `i32`, `i16` and `i8`. Each type knows how to narrow a
//! canonical `Complex<f64>` value into itself and how to multiply.
//!
//! ## Kernels
//!
//! 1. **[`mod@reference`]** -- Pure-Rust scalar loops valid for every [`Sample`].
//!    Used as the generic execution path and as a correctness oracle.
//! 2. **[`avx`]** -- AVX routines for `f32` and `Complex<f32>`.
//! 3. **[`accelerated`]** -- Adapters binding the flattened `n * vlen` element
//!    run to the best routine for the current [`Machine`].
//!
//! ## Alignment
//!
//! [`alignment`] is the single hardware query of the crate. It reports the
//! byte boundary the accelerated routines prefer; hosts use it to size their
//! buffers and the operator derives its output multiple from it.

#![allow(clippy::needless_range_loop)]

pub mod accelerated;
pub mod avx;
pub mod machine;
pub mod reference;
pub mod sample;

#[cfg(test)]
mod tests;

pub use machine::*;
pub use sample::*;

use std::any::type_name;

/// Default memory alignment in bytes for allocated sample buffers.
///
/// Matches the cache-line size of modern x86 processors and is a multiple
/// of every [`Machine::alignment`].
pub const DEFAULTALIGN: usize = 64;

/// Returns `true` if `ptr` is aligned to [`DEFAULTALIGN`] bytes.
pub fn is_aligned<T>(ptr: *const T) -> bool {
    (ptr as usize).is_multiple_of(DEFAULTALIGN)
}

/// Number of `V` covering `data`.
///
/// Panics unless `data` is aligned for `V` and spans a whole number of `V`.
fn view_len<T, V>(data: &[T]) -> usize {
    let bytes: usize = size_of_val(data);
    let width: usize = size_of::<V>();
    assert!(width > 0, "cannot view a buffer as zero-sized {}", type_name::<V>());
    assert!(
        bytes.is_multiple_of(width),
        "{bytes} bytes do not hold a whole number of {}",
        type_name::<V>()
    );
    assert!(
        data.as_ptr().cast::<V>().is_aligned(),
        "buffer at {:p} is not aligned for {}",
        data.as_ptr(),
        type_name::<V>()
    );
    bytes / width
}

/// Views `data` as `[V]`, e.g. raw port bytes as samples.
pub fn cast<T, V>(data: &[T]) -> &[V] {
    let len: usize = view_len::<T, V>(data);
    unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<V>(), len) }
}

/// Mutable counterpart of [`cast`].
pub fn cast_mut<T, V>(data: &mut [T]) -> &mut [V] {
    let len: usize = view_len::<T, V>(data);
    unsafe { std::slice::from_raw_parts_mut(data.as_mut_ptr().cast::<V>(), len) }
}

/// Allocates a zero-initialized buffer of exactly `size` samples starting on
/// a [`DEFAULTALIGN`] boundary.
///
/// The backing allocation is rounded up to a multiple of [`DEFAULTALIGN`]
/// bytes, mirroring the padding a streaming host gives its buffers. Storage
/// is a `Vec` of 64-byte aligned blocks, so it is released with the layout
/// it was allocated with.
///
/// # Panics
///
/// - If `T` is zero-sized.
/// - If `align_of::<T>()` exceeds [`DEFAULTALIGN`].
pub fn alloc_aligned<T: Sample>(size: usize) -> AlignedBuf<T> {
    AlignedBuf::zeroed(size)
}

#[repr(C, align(64))]
#[derive(Clone, Copy)]
struct Block([u8; DEFAULTALIGN]);

/// Zero-initialized sample buffer aligned to [`DEFAULTALIGN`] bytes.
///
/// Dereferences to `[T]` of the requested length; the tail of the last
/// block is padding.
pub struct AlignedBuf<T: Sample> {
    blocks: Vec<Block>,
    len: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Sample> AlignedBuf<T> {
    pub fn zeroed(len: usize) -> Self {
        assert!(size_of::<T>() > 0, "alloc_aligned: zero-sized types are not supported");
        assert!(align_of::<T>() <= DEFAULTALIGN);
        let bytes: usize = (len * size_of::<T>()).next_multiple_of(DEFAULTALIGN);
        Self {
            blocks: vec![Block([0u8; DEFAULTALIGN]); bytes / DEFAULTALIGN],
            len,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn from_slice(data: &[T]) -> Self {
        let mut buf: Self = Self::zeroed(data.len());
        buf.copy_from_slice(data);
        buf
    }
}

impl<T: Sample> std::ops::Deref for AlignedBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // Every sample type is plain-old-data for which all-zero bytes is a valid value.
        unsafe { std::slice::from_raw_parts(self.blocks.as_ptr() as *const T, self.len) }
    }
}

impl<T: Sample> std::ops::DerefMut for AlignedBuf<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.blocks.as_mut_ptr() as *mut T, self.len) }
    }
}

impl<T: Sample> std::fmt::Debug for AlignedBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
