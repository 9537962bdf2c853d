use itertools::izip;
use mulconst_backend::{Complex64, Sample, accelerated::tile_constant};

use crate::error::{MultiplyConstError, Result};

/// Multiplier values of one operator.
///
/// Holds the canonical `Complex<f64>` vector handed in by the user and the
/// working copy narrowed to the native sample type `T`. Both always have
/// `vlen` entries and always describe the same values: the working copy is
/// derived from the canonical one on every update, never edited on its own.
///
/// A store built [`with_tile`](ConstantStore::with_tile) also keeps the
/// working copy repeated over a tile for the accelerated kernels, refreshed
/// together with it.
///
/// Storage is allocated at construction; updates overwrite it in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantStore<T: Sample> {
    canonical: Vec<Complex64>,
    working: Vec<T>,
    tiled: Vec<T>,
}

impl<T: Sample> ConstantStore<T> {
    /// Builds a store from an initial canonical vector, fixing `vlen` to its length.
    pub fn new(values: &[Complex64]) -> Result<Self> {
        if values.is_empty() {
            return Err(MultiplyConstError::EmptyConstant);
        }
        let mut store: Self = Self {
            canonical: vec![Complex64::new(0.0, 0.0); values.len()],
            working: vec![T::ZERO; values.len()],
            tiled: Vec::new(),
        };
        store.set(values)?;
        Ok(store)
    }

    /// Builds a store from native samples; widening is lossless so the
    /// working copy equals `values`.
    pub fn from_native(values: &[T]) -> Result<Self> {
        let canonical: Vec<Complex64> = values.iter().map(|x| x.to_complex64()).collect();
        Self::new(&canonical)
    }

    /// Adds a tile of `tile_len` samples, a multiple of `vlen`.
    pub fn with_tile(mut self, tile_len: usize) -> Self {
        assert!(tile_len.is_multiple_of(self.vlen()), "tile of {tile_len} samples does not hold whole items");
        self.tiled = vec![T::ZERO; tile_len];
        tile_constant(&mut self.tiled, &self.working);
        self
    }

    pub fn vlen(&self) -> usize {
        self.working.len()
    }

    /// Replaces both representations.
    ///
    /// The length is checked before anything is written, so a mismatch
    /// leaves the store untouched.
    pub fn set(&mut self, values: &[Complex64]) -> Result<()> {
        if values.len() != self.vlen() {
            return Err(MultiplyConstError::LengthMismatch {
                expected: self.vlen(),
                got: values.len(),
            });
        }

        self.canonical.copy_from_slice(values);
        izip!(self.working.iter_mut(), values.iter()).for_each(|(w, v)| *w = T::from_complex64(*v));
        if !self.tiled.is_empty() {
            tile_constant(&mut self.tiled, &self.working);
        }
        Ok(())
    }

    /// Copy of the canonical values.
    pub fn get(&self) -> Vec<Complex64> {
        self.canonical.clone()
    }

    pub fn working(&self) -> &[T] {
        &self.working
    }

    /// Constant handed to the kernel: the tile if there is one, else the
    /// working copy.
    pub fn kernel_constant(&self) -> &[T] {
        if self.tiled.is_empty() {
            &self.working
        } else {
            &self.tiled
        }
    }
}
