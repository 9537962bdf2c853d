//! Accelerated kernel adapters for `f32` and `Complex<f32>`.
//!
//! Both adapters operate on the flattened element run of a block
//! (`noutput_items * vlen` samples) and pick the routine for the current
//! [`crate::Machine`]. A single-element constant takes the broadcast routine
//! over the whole run. Longer constants are first repeated into a tile (see
//! [`tile_len`] and [`tile_constant`]) whose length is a whole number of
//! vector lanes, and the run is streamed through the element-wise routine one
//! tile at a time.
//!
//! Buffers aligned to [`crate::alignment`] keep every vector access on a lane
//! boundary. Unaligned buffers are still handled correctly.

use crate::{
    Fc32, Sample, alignment, machine,
    reference::{MulConst, MulConstRef},
};

#[cfg(target_arch = "x86_64")]
use crate::{Machine, avx::MulConstAvx};

/// Smallest tile, in samples, built for a constant with `vlen > 1`.
pub const TILE_MIN: usize = 64;

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Length of the tile the adapters stream against for a `vlen`-sample constant.
///
/// `1` when `vlen == 1`. Otherwise the smallest multiple of
/// `lcm(vlen, lanes)` holding at least [`TILE_MIN`] samples, where `lanes` is
/// the number of `T` per [`alignment`] bytes.
pub fn tile_len<T: Sample>(vlen: usize) -> usize {
    assert!(vlen > 0);
    if vlen == 1 {
        return 1;
    }
    let lanes: usize = (alignment() / size_of::<T>()).max(1);
    let lcm: usize = vlen / gcd(vlen, lanes) * lanes;
    lcm * TILE_MIN.div_ceil(lcm)
}

/// `tile[k] = cst[k % cst.len()]`.
pub fn tile_constant<T: Sample>(tile: &mut [T], cst: &[T]) {
    debug_assert!(tile.len().is_multiple_of(cst.len()));
    tile.iter_mut().zip(cst.iter().cycle()).for_each(|(t, c)| *t = *c);
}

/// Flattened `f32` multiply, `res[k] = a[k] * cst[k % cst.len()]`.
///
/// `cst` is either the constant itself or its tile.
pub fn mul_const_v_f32(res: &mut [f32], a: &[f32], cst: &[f32]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    match machine() {
        #[cfg(target_arch = "x86_64")]
        Machine::Avx => <MulConstAvx as MulConst<f32>>::mul_const_v(res, a, cst),
        _ => <MulConstRef as MulConst<f32>>::mul_const_v(res, a, cst),
    }
}

/// Flattened `Complex<f32>` multiply, `res[k] = a[k] * cst[k % cst.len()]`.
///
/// `cst` is either the constant itself or its tile.
pub fn mul_const_v_fc32(res: &mut [Fc32], a: &[Fc32], cst: &[Fc32]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    match machine() {
        #[cfg(target_arch = "x86_64")]
        Machine::Avx => <MulConstAvx as MulConst<Fc32>>::mul_const_v(res, a, cst),
        _ => <MulConstRef as MulConst<Fc32>>::mul_const_v(res, a, cst),
    }
}
