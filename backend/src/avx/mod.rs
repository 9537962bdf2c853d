//! AVX routines for `f32` and `Complex<f32>`.
//!
//! Every routine processes 256-bit lanes with unaligned loads and stores and
//! hands the tail that does not fill a lane to [`crate::reference`].
//!
//! [`MulConstAvx`] expects constants longer than one sample to be tiled with
//! [`crate::accelerated::tile_constant`], so that each element-wise call
//! covers whole lanes.

#[cfg(target_arch = "x86_64")]
mod mul_f32;
#[cfg(target_arch = "x86_64")]
mod mul_fc32;

#[cfg(target_arch = "x86_64")]
pub use mul_f32::*;
#[cfg(target_arch = "x86_64")]
pub use mul_fc32::*;

#[cfg(target_arch = "x86_64")]
pub struct MulConstAvx;

#[cfg(target_arch = "x86_64")]
impl crate::reference::MulConst<f32> for MulConstAvx {
    #[inline(always)]
    fn mul_const_v(res: &mut [f32], a: &[f32], cst: &[f32]) {
        assert_eq!(crate::machine(), crate::Machine::Avx, "arch must support avx");
        if cst.len() == 1 {
            unsafe { f32_mul_const_avx(res, a, cst[0]) };
            return;
        }

        let mut res_tiles = res.chunks_exact_mut(cst.len());
        let mut a_tiles = a.chunks_exact(cst.len());
        for (r, x) in (&mut res_tiles).zip(&mut a_tiles) {
            unsafe { f32_mul_avx(r, x, cst) };
        }

        // partial last tile
        let r: &mut [f32] = res_tiles.into_remainder();
        unsafe { f32_mul_avx(r, a_tiles.remainder(), &cst[..r.len()]) };
    }
}

#[cfg(target_arch = "x86_64")]
impl crate::reference::MulConst<crate::Fc32> for MulConstAvx {
    #[inline(always)]
    fn mul_const_v(res: &mut [crate::Fc32], a: &[crate::Fc32], cst: &[crate::Fc32]) {
        assert_eq!(crate::machine(), crate::Machine::Avx, "arch must support avx");
        if cst.len() == 1 {
            unsafe { fc32_mul_const_avx(res, a, cst[0]) };
            return;
        }

        let mut res_tiles = res.chunks_exact_mut(cst.len());
        let mut a_tiles = a.chunks_exact(cst.len());
        for (r, x) in (&mut res_tiles).zip(&mut a_tiles) {
            unsafe { fc32_mul_avx(r, x, cst) };
        }

        // partial last tile
        let r: &mut [crate::Fc32] = res_tiles.into_remainder();
        unsafe { fc32_mul_avx(r, a_tiles.remainder(), &cst[..r.len()]) };
    }
}
