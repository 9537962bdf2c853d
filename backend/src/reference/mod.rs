mod mul_const;

pub use mul_const::*;

use crate::Sample;

/// Flattened multiply kernel over sample type `T`.
///
/// Implementors write `res[k] = a[k] * cst[k % cst.len()]` for every
/// `k < res.len()`. Callers guarantee `res.len() == a.len()` and a
/// non-empty `cst`; `res.len()` need not be a multiple of `cst.len()`.
pub trait MulConst<T: Sample> {
    fn mul_const_v(res: &mut [T], a: &[T], cst: &[T]);
}

pub struct MulConstRef;

impl<T: Sample> MulConst<T> for MulConstRef {
    #[inline(always)]
    fn mul_const_v(res: &mut [T], a: &[T], cst: &[T]) {
        mul_const_v_ref(res, a, cst);
    }
}
