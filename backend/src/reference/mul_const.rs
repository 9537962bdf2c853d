use itertools::izip;

use crate::Sample;

/// `res[i] = a[i] * c`.
pub fn mul_const_ref<T: Sample>(res: &mut [T], a: &[T], c: T) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    for (y, x) in res.iter_mut().zip(a.iter()) {
        *y = x.mul_sample(c);
    }
}

/// `res[i] = a[i] * b[i]`.
pub fn mul_ref<T: Sample>(res: &mut [T], a: &[T], b: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(y, x, c)| *y = x.mul_sample(*c));
}

/// `res[k] = a[k] * cst[k % cst.len()]`.
///
/// A single-element constant is broadcast without modular indexing.
pub fn mul_const_v_ref<T: Sample>(res: &mut [T], a: &[T], cst: &[T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert!(!cst.is_empty());
    }

    let vlen: usize = cst.len();

    if vlen == 1 {
        mul_const_ref(res, a, cst[0]);
        return;
    }

    for k in 0..res.len() {
        res[k] = a[k].mul_sample(cst[k % vlen]);
    }
}
