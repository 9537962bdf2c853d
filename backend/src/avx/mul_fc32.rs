use crate::Fc32;

// Samples are interleaved `[re, im]` pairs, four per 256-bit lane.
//
// For a lane `x` and a multiplier with broadcast parts `c_re`, `c_im`:
//   t1 = x * c_re            -> [ar*cr, ai*cr]
//   t2 = swap(x) * c_im      -> [ai*ci, ar*ci]
//   addsub(t1, t2)           -> [ar*cr - ai*ci, ai*cr + ar*ci]

/// `res[i] = a[i] * c`.
///
/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via [`crate::machine`]);
/// `res` and `a` must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn fc32_mul_const_avx(res: &mut [Fc32], a: &[Fc32], c: Fc32) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    use core::arch::x86_64::{
        __m256, _mm256_addsub_ps, _mm256_loadu_ps, _mm256_mul_ps, _mm256_permute_ps, _mm256_set1_ps, _mm256_storeu_ps,
    };

    let n: usize = res.len();

    let span: usize = n >> 2;

    let mut rr: *mut f32 = res.as_mut_ptr() as *mut f32;
    let mut aa: *const f32 = a.as_ptr() as *const f32;

    unsafe {
        let c_re: __m256 = _mm256_set1_ps(c.re);
        let c_im: __m256 = _mm256_set1_ps(c.im);
        for _ in 0..span {
            let x: __m256 = _mm256_loadu_ps(aa);
            let t1: __m256 = _mm256_mul_ps(x, c_re);
            let t2: __m256 = _mm256_mul_ps(_mm256_permute_ps(x, 0b10_11_00_01), c_im);
            _mm256_storeu_ps(rr, _mm256_addsub_ps(t1, t2));
            rr = rr.add(8);
            aa = aa.add(8);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        use crate::reference::mul_const_ref;

        mul_const_ref(&mut res[span << 2..], &a[span << 2..], c);
    }
}

/// `res[i] = a[i] * b[i]`.
///
/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via [`crate::machine`]);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn fc32_mul_avx(res: &mut [Fc32], a: &[Fc32], b: &[Fc32]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    use core::arch::x86_64::{
        __m256, _mm256_addsub_ps, _mm256_loadu_ps, _mm256_movehdup_ps, _mm256_moveldup_ps, _mm256_mul_ps, _mm256_permute_ps,
        _mm256_storeu_ps,
    };

    let n: usize = res.len();

    let span: usize = n >> 2;

    let mut rr: *mut f32 = res.as_mut_ptr() as *mut f32;
    let mut aa: *const f32 = a.as_ptr() as *const f32;
    let mut bb: *const f32 = b.as_ptr() as *const f32;

    unsafe {
        for _ in 0..span {
            let x: __m256 = _mm256_loadu_ps(aa);
            let y: __m256 = _mm256_loadu_ps(bb);
            let t1: __m256 = _mm256_mul_ps(x, _mm256_moveldup_ps(y));
            let t2: __m256 = _mm256_mul_ps(_mm256_permute_ps(x, 0b10_11_00_01), _mm256_movehdup_ps(y));
            _mm256_storeu_ps(rr, _mm256_addsub_ps(t1, t2));
            rr = rr.add(8);
            aa = aa.add(8);
            bb = bb.add(8);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        use crate::reference::mul_ref;

        mul_ref(&mut res[span << 2..], &a[span << 2..], &b[span << 2..]);
    }
}
