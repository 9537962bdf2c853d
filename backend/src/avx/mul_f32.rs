/// `res[i] = a[i] * c`.
///
/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via [`crate::machine`]);
/// `res` and `a` must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn f32_mul_const_avx(res: &mut [f32], a: &[f32], c: f32) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    use core::arch::x86_64::{__m256, _mm256_loadu_ps, _mm256_mul_ps, _mm256_set1_ps, _mm256_storeu_ps};

    let n: usize = res.len();

    let span: usize = n >> 3;

    let mut rr: *mut f32 = res.as_mut_ptr();
    let mut aa: *const f32 = a.as_ptr();

    unsafe {
        let cc: __m256 = _mm256_set1_ps(c);
        for _ in 0..span {
            _mm256_storeu_ps(rr, _mm256_mul_ps(_mm256_loadu_ps(aa), cc));
            rr = rr.add(8);
            aa = aa.add(8);
        }
    }

    // tail
    if !n.is_multiple_of(8) {
        use crate::reference::mul_const_ref;

        mul_const_ref(&mut res[span << 3..], &a[span << 3..], c);
    }
}

/// `res[i] = a[i] * b[i]`.
///
/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via [`crate::machine`]);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn f32_mul_avx(res: &mut [f32], a: &[f32], b: &[f32]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    use core::arch::x86_64::{_mm256_loadu_ps, _mm256_mul_ps, _mm256_storeu_ps};

    let n: usize = res.len();

    let span: usize = n >> 3;

    let mut rr: *mut f32 = res.as_mut_ptr();
    let mut aa: *const f32 = a.as_ptr();
    let mut bb: *const f32 = b.as_ptr();

    unsafe {
        for _ in 0..span {
            _mm256_storeu_ps(rr, _mm256_mul_ps(_mm256_loadu_ps(aa), _mm256_loadu_ps(bb)));
            rr = rr.add(8);
            aa = aa.add(8);
            bb = bb.add(8);
        }
    }

    // tail
    if !n.is_multiple_of(8) {
        use crate::reference::mul_ref;

        mul_ref(&mut res[span << 3..], &a[span << 3..], &b[span << 3..]);
    }
}
