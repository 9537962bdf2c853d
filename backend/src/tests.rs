use num_complex::Complex;
use sampling::Source;

use crate::{
    AlignedBuf, Complex64, DEFAULTALIGN, Fc32, Sample, SampleKind, Sc16, Sc32, Sc8,
    accelerated::{TILE_MIN, mul_const_v_f32, mul_const_v_fc32, tile_constant, tile_len},
    alignment, alloc_aligned, cast, cast_mut, fill_samples, is_aligned, machine,
    reference::mul_const_v_ref,
};

const LENGTHS: [usize; 9] = [0, 1, 3, 4, 7, 8, 9, 63, 1024];

fn check_accelerated_matches_ref<T: Sample>(accelerated: fn(&mut [T], &[T], &[T]), source: &mut Source) {
    for vlen in [1, 2, 3, 5, 8] {
        let mut cst: Vec<T> = vec![T::ZERO; vlen];
        fill_samples(&mut cst, source);

        for items in LENGTHS {
            let n: usize = items * vlen;

            let mut a: AlignedBuf<T> = alloc_aligned(n);
            fill_samples(&mut a, source);

            // Garbage in the outputs so a skipped element shows up.
            let mut res_ref: AlignedBuf<T> = alloc_aligned(n);
            let mut res_test: AlignedBuf<T> = alloc_aligned(n);
            fill_samples(&mut res_ref, source);
            fill_samples(&mut res_test, source);

            mul_const_v_ref(&mut res_ref, &a, &cst);
            accelerated(&mut res_test, &a, &cst);

            assert_eq!(&res_ref[..], &res_test[..], "kind={} vlen={vlen} items={items}", T::KIND);
        }
    }
}

// Same check with the constant repeated over its tile, the form the operator
// hands to the accelerated adapters. Item counts end on and off tile boundaries.
fn check_tiled_matches_ref<T: Sample>(accelerated: fn(&mut [T], &[T], &[T]), source: &mut Source) {
    for vlen in [1, 2, 3, 4, 5, 7, 8, 9, 100] {
        let mut cst: Vec<T> = vec![T::ZERO; vlen];
        fill_samples(&mut cst, source);

        let mut tile: Vec<T> = vec![T::ZERO; tile_len::<T>(vlen)];
        tile_constant(&mut tile, &cst);

        for items in LENGTHS {
            let n: usize = items * vlen;

            let mut a: AlignedBuf<T> = alloc_aligned(n);
            fill_samples(&mut a, source);

            let mut res_ref: AlignedBuf<T> = alloc_aligned(n);
            let mut res_test: AlignedBuf<T> = alloc_aligned(n);
            fill_samples(&mut res_test, source);

            mul_const_v_ref(&mut res_ref, &a, &cst);
            accelerated(&mut res_test, &a, &tile);

            assert_eq!(&res_ref[..], &res_test[..], "kind={} vlen={vlen} items={items}", T::KIND);
        }
    }
}

#[test]
fn test_tiled_f32_matches_ref() {
    let mut source: Source = Source::new([5u8; 32]);
    check_tiled_matches_ref::<f32>(mul_const_v_f32, &mut source);
}

#[test]
fn test_tiled_fc32_matches_ref() {
    let mut source: Source = Source::new([6u8; 32]);
    check_tiled_matches_ref::<Fc32>(mul_const_v_fc32, &mut source);
}

#[test]
fn test_tile_len() {
    assert_eq!(tile_len::<f32>(1), 1);
    assert_eq!(tile_len::<Fc32>(1), 1);

    let lanes_f32: usize = (alignment() / size_of::<f32>()).max(1);
    let lanes_fc32: usize = (alignment() / size_of::<Fc32>()).max(1);

    for vlen in [2, 3, 5, 7, 8, 16, 100, 1000] {
        for (len, lanes) in [(tile_len::<f32>(vlen), lanes_f32), (tile_len::<Fc32>(vlen), lanes_fc32)] {
            assert!(len >= TILE_MIN, "vlen={vlen} len={len}");
            assert!(len.is_multiple_of(vlen), "vlen={vlen} len={len}");
            assert!(len.is_multiple_of(lanes), "vlen={vlen} len={len}");
        }
    }
}

#[test]
fn test_tile_constant_repeats() {
    let mut tile: [i16; 6] = [0; 6];
    tile_constant(&mut tile, &[3, 5]);
    assert_eq!(tile, [3, 5, 3, 5, 3, 5]);
}

#[test]
fn test_mul_const_v_f32_matches_ref() {
    let mut source: Source = Source::new([0u8; 32]);
    check_accelerated_matches_ref::<f32>(mul_const_v_f32, &mut source);
}

#[test]
fn test_mul_const_v_fc32_matches_ref() {
    let mut source: Source = Source::new([1u8; 32]);
    check_accelerated_matches_ref::<Fc32>(mul_const_v_fc32, &mut source);
}

#[test]
fn test_accelerated_unaligned_buffers() {
    let mut source: Source = Source::new([2u8; 32]);

    let mut a: Vec<f32> = vec![0.0; 101];
    fill_samples(&mut a, &mut source);
    let c: [f32; 1] = [f32::draw(&mut source)];

    let mut res_ref: Vec<f32> = vec![0.0; 100];
    let mut res_test: Vec<f32> = vec![0.0; 101];

    mul_const_v_ref(&mut res_ref, &a[1..], &c);
    mul_const_v_f32(&mut res_test[1..], &a[1..], &c);

    assert_eq!(&res_ref[..], &res_test[1..]);
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_avx_routines_direct() {
    use crate::Machine;
    use crate::avx::{f32_mul_avx, f32_mul_const_avx, fc32_mul_avx, fc32_mul_const_avx};
    use crate::reference::{mul_const_ref, mul_ref};

    if machine() != Machine::Avx {
        return;
    }

    let mut source: Source = Source::new([3u8; 32]);

    for n in LENGTHS {
        let mut a: Vec<f32> = vec![0.0; n];
        let mut b: Vec<f32> = vec![0.0; n];
        fill_samples(&mut a, &mut source);
        fill_samples(&mut b, &mut source);
        let mut res_ref: Vec<f32> = vec![0.0; n];
        let mut res_test: Vec<f32> = vec![0.0; n];

        mul_ref(&mut res_ref, &a, &b);
        unsafe { f32_mul_avx(&mut res_test, &a, &b) };
        assert_eq!(res_ref, res_test);

        mul_const_ref(&mut res_ref, &a, b.first().copied().unwrap_or(1.5));
        unsafe { f32_mul_const_avx(&mut res_test, &a, b.first().copied().unwrap_or(1.5)) };
        assert_eq!(res_ref, res_test);

        let mut x: Vec<Fc32> = vec![Fc32::ZERO; n];
        let mut y: Vec<Fc32> = vec![Fc32::ZERO; n];
        fill_samples(&mut x, &mut source);
        fill_samples(&mut y, &mut source);
        let mut cres_ref: Vec<Fc32> = vec![Fc32::ZERO; n];
        let mut cres_test: Vec<Fc32> = vec![Fc32::ZERO; n];

        mul_ref(&mut cres_ref, &x, &y);
        unsafe { fc32_mul_avx(&mut cres_test, &x, &y) };
        assert_eq!(cres_ref, cres_test);

        let c: Fc32 = Complex::new(0.25, -3.0);
        mul_const_ref(&mut cres_ref, &x, c);
        unsafe { fc32_mul_const_avx(&mut cres_test, &x, c) };
        assert_eq!(cres_ref, cres_test);
    }
}

#[test]
fn test_machine_alignment() {
    let align: usize = alignment();
    assert_eq!(align, machine().alignment());
    assert!(align.is_power_of_two());
    assert!(DEFAULTALIGN.is_multiple_of(align));
}

#[test]
fn test_alloc_aligned() {
    for n in [0, 1, 15, 16, 17, 1000] {
        let buf: AlignedBuf<Sc16> = alloc_aligned(n);
        assert_eq!(buf.len(), n);
        assert!(is_aligned(buf.as_ptr()));
        assert!(buf.iter().all(|x| *x == Sc16::ZERO));
    }
}

#[test]
fn test_cast_roundtrip_bytes() {
    let samples: AlignedBuf<Fc32> = AlignedBuf::from_slice(&[Complex::new(1.0, -2.0), Complex::new(0.5, 4.0)]);
    let bytes: &[u8] = cast::<Fc32, u8>(&samples);
    assert_eq!(bytes.len(), 2 * SampleKind::Fc32.size());
    let back: &[Fc32] = cast::<u8, Fc32>(bytes);
    assert_eq!(back, &samples[..]);

    let mut raw: AlignedBuf<i32> = alloc_aligned(4);
    let view: &mut [i16] = cast_mut::<i32, i16>(&mut raw);
    assert_eq!(view.len(), 8);
}

#[test]
#[should_panic]
fn test_cast_rejects_partial_sample() {
    let raw: AlignedBuf<i8> = alloc_aligned(3);
    let _: &[i16] = cast::<i8, i16>(&raw);
}

#[test]
#[should_panic]
fn test_cast_rejects_misaligned_bytes() {
    let raw: AlignedBuf<i32> = alloc_aligned(4);
    let bytes: &[u8] = cast::<i32, u8>(&raw);
    let _: &[i32] = cast::<u8, i32>(&bytes[1..5]);
}

#[test]
fn test_sample_kind_sizes() {
    assert_eq!(SampleKind::Fc32.size(), size_of::<Fc32>());
    assert_eq!(SampleKind::F32.size(), size_of::<f32>());
    assert_eq!(SampleKind::Sc32.size(), size_of::<Sc32>());
    assert_eq!(SampleKind::Sc16.size(), size_of::<Sc16>());
    assert_eq!(SampleKind::Sc8.size(), size_of::<Sc8>());
    assert_eq!(SampleKind::S32.size(), size_of::<i32>());
    assert_eq!(SampleKind::S16.size(), size_of::<i16>());
    assert_eq!(SampleKind::S8.size(), size_of::<i8>());
    assert_eq!(SampleKind::ALL.iter().filter(|k| k.is_complex()).count(), 4);
}

#[test]
fn test_narrowing_policy() {
    // truncation toward zero
    assert_eq!(i16::from_complex64(Complex::new(2.9, 7.0)), 2);
    assert_eq!(i16::from_complex64(Complex::new(-2.9, 0.0)), -2);
    // saturation
    assert_eq!(i8::from_complex64(Complex::new(300.0, 0.0)), i8::MAX);
    assert_eq!(i8::from_complex64(Complex::new(-300.0, 0.0)), i8::MIN);
    assert_eq!(i32::from_complex64(Complex::new(f64::NAN, 0.0)), 0);
    // component-wise for complex integers
    assert_eq!(Sc8::from_complex64(Complex::new(1.5, -1.5)), Complex::new(1, -1));
    // real types drop the imaginary part
    assert_eq!(f32::from_complex64(Complex::new(0.5, 9.0)), 0.5);
    assert_eq!(f32::from_complex64(Complex::new(1e300, 0.0)), f32::INFINITY);
    assert_eq!(Fc32::from_complex64(Complex::new(0.5, 9.0)), Complex::new(0.5, 9.0));
}

#[test]
fn test_widening_is_lossless() {
    let mut source: Source = Source::new([4u8; 32]);
    for _ in 0..256 {
        let x: Sc32 = Sc32::draw(&mut source);
        let wide: Complex64 = x.to_complex64();
        assert_eq!(Sc32::from_complex64(wide), x);

        let y: f32 = f32::draw(&mut source);
        assert_eq!(f32::from_complex64(y.to_complex64()), y);
    }
}
