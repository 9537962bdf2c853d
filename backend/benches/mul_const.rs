use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mulconst_backend::{
    AlignedBuf, Fc32, Sample,
    accelerated::{mul_const_v_f32, mul_const_v_fc32, tile_constant, tile_len},
    alloc_aligned, fill_samples, machine,
    reference::mul_const_v_ref,
};
use sampling::Source;

fn bench_mul_const_v<T: Sample>(c: &mut Criterion, label: &str, accelerated: fn(&mut [T], &[T], &[T])) {
    let group_name: String = format!("mul_const_v::{}::{}", T::KIND, label);

    let mut group = c.benchmark_group(group_name);

    fn runner<T: Sample>(params: [usize; 2], kernel: fn(&mut [T], &[T], &[T]), tiled: bool) -> impl FnMut() {
        let n: usize = params[0] * params[1];

        let mut source: Source = Source::new([0u8; 32]);

        let mut cst: Vec<T> = vec![T::ZERO; params[1]];
        fill_samples(&mut cst, &mut source);

        if tiled {
            let mut tile: Vec<T> = vec![T::ZERO; tile_len::<T>(params[1])];
            tile_constant(&mut tile, &cst);
            cst = tile;
        }

        let mut a: AlignedBuf<T> = alloc_aligned(n);
        fill_samples(&mut a, &mut source);

        let mut res: AlignedBuf<T> = alloc_aligned(n);

        move || {
            kernel(&mut res, &a, &cst);
            black_box(());
        }
    }

    for params in [[1 << 10, 1], [1 << 14, 1], [1 << 13, 2], [1 << 12, 4], [1 << 12, 7]] {
        let id: String = format!("{}x{}", params[0], params[1]);

        let mut run_ref = runner::<T>(params, mul_const_v_ref::<T>, false);
        group.bench_with_input(BenchmarkId::new("ref", &id), &(), |b, _| b.iter(&mut run_ref));

        let mut run_test = runner::<T>(params, accelerated, true);
        group.bench_with_input(BenchmarkId::new(machine().name(), &id), &(), |b, _| b.iter(&mut run_test));
    }

    group.finish();
}

fn bench_mul_const_v_f32(c: &mut Criterion) {
    bench_mul_const_v::<f32>(c, "accelerated", mul_const_v_f32);
}

fn bench_mul_const_v_fc32(c: &mut Criterion) {
    bench_mul_const_v::<Fc32>(c, "accelerated", mul_const_v_fc32);
}

criterion_group!(benches, bench_mul_const_v_f32, bench_mul_const_v_fc32);
criterion_main!(benches);
