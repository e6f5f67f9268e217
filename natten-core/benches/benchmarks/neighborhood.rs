use crate::benchmarks::{bench_name, random_inputs};
use criterion::{black_box, criterion_group, Criterion, Throughput};
use half::{bf16, f16};
use natten_core::{
    neighborhood_neighborhood_3d, AxisParams, Layout, ParamsNeighborhood3D, Pass, WithDType,
};

fn run<T: WithDType>(
    weights: &[T],
    weights_l: &Layout,
    values: &[T],
    dst: &mut [T],
    params: &ParamsNeighborhood3D,
) {
    neighborhood_neighborhood_3d(weights, weights_l, values, dst, params, Pass::AttentionValue)
        .unwrap();
}

fn run_neighborhood_benchmark<T: WithDType>(
    c: &mut Criterion,
    params: &ParamsNeighborhood3D,
    name: &str,
) {
    let (weights, values) = random_inputs::<T>(params);
    let weights_l = Layout::contiguous(params.weights_dims());
    let mut dst = vec![T::zero(); params.out_elem_count()];

    let flops = 2 * params.out_elem_count() * params.window_volume();

    let mut group = c.benchmark_group(bench_name(name));
    group.throughput(Throughput::Elements(flops as u64));
    group.bench_function("iter", |b| {
        b.iter(|| run(black_box(&weights), &weights_l, black_box(&values), &mut dst, params))
    });
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    let axis = AxisParams::new(7);
    let params_1d = ParamsNeighborhood3D::new_1d(2, 8, 4096, 64, AxisParams::new(13));
    let params_2d = ParamsNeighborhood3D::new_2d(1, 4, 56, 56, 32, [axis.with_dilation(2), axis]);
    let params_3d = ParamsNeighborhood3D::new(1, 4, 16, 16, 16, 32, [AxisParams::new(3), axis, axis]);
    let params_causal = ParamsNeighborhood3D::new(
        1,
        4,
        16,
        16,
        16,
        32,
        [AxisParams::new(3).causal(true), axis, axis],
    );

    run_neighborhood_benchmark::<f32>(c, &params_1d, "na1d_f32");
    run_neighborhood_benchmark::<f32>(c, &params_2d, "na2d_f32");
    run_neighborhood_benchmark::<f32>(c, &params_3d, "na3d_f32");
    run_neighborhood_benchmark::<f32>(c, &params_causal, "na3d_causal_f32");
    run_neighborhood_benchmark::<f64>(c, &params_3d, "na3d_f64");
    run_neighborhood_benchmark::<f16>(c, &params_3d, "na3d_f16");
    run_neighborhood_benchmark::<bf16>(c, &params_3d, "na3d_bf16");
}

criterion_group!(benches, criterion_benchmark);
