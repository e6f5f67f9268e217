use crate::benchmarks::bench_name;
use criterion::{black_box, criterion_group, Criterion, Throughput};
use natten_core::{AxisParams, Window};

fn run(length: usize, axis: &AxisParams) -> usize {
    (0..length).map(|i| Window::new(i, length, axis).len()).sum()
}

fn run_window_benchmark(c: &mut Criterion, axis: AxisParams, name: &str) {
    let length = 1 << 16;
    let mut group = c.benchmark_group(bench_name(name));
    group.throughput(Throughput::Elements(length as u64));
    group.bench_function("iter", |b| b.iter(|| run(black_box(length), black_box(&axis))));
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    run_window_benchmark(c, AxisParams::new(7), "window");
    run_window_benchmark(c, AxisParams::new(7).with_dilation(4), "window_dilated");
    run_window_benchmark(c, AxisParams::new(7).causal(true), "window_causal");
}

criterion_group!(benches, criterion_benchmark);
