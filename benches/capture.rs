use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use framegrab::{encode_ppm, scene, ReadBack, RowOrder, SoftContext};
use std::time::Duration;

fn encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_ppm");

    for &[width, height] in &[[32usize, 32usize], [200, 200], [512, 512]] {
        let mut ctx = SoftContext::new([width, height]).with_clear_color(scene::CLEAR_COLOR);
        scene::render(&mut ctx);
        let pixels = ctx.read_pixels([width, height]);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &pixels,
            |b, pixels| {
                let mut out = Vec::new();
                b.iter(|| {
                    out.clear();
                    encode_ppm(pixels, [width, height], RowOrder::BottomUp, &mut out).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let mut ctx = scene::context();
    c.bench_function("render_triangle_512", |b| b.iter(|| scene::render(&mut ctx)));
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(1000));
    targets = encode_benchmark, render_benchmark
}

criterion_main!(benches);
