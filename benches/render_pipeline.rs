use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_explorer::{
    ExplorerConfig, ExplorerController, FractalGenerator, Mandelbrot, Resolution,
    generate_fractal_parallel_rayon, generate_fractal_serial,
};

fn raster_pass(c: &mut Criterion) {
    let fractal = Mandelbrot::new(256).expect("valid iteration cap");
    let range = fractal.initial_range();
    let mut group = c.benchmark_group("raster_pass");

    for size in [100u32, 200] {
        let resolution = Resolution::new(size).expect("non-zero size");

        group.bench_with_input(BenchmarkId::new("serial", size), &resolution, |b, &res| {
            b.iter(|| generate_fractal_serial(black_box(&fractal), range, res))
        });
        group.bench_with_input(BenchmarkId::new("rayon", size), &resolution, |b, &res| {
            b.iter(|| generate_fractal_parallel_rayon(black_box(&fractal), range, res))
        });
    }

    group.finish();
}

fn full_render(c: &mut Criterion) {
    let config = ExplorerConfig {
        display_size: 200,
        ..ExplorerConfig::default()
    };
    let fractal = config.mandelbrot.build_fractal().expect("valid config");
    let controller = ExplorerController::new(fractal, &config).expect("valid config");

    c.bench_function("render_initial_view_200", |b| {
        b.iter(|| controller.render().expect("render succeeds"))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = raster_pass, full_render
}
criterion_main!(benches);
