use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mandelbrot_complex::Complex;

fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.squared_modulus() > 4.0 {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

fn arithmetic_benchmarks(c: &mut Criterion) {
    let a = Complex::new(-0.743_643_887, 0.131_825_904);
    let b = Complex::new(1.5, -2.25);

    c.bench_function("multiply", |bench| {
        bench.iter(|| black_box(a).multiply(black_box(b)))
    });

    c.bench_function("divide", |bench| {
        bench.iter(|| black_box(a).divide(black_box(b)))
    });

    c.bench_function("pow_16", |bench| bench.iter(|| black_box(a).pow(16)));

    c.bench_function("rotation", |bench| {
        bench.iter(|| Complex::rotation(black_box(0.785_398_163)))
    });
}

fn escape_time_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_time");

    for max_iterations in [64, 256, 1024] {
        group.bench_function(format!("seahorse_valley_{}", max_iterations), |bench| {
            bench.iter(|| {
                escape_time(
                    black_box(Complex::new(-0.743_643_887, 0.131_825_904)),
                    max_iterations,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, arithmetic_benchmarks, escape_time_benchmarks);
criterion_main!(benches);
