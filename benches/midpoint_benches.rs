use RustedMidpoint::numerical::integrands::BuiltinIntegrand;
use RustedMidpoint::numerical::midpoint::integrate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strum::IntoEnumIterator;

fn bench_integrands(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrands, n = 10000");
    for f in BuiltinIntegrand::iter() {
        group.bench_function(f.to_string(), |b| {
            b.iter(|| integrate(&f, black_box(0.0), black_box(1.0), black_box(10_000), 0))
        });
    }
    group.finish();
}

fn bench_intensity(c: &mut Criterion) {
    let mut group = c.benchmark_group("sine, n = 1000, by intensity");
    for intensity in [0, 10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(intensity),
            &intensity,
            |b, &intensity| {
                b.iter(|| {
                    integrate(
                        &BuiltinIntegrand::Sine,
                        black_box(0.0),
                        black_box(3.0),
                        black_box(1000),
                        intensity,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_integrands, bench_intensity);
criterion_main!(benches);
