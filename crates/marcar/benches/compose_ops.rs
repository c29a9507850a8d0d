//! Composition Benchmarks
//!
//! Benchmarks for scope nesting, transformer pipelines, and identifier
//! composition.
//!
//! Run with: `cargo bench --bench compose_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marcar::{
    apply_pipeline, Boundary, CaseTransform, ConfigOverrides, Configuration, ScopeValue,
    TargetContent, Transformer,
};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let pipelines: Vec<(&str, Vec<Transformer>)> = vec![
        ("empty", vec![]),
        ("lowercase", vec![Transformer::Lowercase]),
        (
            "normalize",
            vec![Transformer::replace_spaces("_"), Transformer::Uppercase],
        ),
    ];

    for (name, pipeline) in pipelines {
        group.bench_with_input(BenchmarkId::from_parameter(name), &pipeline, |bench, p| {
            bench.iter(|| {
                let out = apply_pipeline(black_box("Submit Button!"), p);
                black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_scope_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_nesting");
    let config = Configuration::default();

    for depth in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bench, d| {
            bench.iter(|| {
                let mut scope = ScopeValue::root("app", &config);
                for _ in 1..*d {
                    scope = scope.nest("section", &config);
                }
                black_box(scope.join(&config.separator));
            });
        });
    }

    group.finish();
}

fn bench_leaf_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_boundary");

    let plain = Boundary::new().root_scope("app").nest_scope("form");
    let normalized = Boundary::with_config(
        &ConfigOverrides::new()
            .space_replacement("_")
            .case_transform(CaseTransform::Lower),
    )
    .root_scope("app");

    group.bench_function("plain", |bench| {
        bench.iter(|| {
            let outcome = plain
                .test_id(black_box("submit"), TargetContent::Single(()))
                .unwrap();
            black_box(outcome.assignment);
        });
    });

    group.bench_function("normalized", |bench| {
        bench.iter(|| {
            let outcome = normalized
                .test_id(black_box("Submit Button"), TargetContent::Single(()))
                .unwrap();
            black_box(outcome.assignment);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_scope_nesting, bench_leaf_boundary);
criterion_main!(benches);
