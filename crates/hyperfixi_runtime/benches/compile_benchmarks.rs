//! Benchmarks for end-to-end compilation.
//!
//! Run with: `cargo bench --package hyperfixi_runtime --bench compile_benchmarks`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hyperfixi_runtime::{AotCompiler, BatchCompiler, CompileOptions, ExtractedSnippet};

// =============================================================================
// Helper Functions
// =============================================================================

const SOURCES: &[(&str, &str)] = &[
    ("en", "on click toggle .active on #menu"),
    ("es", "en clic alternar .active"),
    ("ja", "クリック で .active を 切り替え"),
    ("ko", "클릭 시 .active를 토글"),
    ("ar", "عند النقر بدّل .active"),
];

fn snippets(n: usize) -> Vec<ExtractedSnippet> {
    (0..n)
        .map(|i| {
            ExtractedSnippet::new("hyperscript", "on click toggle .active then wait 1s")
                .at("bench.html", u32::try_from(i).unwrap_or(u32::MAX), 1)
        })
        .collect()
}

// =============================================================================
// Compile Benchmarks
// =============================================================================

fn bench_compile_by_language(c: &mut Criterion) {
    let compiler = AotCompiler::new();
    let mut group = c.benchmark_group("compile");

    for (language, source) in SOURCES {
        let options = CompileOptions::default().with_language(*language);
        group.bench_with_input(BenchmarkId::new("language", language), source, |b, source| {
            b.iter(|| compiler.compile_one(black_box(source), &options));
        });
    }

    let options = CompileOptions::default();
    group.bench_function("explicit", |b| {
        b.iter(|| compiler.compile_one(black_box("[toggle patient:.active destination:#menu]"), &options));
    });
    group.bench_function("regex_fallback", |b| {
        let options = CompileOptions::default().with_confidence_threshold(2.0);
        b.iter(|| compiler.compile_one(black_box("toggle .active on #menu"), &options));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let batch = BatchCompiler::new(CompileOptions::default());
    let mut group = c.benchmark_group("batch");

    for size in [10, 100] {
        let input = snippets(size);
        group.bench_with_input(BenchmarkId::new("snippets", size), &input, |b, input| {
            b.iter(|| batch.compile(black_box(input)));
        });
    }

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let compiler = AotCompiler::new();
    c.bench_function("translate/en_to_ja", |b| {
        b.iter(|| compiler.translate(black_box("toggle .active on #button"), "en", "ja"));
    });
}

criterion_group!(benches, bench_compile_by_language, bench_batch, bench_translate);
criterion_main!(benches);
