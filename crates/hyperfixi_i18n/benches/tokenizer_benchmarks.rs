//! Benchmarks for the multilingual tokenizer.
//!
//! Run with: `cargo bench --package hyperfixi_i18n`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hyperfixi_i18n::{LanguageRegistry, Tokenizer};

// =============================================================================
// Tokenizer Benchmarks
// =============================================================================

fn bench_tokenizer(c: &mut Criterion) {
    let registry = LanguageRegistry::with_builtin();
    let mut group = c.benchmark_group("tokenizer");

    let cases = [
        ("en", "on click toggle .active on #button"),
        ("es", "en clic alternar .activo en #boton"),
        ("ja", "クリックで.activeを切り替え"),
        ("ko", "클릭 시 .active를 토글"),
        ("tr", "tıklama üzerine .active'i değiştir"),
        ("ar", "عند النقر بدّل .active"),
    ];

    for (code, source) in cases {
        let Ok(language) = registry.get(code) else {
            continue;
        };
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("handler", code), source, |b, s| {
            b.iter(|| Tokenizer::tokenize(black_box(s), language));
        });
    }

    let long = "on click\n  add .loading to me\n  fetch /api/items as json\n  put it into #list\n  remove .loading from me\n  wait 300ms\n  log 'done'\nend";
    if let Ok(en) = registry.get("en") {
        group.throughput(Throughput::Bytes(long.len() as u64));
        group.bench_with_input(BenchmarkId::new("multiline", long.len()), long, |b, s| {
            b.iter(|| Tokenizer::tokenize(black_box(s), en));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenizer);
criterion_main!(benches);
