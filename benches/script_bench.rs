// Script classification alone: short texts, a long single-script text that
// exits early, and a mixed text that scans to the end.
//
// Run with `cargo bench --bench script`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use langscope::detect_script;

fn inputs() -> Vec<(&'static str, String)> {
    vec![
        ("latin_short", "Hello, world!".to_owned()),
        ("khmer_short", "ភាសាខ្មែរ".to_owned()),
        ("japanese_short", "支那の上海の或町です。".to_owned()),
        ("latin_long", "Where there is a will there is a way. ".repeat(64)),
        ("han_kana_tail", format!("{}ア", "漢字".repeat(512))),
        (
            "mixed_long",
            "Привет! Текст на русском with some English. ".repeat(64),
        ),
    ]
}

fn bench_script(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_script");
    for (name, text) in inputs() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| detect_script(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_script);
criterion_main!(benches);
