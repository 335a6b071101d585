// Full detection across the scripts that go through trigram scoring, plus
// the single-language shortcut for comparison.
//
// Run with `cargo bench --bench detect`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use langscope::{Detector, ENG, FRA, Lang, Options, detect, detect_with_options};

const SAMPLES: &[(&str, &str)] = &[
    ("eng", "Where there is a will there is a way"),
    ("fra", "Vouloir, c'est pouvoir"),
    ("deu", "Der Hund schläft unter dem Tisch, weil es draußen regnet und kalt ist."),
    ("ukr", "Та нічого, все нормально. А в тебе як?"),
    ("hin", "मुझे हर शाम किताबें पढ़ना बहुत अच्छा लगता है।"),
    ("heb", "אני אוהב לקרוא ספרים בערב כשיורד גשם בחוץ"),
    ("pes", "من دوست دارم شب\u{200c}ها کتاب بخوانم وقتی باران می\u{200c}بارد"),
    ("cmn", "人人生而自由，在尊严和权利上一律平等。"),
];

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for &(name, text) in SAMPLES {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| detect(black_box(text)))
        });
    }
    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let text = SAMPLES[0].1;
    let two: [Lang; 2] = [ENG, FRA];
    let mut group = c.benchmark_group("filters");
    group.bench_function("none", |b| {
        b.iter(|| detect_with_options(black_box(text), &Options::default()))
    });
    let opts = Options::new().with_whitelist(two);
    group.bench_function("whitelist_2", |b| {
        b.iter(|| detect_with_options(black_box(text), &opts))
    });
    let opts = Options::new().deny(FRA);
    group.bench_function("blacklist_1", |b| {
        b.iter(|| detect_with_options(black_box(text), &opts))
    });
    let composing = Detector::builder().compose_input(true).build();
    group.bench_function("compose_input", |b| {
        b.iter(|| composing.detect(black_box(text)))
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(2))
        .warm_up_time(std::time::Duration::from_secs(1))
        .noise_threshold(0.02);
    targets = bench_detect, bench_filters
);
criterion_main!(benches);
