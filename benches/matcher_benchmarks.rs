//! Benchmarks for trigger matching and suggestion queries.
//!
//! Covers the per-keystroke hot path: hit and miss windows of several sizes,
//! a run at the length cap, and an engine query over a larger dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use typeahead::engine::TypeaheadEngine;
use typeahead::matcher::{MatchConfig, TriggerMatcher};
use typeahead::source::{Candidate, StaticCandidateSource};

fn bench_find(c: &mut Criterion) {
    let matcher = TriggerMatcher::new(MatchConfig::new('{').with_min_length(0)).unwrap();

    let filler = "lorem ipsum dolor sit amet ".repeat(20);
    let cases: Vec<(&str, String)> = vec![
        ("short_hit", "hello {abc".to_string()),
        ("short_miss", "hello world".to_string()),
        ("long_hit", format!("{filler}{{query")),
        ("long_miss", filler.clone()),
        ("capped_run", format!("{{{}", "a".repeat(200))),
    ];

    let mut group = c.benchmark_group("trigger_find");
    for (name, text) in &cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| matcher.find(black_box(text)));
        });
    }
    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let matcher = TriggerMatcher::new(MatchConfig::new('{').with_min_length(0)).unwrap();
    let source = StaticCandidateSource::from_entries(
        (0..1000).map(|i| Candidate::new(format!("entry_{i:04}"))),
    );
    let engine = TypeaheadEngine::new(matcher, source);

    c.bench_function("engine_suggest_1000_entries", |b| {
        b.iter(|| engine.suggest(black_box("pick {entry_05")));
    });
}

criterion_group!(benches, bench_find, bench_suggest);
criterion_main!(benches);
