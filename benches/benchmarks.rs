//! Benchmarks for seriespod
//!
//! Run with: cargo bench

use std::hint::black_box;

use chrono::{DateTime, TimeDelta};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use seriespod::clock::ManualClock;
use seriespod::SeriesPod;

fn bench_series_pod(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_pod");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut pod = SeriesPod::new("bench");
        let mut i = 0u64;
        b.iter(|| {
            pod.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    // Manual clock isolates the accumulator from the cost of reading the
    // system clock
    group.bench_function("add_manual_clock", |b| {
        let clock = ManualClock::starting_at(DateTime::from_timestamp(0, 0).unwrap());
        let mut pod = SeriesPod::with_clock("bench", clock.clone());
        let mut i = 0u64;
        b.iter(|| {
            clock.advance(TimeDelta::nanoseconds(1));
            pod.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut pod = SeriesPod::new("bench");
        for i in 0..100_000u64 {
            pod.add(i as f64);
        }
        b.iter(|| {
            black_box(pod.mean());
            black_box(pod.min());
            black_box(pod.max());
            black_box(pod.range());
            black_box(pod.midrange());
            black_box(pod.duration_secs());
        });
    });

    group.bench_function("render", |b| {
        let mut pod = SeriesPod::new("bench");
        for i in 0..1_000u64 {
            pod.add(i as f64);
        }
        b.iter(|| black_box(pod.to_string()));
    });

    group.finish();
}

criterion_group!(benches, bench_series_pod);
criterion_main!(benches);
