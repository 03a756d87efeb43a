// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use sightline_window::{ScrollAlign, WindowConfig, WindowedList, compute_visible_range};

const ROW_COUNTS: [usize; 3] = [1_000, 100_000, 10_000_000];

fn config() -> WindowConfig<f64> {
    WindowConfig::new(24.0, 800.0).unwrap()
}

fn bench_compute_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightline_window/compute_visible_range");
    let config = config();
    for &rows in &ROW_COUNTS {
        let max = config.max_scroll_offset(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 37.5) % (max + 1.0);
                black_box(compute_visible_range(&config, black_box(offset), rows));
            });
        });
    }
    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightline_window/scroll_sweep");
    for &rows in &ROW_COUNTS {
        // One pixel per event, across the first 10k pixels.
        let events = 10_000_u64;
        group.throughput(Throughput::Elements(events));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut list = WindowedList::with_row_count(config(), rows);
                let mut changes = 0_usize;
                for px in 0..events {
                    if list.on_scroll(px as f64) {
                        changes += 1;
                    }
                }
                black_box(changes)
            });
        });
    }
    group.finish();
}

fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightline_window/materialize");
    let rows: Vec<u64> = (0..100_000).collect();
    let mut list = WindowedList::with_row_count(config(), rows.len());
    list.scroll_to_index(50_000, ScrollAlign::Center);
    group.bench_function("center_of_100k", |b| {
        b.iter(|| black_box(list.materialize(rows.as_slice(), |id| *id).len()));
    });
    group.finish();
}

fn bench_tail_follow(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightline_window/append_rows");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("follow_10k_appends", |b| {
        b.iter(|| {
            let mut list = WindowedList::new(config());
            for rows in 1..=10_000 {
                list.append_rows(rows);
            }
            black_box(list.range())
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_range,
    bench_scroll_sweep,
    bench_materialize,
    bench_tail_follow
);
criterion_main!(benches);
