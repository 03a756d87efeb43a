// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use sightline_inspector::{
    Command, CommandType, Timeline, TimelineFilter, TimelineTab, network_requests,
};
use sightline_window::WindowConfig;

fn session(len: u64) -> Vec<Command> {
    (0..len)
        .map(|id| {
            let (command_type, payload) = match id % 4 {
                0 => (
                    CommandType::ApiResponse,
                    json!({"request": {"url": format!("https://api.test/items/{id}")},
                           "response": {"status": 200}}),
                ),
                1 => (CommandType::Log, json!({"level": "warn", "message": format!("slow {id}")})),
                2 => (CommandType::StateActionComplete, json!({"name": "TICK"})),
                _ => (CommandType::Log, json!({"message": format!("line {id}")})),
            };
            Command {
                message_id: id,
                command_type,
                date_ms: 1_700_000_000_000 + id,
                payload,
            }
        })
        .collect()
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightline_inspector/timeline");
    group.sample_size(30);
    let commands = session(20_000);
    let config = WindowConfig::new(32.0, 720.0).unwrap();

    group.bench_function("refresh_all(20k)", |b| {
        b.iter_batched(
            || Timeline::new(config),
            |mut timeline| black_box(timeline.refresh(&commands).len()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("refresh_logs_search(20k)", |b| {
        b.iter_batched(
            || {
                let mut timeline = Timeline::new(config);
                timeline.set_filter(
                    TimelineFilter::default()
                        .with_tab(TimelineTab::Logs)
                        .with_search("SLOW 19"),
                );
                timeline
            },
            |mut timeline| black_box(timeline.refresh(&commands).len()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("network_requests(20k)", |b| {
        b.iter(|| black_box(network_requests(&commands).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_timeline);
criterion_main!(benches);
