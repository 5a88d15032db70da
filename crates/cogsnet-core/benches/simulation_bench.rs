use cogsnet_core::{simulation, Event, ForgettingKind, NodeIndex, RunConfig, TimeUnit};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Round-robin event log: `node_count` participants, one event per minute.
fn synthetic_log(node_count: usize, event_count: usize) -> (Vec<Event>, NodeIndex) {
    let mut nodes = NodeIndex::new();
    for id in 0..node_count {
        nodes.intern(id as i64);
    }
    let events = (0..event_count)
        .map(|k| Event {
            source: k % node_count,
            target: (k + 1 + k / node_count) % node_count,
            timestamp: (k as i64) * 60,
        })
        .collect();
    (events, nodes)
}

fn bench_simulate(c: &mut Criterion) {
    let params = RunConfig {
        forgetting: ForgettingKind::Exponential,
        snapshot_interval: 6,
        edge_lifetime: 10,
        mu: 0.4,
        theta: 0.1,
        units: TimeUnit::Hours,
    }
    .resolve()
    .unwrap();

    let mut group = c.benchmark_group("simulate");
    for &(node_count, event_count) in &[(50usize, 2_000usize), (200, 10_000)] {
        let (events, nodes) = synthetic_log(node_count, event_count);
        group.bench_function(format!("{node_count}n_{event_count}e"), |b| {
            b.iter(|| {
                let snapshots =
                    simulation::simulate(black_box(&params), &events, &nodes).unwrap();
                black_box(snapshots)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
