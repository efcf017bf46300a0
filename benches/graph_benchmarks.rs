use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use jaala::graph::GraphStore;

/// Benchmark node insertion throughput
fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = GraphStore::new();
                for i in 0..size {
                    store.add_node(i, format!("node{}", i)).unwrap();
                }
            });
        });
    }
    group.finish();
}

/// Benchmark edge insertion throughput (chain topology)
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100usize, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut store = GraphStore::with_capacity(size, size);
                    for i in 0..size as i64 {
                        store.add_node(i, i).unwrap();
                    }
                    store
                },
                |mut store| {
                    for i in 0..size as i64 - 1 {
                        store.add_edge(i, i + 1, format!("e{}", i)).unwrap();
                    }
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark identifier lookup latency
fn bench_id_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("id_lookup");

    let mut store = GraphStore::new();
    for i in 0..10_000 {
        store.add_node(i, format!("node{}", i)).unwrap();
    }

    group.bench_function("hit", |b| {
        b.iter(|| {
            let node = store.get_node("node5000");
            criterion::black_box(node.is_some());
        });
    });

    // A numeric spelling of a text identifier still has to canonicalize.
    group.bench_function("cross_form_miss", |b| {
        b.iter(|| {
            criterion::black_box(store.has_node(5000.5));
        });
    });

    group.finish();
}

/// Benchmark adjacency scans over the edge collection
fn bench_adjacency_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_scan");

    // Chain n0 -> n1 -> ... -> n999, plus a hub wired to every chain node
    let mut store = GraphStore::new();
    for i in 0..1000 {
        store.add_node((), format!("n{}", i)).unwrap();
    }
    for i in 0..999 {
        store
            .add_edge(format!("n{}", i), format!("n{}", i + 1), format!("c{}", i))
            .unwrap();
    }
    store.add_node((), "hub").unwrap();
    for i in 0..1000 {
        store
            .add_edge("hub", format!("n{}", i), format!("h{}", i))
            .unwrap();
    }

    group.bench_function("sparse_node", |b| {
        b.iter(|| {
            let succ = store.get_successors("n500");
            criterion::black_box(succ.len());
        });
    });

    group.bench_function("dense_node", |b| {
        b.iter(|| {
            let succ = store.get_successors("hub");
            criterion::black_box(succ.len());
        });
    });

    group.bench_function("incoming_edges", |b| {
        b.iter(|| {
            let edges = store.get_incoming_edges("n500");
            criterion::black_box(edges.len());
        });
    });

    group.finish();
}

/// Benchmark cascade removal of a highly connected node
fn bench_cascade_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade_removal");

    for size in [100usize, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut store = GraphStore::with_capacity(size + 1, size * 2);
                    store.add_node((), "hub").unwrap();
                    for i in 0..size {
                        store.add_node((), format!("s{}", i)).unwrap();
                        store
                            .add_edge("hub", format!("s{}", i), format!("out{}", i))
                            .unwrap();
                        store
                            .add_edge(format!("s{}", i), "hub", format!("in{}", i))
                            .unwrap();
                    }
                    store
                },
                |mut store| {
                    criterion::black_box(store.remove_node("hub"));
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_edge_insertion,
    bench_id_lookup,
    bench_adjacency_scan,
    bench_cascade_removal,
);
criterion_main!(benches);
