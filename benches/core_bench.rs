use automaton_editor::core::{automaton, runner};
use automaton_editor::{Graph, LayoutCache, LayoutMetrics, StateId, TokenId};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

/// Ring-Automat: q_i --a--> q_{i+1}, q_i --b--> q_i.
fn build_ring_graph(state_count: usize) -> Graph {
    let mut graph = Graph::new();
    let a = graph.add_token().id;
    let b = graph.add_token().id;
    graph.set_token_symbol(&a, "a");
    graph.set_token_symbol(&b, "b");

    let ids: Vec<StateId> = (0..state_count)
        .map(|i| {
            let column = (i % 100) as f32;
            let row = (i / 100) as f32;
            let label = graph.next_state_label();
            graph
                .add_state(label, Vec2::new(column * 120.0, row * 120.0))
                .id
        })
        .collect();
    graph.set_start(ids.first());
    if let Some(last) = ids.last() {
        graph.set_accept(last, true);
    }

    for (i, id) in ids.iter().enumerate() {
        let next = &ids[(i + 1) % ids.len()];
        add(&mut graph, id, next, &a);
        add(&mut graph, id, id, &b);
    }
    graph
}

fn add(graph: &mut Graph, source: &StateId, dest: &StateId, token: &TokenId) {
    graph.add_transition(source, dest, false, [token.clone()]);
}

fn bench_layout_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_refresh");

    for &state_count in &[100usize, 1_000usize] {
        let graph = build_ring_graph(state_count);

        group.bench_with_input(
            BenchmarkId::new("cold", state_count),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let mut cache = LayoutCache::new(LayoutMetrics::default());
                    black_box(cache.refresh(black_box(graph)))
                })
            },
        );

        let mut warm = LayoutCache::new(LayoutMetrics::default());
        warm.refresh(&graph);
        group.bench_with_input(
            BenchmarkId::new("warm", state_count),
            &graph,
            |b, graph| b.iter(|| black_box(warm.refresh(black_box(graph)))),
        );
    }

    group.finish();
}

fn bench_validate_and_run(c: &mut Criterion) {
    let graph = build_ring_graph(1_000);
    let dfa = automaton::project(&graph);
    let word = vec!["a".to_string(); 999];

    c.bench_function("project_1000_states", |b| {
        b.iter(|| black_box(automaton::project(black_box(&graph))))
    });

    c.bench_function("validate_1000_states", |b| {
        b.iter(|| black_box(automaton::validate(black_box(&dfa))))
    });

    c.bench_function("run_999_symbols", |b| {
        b.iter(|| black_box(runner::run(black_box(&dfa), word.iter().cloned())))
    });
}

criterion_group!(benches, bench_layout_refresh, bench_validate_and_run);
criterion_main!(benches);
