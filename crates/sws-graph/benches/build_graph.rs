use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sws_graph::StateGraph;

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("build_graph_5_balls_h12", |b| {
        b.iter(|| {
            let graph = StateGraph::with_balls(5, 12).unwrap();
            black_box(graph);
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
