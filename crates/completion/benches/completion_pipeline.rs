//! Completion pipeline benchmarks
//!
//! Measures the hot path pieces in isolation (chain extraction, alias
//! harvesting) and the flat fallback through a full engine.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sqlhint_completion::{
    AliasMap, CompletionEngine, CompletionRequest, Position, chain_before_cursor,
};
use sqlhint_schema::SchemaFetcher;
use sqlhint_test_utils::{MockSchemaFetcherBuilder, standard_local_schema};

fn bench_chain_extraction(c: &mut Criterion) {
    let line = "SELECT o.id, o.total, c.name FROM orders o JOIN customers AS c ON o.customer_id = c.";
    let column = line.chars().count();

    c.bench_function("completion/chain_extraction", |b| {
        b.iter(|| {
            let chain = chain_before_cursor(black_box(line), black_box(column));
            black_box(chain);
        });
    });
}

fn bench_alias_extraction(c: &mut Criterion) {
    let statements = [
        ("simple", "SELECT id, name FROM users WHERE active = TRUE"),
        (
            "medium",
            "SELECT u.id, u.name, o.total FROM users u JOIN orders o ON u.id = o.user_id",
        ),
    ];

    for (complexity, statement) in statements {
        let mut group = c.benchmark_group(format!("completion/alias_extraction/{complexity}"));

        group.bench_function("extract", |b| {
            b.iter(|| {
                let aliases = AliasMap::extract(black_box(statement));
                black_box(aliases);
            });
        });

        group.finish();
    }
}

fn bench_flat_fallback(c: &mut Criterion) {
    let destination = Arc::new(
        MockSchemaFetcherBuilder::new()
            .with_standard_tables()
            .build(),
    );
    let source = Arc::new(MockSchemaFetcherBuilder::new().build());
    let engine = CompletionEngine::builder(
        standard_local_schema(),
        destination as Arc<dyn SchemaFetcher>,
        source as Arc<dyn SchemaFetcher>,
    )
    .with_destination_name("d1")
    .with_source_name("legacy")
    .build();

    let statement = "SELECT ";
    let request = CompletionRequest::new(
        statement,
        Position::new(0, statement.chars().count() as u32),
        "",
    );

    c.bench_function("completion/flat_fallback", |b| {
        b.iter(|| {
            let candidates = tokio_test::block_on(engine.complete(black_box(&request)));
            black_box(candidates);
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(50);
    targets =
        bench_chain_extraction,
        bench_alias_extraction,
        bench_flat_fallback
);

criterion_main!(benches);
