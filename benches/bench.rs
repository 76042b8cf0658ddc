//! Criterion benchmarks for query construction.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pilum::prelude::*;

fn doc_collection() -> SolrCollection {
    let mut collection = SolrCollection::new("docs");
    collection.add_field("title", FieldKind::Text).unwrap();
    collection.add_field("author", FieldKind::Text).unwrap();
    collection.add_field("upvotes", FieldKind::Int).unwrap();
    collection
        .add_multi_valued_field("tags", FieldKind::Text)
        .unwrap();
    collection
}

fn bench_filter_composition(c: &mut Criterion) {
    let collection = doc_collection();
    let title = collection.field::<String>("title").unwrap();
    let upvotes = collection.field::<i32>("upvotes").unwrap();
    let tags = collection.field::<Vec<String>>("tags").unwrap();

    c.bench_function("filter_composition", |b| {
        b.iter(|| {
            let filter = title
                .eq("ghost ship")
                .and(&upvotes.greater_eq(100))
                .or(&tags.eq("chroma").not());
            black_box(filter.to_text())
        })
    });
}

fn bench_edismax_population(c: &mut Criterion) {
    let collection = doc_collection();
    let title = collection.field::<String>("title").unwrap();
    let author = collection.field::<String>("author").unwrap();
    let upvotes = collection.field::<i32>("upvotes").unwrap();

    c.bench_function("edismax_population", |b| {
        b.iter(|| {
            let mut query = ExtendedDisMaxQuery::new();
            query.set_boost_field(Some(&upvotes));
            query
                .set_query("ghost")
                .set_query_fields(&[(&title, 2.0), (&author, 1.0)])
                .set_tie(0.3)
                .set_minimum_match(&[&MinimumMatch::Percent(75)])
                .add_filter(&upvotes.greater_eq(100));
            black_box(query.into_params())
        })
    });
}

criterion_group!(benches, bench_filter_composition, bench_edismax_population);
criterion_main!(benches);
