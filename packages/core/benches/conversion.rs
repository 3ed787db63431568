//! Performance benchmarks for structured view conversion
//!
//! Run with: `cargo bench -p structview-core`
//!
//! These benchmarks measure the conversion paths:
//! - Construction from a wide, moderately nested document
//! - Conversion back to plain JSON
//! - Soft lookups through present and missing paths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value as JsonValue};
use structview_core::Node;

/// Generate a document with `records` entries, each a few levels deep
fn generate_document(records: usize) -> JsonValue {
    let items: Vec<JsonValue> = (0..records)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("record-{}", i),
                "tags": ["alpha", "beta", {"weight": i % 7}],
                "owner": {
                    "name": "John Doe",
                    "address": {"city": "Springfield", "zip": format!("{:05}", i)}
                }
            })
        })
        .collect();

    json!({ "meta": {"count": records}, "records": items })
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for records in [10usize, 100, 1000] {
        let document = generate_document(records);
        group.bench_with_input(BenchmarkId::from_parameter(records), &document, |b, doc| {
            b.iter(|| Node::from_value(black_box(doc.clone())).unwrap());
        });
    }

    group.finish();
}

fn bench_to_value(c: &mut Criterion) {
    let view = Node::from_value(generate_document(1000)).unwrap();

    c.bench_function("to_value_1000_records", |b| {
        b.iter(|| black_box(&view).to_value());
    });
}

fn bench_soft_access(c: &mut Criterion) {
    let view = Node::from_value(generate_document(100)).unwrap();

    c.bench_function("soft_access_hit", |b| {
        b.iter(|| black_box(&view)["records"][50]["owner"]["address"]["city"].as_str());
    });

    c.bench_function("soft_access_miss", |b| {
        b.iter(|| black_box(&view)["records"][500]["owner"]["address"]["city"].is_null());
    });
}

criterion_group!(benches, bench_construct, bench_to_value, bench_soft_access);
criterion_main!(benches);
