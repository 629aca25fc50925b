//! Benchmarks for first-pass and incremental schema inference.
//!
//! Run with: cargo bench -p formweave-schema

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formweave_schema::{Schema, parse};
use serde_json::{Value, json};

/// Small input: a flat object with a few scalar fields.
fn small_input() -> Value {
    json!({
        "name": "Alice",
        "age": 30,
        "active": true,
    })
}

/// Medium input: nested objects and arrays of both scalars and objects.
fn medium_input() -> Value {
    json!({
        "name": "Alice",
        "email": "alice@example.com",
        "age": 30,
        "active": true,
        "profile": {
            "bio": "Software engineer",
            "location": "Tokyo",
            "website": "https://alice.dev",
        },
        "tags": ["rust", "typescript", "python"],
        "contacts": [
            { "type": "email", "value": "alice@work.com", "primary": true },
            { "type": "phone", "value": "+1-555-1234", "primary": false },
        ],
        "metadata": {
            "created_at": "2024-01-15",
            "updated_at": "2024-06-20",
            "version": 3,
        },
    })
}

/// Large input: many sibling keys, each holding an object array.
fn large_input() -> Value {
    let mut root = serde_json::Map::new();
    for i in 0..100 {
        root.insert(
            format!("section_{i}"),
            json!([
                {
                    "id": i,
                    "name": format!("Item {i}"),
                    "price": (i as f64) * 9.99,
                    "in_stock": i % 2 == 0,
                    "tags": ["tag-a", "tag-b", "tag-c"],
                },
            ]),
        );
    }
    Value::Object(root)
}

fn bench_first_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_pass");
    let empty = Schema::default();

    for (name, data) in [
        ("small", small_input()),
        ("medium", medium_input()),
        ("large", large_input()),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| parse(black_box(Some(data)), black_box(&empty)))
        });
    }

    group.finish();
}

fn bench_incremental_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_pass");

    for (name, data) in [
        ("small", small_input()),
        ("medium", medium_input()),
        ("large", large_input()),
    ] {
        let previous = parse(Some(&data), &Schema::default());

        // Unchanged data: every node takes the preserved path.
        group.bench_with_input(
            BenchmarkId::new("unchanged", name),
            &(data.clone(), previous.clone()),
            |b, (data, previous)| b.iter(|| parse(black_box(Some(data)), black_box(previous))),
        );

        // One added key: one fresh build, everything else preserved.
        let mut changed = data.clone();
        if let Value::Object(map) = &mut changed {
            map.insert("added_field".to_string(), json!("new"));
        }
        group.bench_with_input(
            BenchmarkId::new("one_added_key", name),
            &(changed, previous),
            |b, (data, previous)| b.iter(|| parse(black_box(Some(data)), black_box(previous))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_first_pass, bench_incremental_pass);
criterion_main!(benches);
