use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use objwalk::{Emit, Object, TraversalOptions, Value, filter_by, map, partition};
use std::hint::black_box;

/// Builds a tree `depth` levels deep with `width` keys per level.
fn tree(depth: usize, width: usize) -> Object {
    (0..width)
        .map(|i| {
            let value = if depth == 0 || i % 2 == 0 {
                Value::from(i as i32)
            } else {
                Value::from(tree(depth - 1, width))
            };
            (format!("k{i}"), value)
        })
        .collect()
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_traversal");
    let options = TraversalOptions::new().deep();

    for (label, depth, width) in [("small", 2, 8), ("medium", 3, 12), ("wide", 2, 64)] {
        let input = Value::from(tree(depth, width));
        group.throughput(Throughput::Elements((width.pow(depth as u32)) as u64));

        group.bench_with_input(BenchmarkId::new("map_identity", label), &input, |b, v| {
            b.iter(|| map(black_box(v), &options, |k, v| Emit::pair(k, v.clone())).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("map_fragment", label), &input, |b, v| {
            b.iter(|| {
                map(black_box(v), &options, |k, _| {
                    std::iter::once(("seen", Value::Array(vec![Value::from(k)]))).collect::<Object>()
                })
                .unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("filter_defined", label), &input, |b, v| {
            b.iter(|| filter_by(black_box(v), &options, objwalk::is_defined).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("partition_even", label), &input, |b, v| {
            b.iter(|| {
                partition(black_box(v), &options, |e| {
                    e.value.as_f64().is_some_and(|n| n % 2.0 == 0.0)
                })
                .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversals);
criterion_main!(benches);
