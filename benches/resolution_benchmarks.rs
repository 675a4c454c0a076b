use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docvet::report::{EntityRef, Violation, decode_outcome, resolve_path};

/// Build a violation whose location chain is `depth` blocks deep with a
/// data attribute at the innermost position.
fn deep_violation(depth: usize) -> Violation {
    let mut entity = vec![EntityRef::Data {
        name: "value".to_string(),
    }];

    for level in 0..depth {
        entity.push(EntityRef::Block {
            kind: "section".to_string(),
            index: level,
            block_type: (level % 2 == 0).then(|| "chapter".to_string()),
            rel: (level % 3 == 0).then(|| "self".to_string()),
        });
    }

    Violation {
        error: "missing required attribute".to_string(),
        entity,
        enforced_deprecation: false,
    }
}

fn bench_path_resolution(c: &mut Criterion) {
    let depths = vec![1, 4, 16, 64];

    let mut group = c.benchmark_group("path_resolution");

    for &depth in &depths {
        let violation = deep_violation(depth);

        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &violation, |b, violation| {
            b.iter(|| {
                let path = resolve_path(black_box(violation));
                black_box(path)
            })
        });
    }

    group.finish();
}

fn bench_result_decoding(c: &mut Criterion) {
    let sizes = vec![1, 10, 100, 1_000];

    let mut group = c.benchmark_group("result_decoding");

    for &size in &sizes {
        let violations: Vec<Violation> = (0..size).map(|i| deep_violation(i % 8)).collect();
        let payload = serde_json::to_vec(&violations).unwrap();

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("violations", size), &payload, |b, payload| {
            b.iter(|| {
                let outcome = decode_outcome(black_box(payload)).unwrap();
                black_box(outcome)
            })
        });
    }

    group.finish();
}

criterion_group!(resolution_benches, bench_path_resolution, bench_result_decoding);
criterion_main!(resolution_benches);
