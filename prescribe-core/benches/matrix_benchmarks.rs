use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prescribe_core::{apply, build_matrix, extract, CostConfig};

fn generate_test_sequence(length: usize, pattern: &[u8]) -> Vec<u8> {
    let mut sequence = Vec::with_capacity(length);

    while sequence.len() < length {
        let remaining = length - sequence.len();
        let chunk_size = std::cmp::min(pattern.len(), remaining);
        sequence.extend_from_slice(&pattern[..chunk_size]);
    }

    sequence
}

fn bench_matrix_build(c: &mut Criterion) {
    let original = generate_test_sequence(1000, b"ATCGATCG");
    let target = generate_test_sequence(1000, b"ATCCGATG");
    let costs = CostConfig::default();

    c.bench_function("matrix_1k", |b| {
        b.iter(|| {
            let matrix = build_matrix(black_box(&original), black_box(&target), &costs);
            black_box(matrix)
        })
    });
}

fn bench_traceback(c: &mut Criterion) {
    let original = generate_test_sequence(1000, b"ATCGATCG");
    let target = generate_test_sequence(1000, b"ATCCGATG");
    let costs = CostConfig::default();
    let matrix = build_matrix(&original, &target, &costs).expect("build matrix");

    c.bench_function("traceback_1k", |b| {
        b.iter(|| black_box(extract(black_box(matrix.action_matrix()))))
    });
}

fn bench_replay(c: &mut Criterion) {
    let original = generate_test_sequence(1000, b"ATCGATCG");
    let target = generate_test_sequence(1000, b"ATCCGATG");
    let costs = CostConfig::default();
    let matrix = build_matrix(&original, &target, &costs).expect("build matrix");
    let prescription = extract(matrix.action_matrix()).expect("extract prescription");

    c.bench_function("replay_1k", |b| {
        b.iter(|| {
            let replay = apply(&prescription, &original, &target, &costs).expect("apply");
            black_box(replay.last())
        })
    });
}

criterion_group!(benches, bench_matrix_build, bench_traceback, bench_replay);
criterion_main!(benches);
