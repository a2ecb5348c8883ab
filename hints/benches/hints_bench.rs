use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pool_hints::{find_hints, find_move_hints};
use pool_types::{Stake, Transcoder, TranscoderAddress};

fn address(i: usize) -> TranscoderAddress {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
    TranscoderAddress::new(bytes)
}

fn make_pool(n: usize) -> Vec<Transcoder> {
    (0..n)
        .map(|i| Transcoder::new(address(i), ((n - i) as u128) * 1_000))
        .collect()
}

fn bench_find_hints(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_hints");

    for pool_size in [10, 100, 1000] {
        let pool = make_pool(pool_size);
        let tail = address(pool_size - 1);

        group.bench_with_input(BenchmarkId::new("tail", pool_size), &pool_size, |b, _| {
            b.iter(|| black_box(find_hints(black_box(&tail), black_box(&pool))));
        });
    }

    group.finish();
}

fn bench_find_move_hints(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_move_hints");

    for pool_size in [10, 100, 1000] {
        let pool = make_pool(pool_size);
        let tail = address(pool_size - 1);
        let head = address(0);
        // Enough to carry the tail all the way to the front.
        let delta = Stake::new(pool_size as u128 * 1_000);

        group.bench_with_input(
            BenchmarkId::new("tail_to_head", pool_size),
            &pool_size,
            |b, _| {
                b.iter(|| {
                    black_box(find_move_hints(
                        Some(black_box(&head)),
                        Some(black_box(&tail)),
                        black_box(delta),
                        black_box(&pool),
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_hints, bench_find_move_hints);
criterion_main!(benches);
