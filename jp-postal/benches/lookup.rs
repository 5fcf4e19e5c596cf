//! 郵便番号検索のベンチマーク
//!
//! チャンクが未展開の状態（コールド）と、展開済みの状態（ウォーム）の両方で
//! 検索速度を計測します。

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use jp_postal::chunk::decode_chunk;
use jp_postal::{ChunkSource, EmbeddedChunks, PostalLookup, normalize_postal_code};

const CODES: &[&str] = &[
    "1500001",
    "150-0001",
    "〒０６０－８６２１",
    "100-8691",
    "5300001",
    "9000006",
    "0000000",
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(CODES.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| {
            for code in CODES {
                black_box(normalize_postal_code(black_box(code)));
            }
        })
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(CODES.len() as u64));

    group.bench_function("cold", |b| {
        b.iter_batched(
            PostalLookup::embedded,
            |lookup| {
                for code in CODES {
                    black_box(lookup.get(black_box(code)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    let warm = PostalLookup::embedded();
    for code in CODES {
        warm.get(code);
    }
    group.bench_function("warm", |b| {
        b.iter(|| {
            for code in CODES {
                black_box(warm.get(black_box(code)));
            }
        })
    });
    group.finish();
}

fn bench_decode_chunk(c: &mut Criterion) {
    let chunks = EmbeddedChunks::bundled();
    let Some(encoded) = chunks.encoded_chunk("150") else {
        return;
    };
    let mut group = c.benchmark_group("decode_chunk");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("150", |b| b.iter(|| decode_chunk(black_box(encoded))));
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_lookup, bench_decode_chunk);
criterion_main!(benches);
