//! Criterion benchmarks for the one-shot codec.
//!
//! Run with:
//!   cargo bench --bench codec
//!
//! Throughput is reported in uncompressed bytes for both directions, since
//! that is the quantity a host process cares about.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Synthetic text chunk with realistic redundancy.
fn sample_chunk(size: usize) -> Vec<u8> {
    let sentence = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. ";
    sentence.iter().cycle().take(size).copied().collect()
}

fn bench_oneshot_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("oneshot_codec");

    for &chunk_size in &[65_536usize, 262_144] {
        let chunk = sample_chunk(chunk_size);
        let bound = zlibr::compress_bound(chunk_size);
        let mut scratch = vec![0u8; zlibr::COMPRESS_SCRATCH_MIN];

        // ── compress ────────────────────────────────────────────────────────
        {
            let mut dst = vec![0u8; bound];
            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(
                BenchmarkId::new("compress", chunk_size),
                &chunk,
                |b, chunk| {
                    b.iter(|| zlibr::compress(chunk, &mut dst, &mut scratch).unwrap())
                },
            );
        }

        // ── decompress — pre-compress the chunk once, then benchmark ────────
        {
            let mut tmp = vec![0u8; bound];
            let n = zlibr::compress(&chunk, &mut tmp, &mut scratch).unwrap();
            let compressed = tmp[..n].to_vec();
            let mut dst = vec![0u8; chunk_size];

            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(
                BenchmarkId::new("decompress", chunk_size),
                &compressed,
                |b, compressed| {
                    b.iter(|| zlibr::decompress(compressed, &mut dst).unwrap())
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_oneshot_codec);
criterion_main!(benches);
