//! E2E Test Suite 01: One-Shot Round-Trip
//!
//! Validates the core codec contract:
//! - compress produces a complete zlib stream in one call
//! - decompress reconstructs the input bit-for-bit
//! - compress_bound is sufficient for any input
//! - output is deterministic for identical input
//! - empty input yields a small valid stream

extern crate zlibr;

use zlibr::{
    compress, compress_bound, decompress, COMPRESS_SCRATCH_MIN, ZLIB_MIN_STREAM_SIZE,
};

fn scratch() -> Vec<u8> {
    vec![0u8; COMPRESS_SCRATCH_MIN]
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: round-trip — typical compressible data
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_typical_data() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20);

    let mut compressed = vec![0u8; compress_bound(original.len())];
    let mut scratch = scratch();

    let n = compress(&original, &mut compressed, &mut scratch)
        .expect("compression should succeed");
    assert!(
        n < original.len(),
        "compressed size {} should be less than original {}",
        n,
        original.len()
    );

    let mut decompressed = vec![0u8; original.len()];
    let m = decompress(&compressed[..n], &mut decompressed)
        .expect("decompression should succeed");

    assert_eq!(m, original.len());
    assert_eq!(&decompressed[..m], &original[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: round-trip — incompressible data fits within compress_bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_incompressible_data() {
    // Cycling byte values compress poorly and may expand once framed.
    let original: Vec<u8> = (0u32..50_000).map(|i| (i.wrapping_mul(2654435761) >> 24) as u8).collect();

    let bound = compress_bound(original.len());
    let mut compressed = vec![0u8; bound];
    let mut scratch = scratch();

    let n = compress(&original, &mut compressed, &mut scratch)
        .expect("compression should succeed");
    assert!(n <= bound, "compressed size {n} should not exceed bound {bound}");

    let mut decompressed = vec![0u8; original.len()];
    let m = decompress(&compressed[..n], &mut decompressed)
        .expect("decompression should succeed");

    assert_eq!(m, original.len());
    assert_eq!(&decompressed[..m], &original[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: round-trip — input larger than the 32 KiB history window
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_larger_than_window() {
    let original = b"window-spanning payload with periodic structure 0123456789 "
        .repeat(4000); // ~236 KiB

    let mut compressed = vec![0u8; compress_bound(original.len())];
    let mut scratch = scratch();

    let n = compress(&original, &mut compressed, &mut scratch)
        .expect("compression should succeed");

    let mut decompressed = vec![0u8; original.len()];
    let m = decompress(&compressed[..n], &mut decompressed)
        .expect("decompression should succeed");

    assert_eq!(m, original.len());
    assert_eq!(&decompressed[..m], &original[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: highly repetitive data compresses well
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_repetitive_data_compresses_well() {
    let original = vec![b'A'; 5000];

    let mut compressed = vec![0u8; compress_bound(original.len())];
    let mut scratch = scratch();

    let n = compress(&original, &mut compressed, &mut scratch)
        .expect("compression should succeed");
    assert!(
        n < original.len() / 10,
        "highly repetitive data should compress to < 10% of original, got {n}"
    );

    let mut decompressed = vec![0u8; original.len()];
    let m = decompress(&compressed[..n], &mut decompressed)
        .expect("decompression should succeed");
    assert_eq!(m, original.len());
    assert!(decompressed.iter().all(|&b| b == b'A'));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: empty input round-trips through a small valid stream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_input_roundtrip() {
    let mut compressed = vec![0u8; 64];
    let mut scratch = scratch();

    let n = compress(&[], &mut compressed, &mut scratch)
        .expect("compressing empty input should succeed");
    assert!(
        (ZLIB_MIN_STREAM_SIZE..=16).contains(&n),
        "empty input should produce a small positive stream, got {n}"
    );

    // Zero-capacity output is enough for zero decoded bytes.
    let m = decompress(&compressed[..n], &mut [])
        .expect("decompressing empty stream into empty dst should succeed");
    assert_eq!(m, 0);

    // Oversized output also reports zero bytes produced.
    let mut dst = vec![0u8; 32];
    let m = decompress(&compressed[..n], &mut dst)
        .expect("decompressing empty stream into larger dst should succeed");
    assert_eq!(m, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: deterministic output — identical input, identical stream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compression_is_deterministic() {
    let original = b"determinism check: same bytes in, same bytes out".repeat(50);

    let mut first = vec![0u8; compress_bound(original.len())];
    let mut second = first.clone();
    let mut scratch = scratch();

    let n1 = compress(&original, &mut first, &mut scratch).expect("first call");
    // Fresh scratch for the second call; contents must not matter.
    let mut scratch2 = vec![0x5Au8; COMPRESS_SCRATCH_MIN];
    let n2 = compress(&original, &mut second, &mut scratch2).expect("second call");

    assert_eq!(n1, n2, "repeated compression must produce the same size");
    assert_eq!(&first[..n1], &second[..n2], "and byte-identical output");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: decompress leaves bytes past the decoded size untouched
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_does_not_write_past_decoded_size() {
    let original = b"bounded writes only".to_vec();

    let mut compressed = vec![0u8; compress_bound(original.len())];
    let mut scratch = scratch();
    let n = compress(&original, &mut compressed, &mut scratch).expect("compress");

    let mut dst = vec![0xAAu8; original.len() + 64];
    let m = decompress(&compressed[..n], &mut dst).expect("decompress");

    assert_eq!(m, original.len());
    assert_eq!(&dst[..m], &original[..]);
    assert!(
        dst[m..].iter().all(|&b| b == 0xAA),
        "bytes past the decoded size must keep their sentinel value"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 8: single-byte inputs round-trip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_single_byte_inputs_roundtrip() {
    let mut scratch = scratch();
    for byte in [0u8, 1, 0x7F, 0xFF] {
        let original = [byte];
        let mut compressed = vec![0u8; compress_bound(1)];
        let n = compress(&original, &mut compressed, &mut scratch)
            .expect("compressing one byte should succeed");

        let mut dst = [0u8; 1];
        let m = decompress(&compressed[..n], &mut dst)
            .expect("decompressing one byte should succeed");
        assert_eq!(m, 1);
        assert_eq!(dst[0], byte);
    }
}
