//! E2E Test Suite 02: Error Handling
//!
//! Exercises every modeled failure:
//! - output capacity exhausted on either path (exact-fit boundary included)
//! - undersized scratch rejected up front
//! - corrupted header, corrupted trailer, truncated input, trailing garbage

extern crate zlibr;

use zlibr::{
    compress, compress_bound, decompress, CompressError, DecompressError, COMPRESS_SCRATCH_MIN,
};

fn scratch() -> Vec<u8> {
    vec![0u8; COMPRESS_SCRATCH_MIN]
}

/// Compress `data` into a right-sized Vec, panicking on failure.
fn compress_to_vec(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; compress_bound(data.len())];
    let mut scratch = scratch();
    let n = compress(data, &mut out, &mut scratch).expect("compression should succeed");
    out.truncate(n);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: exact-fit compression — dst of exactly N succeeds, N-1 fails
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compress_exact_fit_boundary() {
    let original = b"exact fit boundary check, mildly compressible text ".repeat(8);
    let stream = compress_to_vec(&original);
    let n = stream.len();
    let mut scratch = scratch();

    // Exactly N: succeeds and reproduces the same stream.
    let mut exact = vec![0u8; n];
    assert_eq!(compress(&original, &mut exact, &mut scratch), Ok(n));
    assert_eq!(exact, stream);

    // N-1: fails with the capacity error and never writes past the slice.
    let mut short = vec![0u8; n - 1];
    assert_eq!(
        compress(&original, &mut short, &mut scratch),
        Err(CompressError::DstTooSmall)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: compression into a far-too-small buffer fails
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compress_tiny_dst_fails() {
    let original: Vec<u8> = (0u32..20_000).map(|i| (i * 31 % 251) as u8).collect();
    let mut scratch = scratch();

    for cap in [0usize, 1, 7, 16, 64] {
        let mut dst = vec![0u8; cap];
        assert_eq!(
            compress(&original, &mut dst, &mut scratch),
            Err(CompressError::DstTooSmall),
            "capacity {cap} must be rejected"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: undersized scratch is rejected before any work happens
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compress_scratch_too_small() {
    let mut dst = vec![0u8; 256];
    for len in [0usize, 1, COMPRESS_SCRATCH_MIN - 1] {
        let mut scratch = vec![0u8; len];
        assert_eq!(
            compress(b"payload", &mut dst, &mut scratch),
            Err(CompressError::ScratchTooSmall),
            "scratch of {len} bytes must be rejected"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: corrupted trailer — last byte flipped fails the checksum
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_corrupted_trailer() {
    let original = b"checksummed payload".repeat(10);
    let mut stream = compress_to_vec(&original);
    *stream.last_mut().unwrap() ^= 0x01;

    let mut dst = vec![0u8; original.len()];
    assert_eq!(
        decompress(&stream, &mut dst),
        Err(DecompressError::Corrupt)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: corrupted header — invalid CMF/FLG pair
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_corrupted_header() {
    let original = b"header check".repeat(4);
    let mut stream = compress_to_vec(&original);
    stream[0] ^= 0xFF;

    let mut dst = vec![0u8; original.len()];
    assert_eq!(
        decompress(&stream, &mut dst),
        Err(DecompressError::Corrupt)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: truncated input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_truncated_input() {
    let original = b"truncation target, long enough to matter ".repeat(40);
    let stream = compress_to_vec(&original);
    let mut dst = vec![0u8; original.len()];

    // Missing trailer.
    let cut = &stream[..stream.len() - 4];
    assert_eq!(
        decompress(cut, &mut dst),
        Err(DecompressError::Truncated)
    );

    // Missing only the last trailer byte. The payload decodes in full and
    // fills a correctly-sized dst exactly, which must still be reported as
    // truncation, not as an output-capacity failure.
    let cut = &stream[..stream.len() - 1];
    assert_eq!(
        decompress(cut, &mut dst),
        Err(DecompressError::Truncated)
    );

    // Missing most of the payload.
    let cut = &stream[..stream.len() / 2];
    assert!(decompress(cut, &mut dst).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: trailing garbage after a complete stream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_trailing_garbage() {
    let original = b"complete stream".repeat(6);
    let mut stream = compress_to_vec(&original);
    stream.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let mut dst = vec![0u8; original.len()];
    assert_eq!(
        decompress(&stream, &mut dst),
        Err(DecompressError::TrailingData)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 8: decompression output capacity exhausted mid-stream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_dst_too_small() {
    let original = b"0123456789".repeat(100); // 1000 bytes
    let stream = compress_to_vec(&original);

    for cap in [0usize, 1, 10, original.len() - 1] {
        let mut dst = vec![0u8; cap];
        assert_eq!(
            decompress(&stream, &mut dst),
            Err(DecompressError::DstTooSmall),
            "capacity {cap} must be rejected for a 1000-byte result"
        );
    }

    // Exactly the decoded size succeeds.
    let mut dst = vec![0u8; original.len()];
    assert_eq!(decompress(&stream, &mut dst), Ok(original.len()));
    assert_eq!(dst, original);
}
