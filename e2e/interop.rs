//! E2E Test Suite 03: Wire-Format Interoperability
//!
//! Asserts that produced streams are valid per RFC 1950 and interoperate
//! with an independent zlib implementation in both directions:
//! - header fields (CM, CINFO, FCHECK, FDICT)
//! - big-endian Adler-32 trailer, recomputed here from first principles
//! - decode of our streams by miniz_oxide
//! - decode of miniz_oxide streams by our decompressor

extern crate zlibr;

use zlibr::{
    compress, compress_bound, decompress, COMPRESS_SCRATCH_MIN, ZLIB_TRAILER_SIZE,
};

fn compress_to_vec(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; compress_bound(data.len())];
    let mut scratch = vec![0u8; COMPRESS_SCRATCH_MIN];
    let n = compress(data, &mut out, &mut scratch).expect("compression should succeed");
    out.truncate(n);
    out
}

/// Adler-32 per RFC 1950 §8.2, written out longhand so the trailer check
/// does not depend on any compression crate.
fn adler32(data: &[u8]) -> u32 {
    const MOD: u32 = 65_521;
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for chunk in data.chunks(5552) {
        for &byte in chunk {
            a += u32::from(byte);
            b += a;
        }
        a %= MOD;
        b %= MOD;
    }
    (b << 16) | a
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: header fields are valid per RFC 1950
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_header_fields_are_valid() {
    let repeated = b"abc".repeat(1000);
    for data in [&b""[..], &b"x"[..], &repeated[..]] {
        let stream = compress_to_vec(data);

        let cmf = stream[0];
        let flg = stream[1];

        assert_eq!(cmf & 0x0F, 8, "CM must be 8 (deflate)");
        assert_eq!(cmf >> 4, 7, "CINFO must be 7 (32 KiB window)");
        assert_eq!(flg & 0x20, 0, "FDICT must be clear (no preset dictionary)");
        assert_eq!(
            (u16::from(cmf) * 256 + u16::from(flg)) % 31,
            0,
            "CMF*256+FLG must be a multiple of 31"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: trailer is the big-endian Adler-32 of the uncompressed bytes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_trailer_is_big_endian_adler32() {
    let repeated = b"adler trailer bytes ".repeat(500);
    for data in [&b""[..], &b"a"[..], &repeated[..]] {
        let stream = compress_to_vec(data);

        let trailer: [u8; ZLIB_TRAILER_SIZE] =
            stream[stream.len() - ZLIB_TRAILER_SIZE..].try_into().unwrap();
        assert_eq!(
            u32::from_be_bytes(trailer),
            adler32(data),
            "trailer must be the big-endian Adler-32 of the input"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: an independent decoder accepts our streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_independent_decoder_accepts_our_streams() {
    let original = b"interop payload: our encoder, their decoder. ".repeat(300);
    let stream = compress_to_vec(&original);

    let decoded = miniz_oxide::inflate::decompress_to_vec_zlib(&stream)
        .expect("independent decoder should accept the stream");
    assert_eq!(decoded, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: we accept streams from an independent encoder (other levels too)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_we_accept_independent_encoder_streams() {
    let original = b"interop payload: their encoder, our decoder. ".repeat(300);

    // Levels other than our fixed one produce different deflate payloads;
    // all of them must decode.
    for level in [1u8, 6, 9] {
        let stream = miniz_oxide::deflate::compress_to_vec_zlib(&original, level);

        let mut dst = vec![0u8; original.len()];
        let m = decompress(&stream, &mut dst)
            .unwrap_or_else(|e| panic!("level-{level} stream should decode: {e}"));
        assert_eq!(m, original.len());
        assert_eq!(&dst[..m], &original[..]);
    }
}
