//! E2E Test Suite 04: C ABI
//!
//! Calls the exported symbols through raw pointers the way a host process
//! would: boolean success flag for decompression, byte count with 0 as the
//! failure sentinel for compression, null pointers rejected.
//!
//! Requires: --features c-abi

extern crate zlibr;

use std::ptr;

use zlibr::abi::{zlib_compress, zlib_decompress};
use zlibr::{compress_bound, COMPRESS_SCRATCH_MIN};

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: round-trip through the raw ABI
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_roundtrip() {
    let original = b"host-process round trip through the two exported symbols ".repeat(30);

    let mut compressed = vec![0u8; compress_bound(original.len())];
    let mut scratch = vec![0u8; COMPRESS_SCRATCH_MIN];

    let n = unsafe {
        zlib_compress(
            original.as_ptr(),
            original.len(),
            compressed.as_mut_ptr(),
            compressed.len(),
            scratch.as_mut_ptr(),
        )
    };
    assert!(n > 0, "compression must report a positive byte count");

    let mut decompressed = vec![0u8; original.len()];
    let ok = unsafe {
        zlib_decompress(
            compressed.as_ptr(),
            n,
            decompressed.as_mut_ptr(),
            decompressed.len(),
        )
    };
    assert!(ok, "decompression must report success");
    assert_eq!(decompressed, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: zero is the failure sentinel for compression
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_compress_failure_is_zero() {
    let original = vec![0x42u8; 4096];
    let mut tiny = [0u8; 4];
    let mut scratch = vec![0u8; COMPRESS_SCRATCH_MIN];

    let n = unsafe {
        zlib_compress(
            original.as_ptr(),
            original.len(),
            tiny.as_mut_ptr(),
            tiny.len(),
            scratch.as_mut_ptr(),
        )
    };
    assert_eq!(n, 0, "undersized output must yield the 0 sentinel");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: decompression failures are reported as false
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_decompress_failure_is_false() {
    let garbage = [0xFFu8; 32];
    let mut dst = [0u8; 64];

    let ok = unsafe { zlib_decompress(garbage.as_ptr(), garbage.len(), dst.as_mut_ptr(), dst.len()) };
    assert!(!ok, "garbage input must report false");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: null pointers are rejected, not dereferenced
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_null_pointers_rejected() {
    let mut buf = [0u8; 64];
    let mut scratch = vec![0u8; COMPRESS_SCRATCH_MIN];

    unsafe {
        assert!(!zlib_decompress(ptr::null(), 8, buf.as_mut_ptr(), buf.len()));
        assert!(!zlib_decompress(buf.as_ptr(), 8, ptr::null_mut(), 0));

        assert_eq!(
            zlib_compress(ptr::null(), 8, buf.as_mut_ptr(), buf.len(), scratch.as_mut_ptr()),
            0
        );
        assert_eq!(
            zlib_compress(buf.as_ptr(), 8, ptr::null_mut(), 0, scratch.as_mut_ptr()),
            0
        );
        assert_eq!(
            zlib_compress(buf.as_ptr(), 8, buf.as_mut_ptr(), buf.len(), ptr::null_mut()),
            0
        );
    }
}
