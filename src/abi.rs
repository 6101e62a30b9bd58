//! C-ABI shims — export the two symbols a host process calls.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! The produced cdylib is a drop-in backend for hosts that expect the
//! two-function zlib codec surface: a boolean-returning decompressor and a
//! byte-count-returning compressor with 0 as the failure sentinel.

use std::slice;

use crate::codec::compress::compress;
use crate::codec::decompress::decompress;
use crate::codec::types::COMPRESS_SCRATCH_MIN;

// ─────────────────────────────────────────────────────────────────────────────
// zlib_decompress
//
// bool zlib_decompress(unsigned char *compressed_data, size_t compressed_size,
//                      unsigned char *buffer, size_t buffer_size);
//
// Returns true iff the whole input decoded cleanly into buffer.
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a complete zlib stream into `buffer`.
///
/// Returns `true` only for a clean, complete decode with a valid checksum;
/// `false` for truncated or corrupt input, or when `buffer_size` is smaller
/// than the decoded size. On `false`, `buffer` contents are unspecified.
///
/// # Safety
///
/// `compressed_data` must be valid for reads of `compressed_size` bytes and
/// `buffer` valid for writes of `buffer_size` bytes, with the two regions
/// disjoint.
#[no_mangle]
pub unsafe extern "C" fn zlib_decompress(
    compressed_data: *const u8,
    compressed_size: usize,
    buffer: *mut u8,
    buffer_size: usize,
) -> bool {
    if compressed_data.is_null() || buffer.is_null() {
        return false;
    }
    let src = slice::from_raw_parts(compressed_data, compressed_size);
    let dst = slice::from_raw_parts_mut(buffer, buffer_size);
    decompress(src, dst).is_ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// zlib_compress
//
// size_t zlib_compress(unsigned char *data, size_t data_size,
//                      unsigned char *buffer, size_t buffer_size,
//                      unsigned char *level_buffer);
//
// Returns number of bytes written to buffer, or 0 on failure.
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `data` into `buffer` as a complete zlib stream.
///
/// Returns the framed stream size in bytes, or `0` when the output does not
/// fit in `buffer_size`. A successful stream is never empty (header and
/// trailer alone occupy 6 bytes), so `0` is unambiguous as a sentinel.
///
/// # Safety
///
/// `data` must be valid for reads of `data_size` bytes, `buffer` valid for
/// writes of `buffer_size` bytes, and `level_buffer` valid for writes of at
/// least [`COMPRESS_SCRATCH_MIN`] bytes — the pointer carries no length, so
/// this minimum cannot be checked here. All three regions must be disjoint.
#[no_mangle]
pub unsafe extern "C" fn zlib_compress(
    data: *const u8,
    data_size: usize,
    buffer: *mut u8,
    buffer_size: usize,
    level_buffer: *mut u8,
) -> usize {
    if data.is_null() || buffer.is_null() || level_buffer.is_null() {
        return 0;
    }
    let src = slice::from_raw_parts(data, data_size);
    let dst = slice::from_raw_parts_mut(buffer, buffer_size);
    let scratch = slice::from_raw_parts_mut(level_buffer, COMPRESS_SCRATCH_MIN);
    match compress(src, dst, scratch) {
        Ok(n) => n,
        Err(_) => 0,
    }
}
