//! Single-shot zlib codec over caller-supplied buffers.
//!
//! Two stateless entry points, [`compress`] and [`decompress`], each of
//! which performs one complete transform per call against the standard zlib
//! wire format (RFC 1950): 2-byte header, deflate payload, 4-byte
//! big-endian Adler-32 trailer. Streams produced here decode with any
//! conforming zlib decompressor and vice versa.
//!
//! The effort level is a compiled-in constant
//! ([`COMPRESSION_LEVEL`]), so output is deterministic for a given input.
//! No state survives a call: the codec holds no globals, takes no locks,
//! and is re-entrant from any number of threads as long as each call owns
//! its buffers.
//!
//! With the `c-abi` feature the [`abi`] module additionally exports the two
//! C symbols `zlib_compress` / `zlib_decompress` for host processes loading
//! the cdylib.

pub mod codec;

#[cfg(feature = "c-abi")]
pub mod abi;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::compress::{compress, compress_bound};
pub use codec::decompress::decompress;
pub use codec::types::{
    CompressError, DecompressError, COMPRESSION_LEVEL, COMPRESS_SCRATCH_MIN, ZLIB_HEADER_SIZE,
    ZLIB_MIN_STREAM_SIZE, ZLIB_TRAILER_SIZE,
};
