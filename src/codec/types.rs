//! Format constants and error types shared by the compression and
//! decompression paths.
//!
//! The wire format is standard zlib (RFC 1950): a 2-byte header carrying the
//! compression method, window size, and check bits; a raw deflate payload;
//! and a 4-byte big-endian Adler-32 trailer over the uncompressed bytes.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Format constants
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the zlib stream header (CMF + FLG) in bytes.
pub const ZLIB_HEADER_SIZE: usize = 2;

/// Size of the Adler-32 trailer in bytes.
pub const ZLIB_TRAILER_SIZE: usize = 4;

/// Smallest possible well-formed zlib stream: header, a 2-byte empty
/// fixed-Huffman deflate body, and the trailer.
pub const ZLIB_MIN_STREAM_SIZE: usize = ZLIB_HEADER_SIZE + 2 + ZLIB_TRAILER_SIZE;

/// Fixed deflate effort level used by [`compress`](crate::compress).
///
/// Compiled in, not caller-configurable: every stream this codec produces is
/// encoded at this level, which keeps output byte-identical across calls and
/// across builds for the same input.
pub const COMPRESSION_LEVEL: u32 = 2;

/// Minimum size in bytes of the scratch region passed to
/// [`compress`](crate::compress).
///
/// Working-memory floor for [`COMPRESSION_LEVEL`]. Callers allocate the
/// region once and may reuse it across calls; its contents after a call are
/// unspecified.
pub const COMPRESS_SCRATCH_MIN: usize = 256 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// Error types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by [`compress`](crate::compress).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressError {
    /// The output buffer cannot hold the framed compressed stream.
    DstTooSmall,
    /// The scratch region is smaller than [`COMPRESS_SCRATCH_MIN`].
    ScratchTooSmall,
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::DstTooSmall => {
                write!(f, "output buffer too small for compressed stream")
            }
            CompressError::ScratchTooSmall => write!(
                f,
                "scratch buffer smaller than minimum of {COMPRESS_SCRATCH_MIN} bytes"
            ),
        }
    }
}

impl std::error::Error for CompressError {}

/// Errors returned by [`decompress`](crate::decompress).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The input ends before the zlib stream does.
    Truncated,
    /// Invalid header bits, malformed deflate payload, or checksum mismatch.
    Corrupt,
    /// The stream ended cleanly but unconsumed input bytes remain.
    TrailingData,
    /// The output buffer filled before the stream end was reached.
    DstTooSmall,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DecompressError::Truncated => "truncated zlib stream",
            DecompressError::Corrupt => "corrupt zlib stream",
            DecompressError::TrailingData => "trailing bytes after zlib stream end",
            DecompressError::DstTooSmall => "output buffer too small for decompressed data",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for DecompressError {}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_stream_size_accounts_for_framing() {
        // Header + empty fixed-Huffman body + trailer.
        assert_eq!(ZLIB_MIN_STREAM_SIZE, 8);
    }

    #[test]
    fn error_display_is_stable() {
        assert_eq!(
            DecompressError::Corrupt.to_string(),
            "corrupt zlib stream"
        );
        assert!(CompressError::ScratchTooSmall
            .to_string()
            .contains(&COMPRESS_SCRATCH_MIN.to_string()));
    }
}
