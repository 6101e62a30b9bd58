//! One-shot zlib-framed compression into a caller-supplied buffer.
//!
//! A fresh deflate context is created per call, pinned to the fixed effort
//! level [`COMPRESSION_LEVEL`], and dropped on return. Nothing survives the
//! call, so concurrent callers need no coordination beyond passing disjoint
//! buffers, which the borrow checker already enforces.

use flate2::{Compress, Compression, FlushCompress, Status};

use super::types::{CompressError, COMPRESSION_LEVEL, COMPRESS_SCRATCH_MIN, ZLIB_MIN_STREAM_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Utility
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case framed output size for `src_len` input bytes at the fixed
/// effort level.
///
/// Sizing `dst` to this value guarantees [`compress`] succeeds for any
/// input, including incompressible data (which can expand slightly once the
/// zlib header and trailer are added).
#[inline]
pub fn compress_bound(src_len: usize) -> usize {
    // Two regimes: entropy-coded output with bounded per-symbol expansion,
    // and stored-block fallback at 5 bytes of overhead per 31 KiB block.
    let coded = 128 + src_len + src_len / 10;
    let stored = 128 + src_len + (src_len / (31 * 1024) + 1) * 5;
    coded.max(stored)
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot compression
// ─────────────────────────────────────────────────────────────────────────────

/// Compress all of `src` into `dst` as a complete zlib stream.
///
/// On success returns the number of bytes written to `dst`: the 2-byte
/// header, the deflate payload, and the 4-byte Adler-32 trailer. The count
/// is always at least [`ZLIB_MIN_STREAM_SIZE`], even for empty input.
///
/// `scratch` is working memory for the duration of the call and must be at
/// least [`COMPRESS_SCRATCH_MIN`] bytes; its contents afterwards are
/// unspecified. The region is not retained across calls and may be reused
/// for subsequent ones.
///
/// # Errors
///
/// - [`CompressError::ScratchTooSmall`] if `scratch` is under the minimum.
/// - [`CompressError::DstTooSmall`] if the framed stream does not fit in
///   `dst`. `dst` is left partially written and must be treated as invalid.
///
/// Output is deterministic: identical `src` always yields byte-identical
/// compressed output, since the effort level is compiled in.
pub fn compress(src: &[u8], dst: &mut [u8], scratch: &mut [u8]) -> Result<usize, CompressError> {
    if scratch.len() < COMPRESS_SCRATCH_MIN {
        return Err(CompressError::ScratchTooSmall);
    }
    // Every stream carries at least header + empty body + trailer.
    if dst.len() < ZLIB_MIN_STREAM_SIZE {
        return Err(CompressError::DstTooSmall);
    }

    let mut ctx = Compress::new(Compression::new(COMPRESSION_LEVEL), true);
    loop {
        let consumed = ctx.total_in() as usize;
        let produced = ctx.total_out() as usize;
        let status = ctx
            .compress(&src[consumed..], &mut dst[produced..], FlushCompress::Finish)
            // Deflate has no failure mode for whole-slice input; an engine
            // error here can only mean the output ran out mid-flush.
            .map_err(|_| CompressError::DstTooSmall)?;

        match status {
            Status::StreamEnd => return Ok(ctx.total_out() as usize),
            Status::Ok | Status::BufError => {
                // Finishing with free output space always advances a cursor;
                // a stalled context means dst is exhausted.
                if ctx.total_in() as usize == consumed && ctx.total_out() as usize == produced {
                    return Err(CompressError::DstTooSmall);
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_minimum_is_checked_first() {
        let mut dst = vec![0u8; 64];
        let mut scratch = vec![0u8; COMPRESS_SCRATCH_MIN - 1];
        assert_eq!(
            compress(b"abc", &mut dst, &mut scratch),
            Err(CompressError::ScratchTooSmall)
        );
    }

    #[test]
    fn dst_below_minimum_stream_size_fails() {
        let mut dst = vec![0u8; ZLIB_MIN_STREAM_SIZE - 1];
        let mut scratch = vec![0u8; COMPRESS_SCRATCH_MIN];
        assert_eq!(
            compress(&[], &mut dst, &mut scratch),
            Err(CompressError::DstTooSmall)
        );
    }

    #[test]
    fn bound_covers_small_and_empty_inputs() {
        assert!(compress_bound(0) >= ZLIB_MIN_STREAM_SIZE);
        for &len in &[1usize, 63, 4096, 1 << 20] {
            assert!(compress_bound(len) > len);
        }
    }
}
