//! One-shot zlib-framed decompression into a caller-supplied buffer.
//!
//! A fresh inflate context is created per call with the maximum 32 KiB
//! history window the format allows, configured for zlib framing (header
//! and Adler-32 trailer validated, as opposed to raw deflate or gzip).

use flate2::{Decompress, FlushDecompress, Status};

use super::types::{DecompressError, ZLIB_MIN_STREAM_SIZE};

/// Decompress the complete zlib stream in `src` into `dst`.
///
/// The entire input must form exactly one well-formed stream. On success
/// returns the number of decompressed bytes written at `dst[0..]`. The call
/// never reads past `src` nor writes past `dst`; `dst` may be larger than
/// the decoded size, and the bytes beyond the returned count are untouched.
///
/// # Errors
///
/// - [`DecompressError::Truncated`] — `src` ends before the stream does.
/// - [`DecompressError::Corrupt`] — bad header bits, malformed deflate
///   payload, or checksum mismatch.
/// - [`DecompressError::TrailingData`] — the stream ended cleanly but input
///   bytes remain after it.
/// - [`DecompressError::DstTooSmall`] — `dst` filled before the stream end.
///
/// On any error `dst` may be partially written and must be treated as
/// invalid.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    if src.len() < ZLIB_MIN_STREAM_SIZE {
        return Err(DecompressError::Truncated);
    }

    let mut ctx = Decompress::new(true);
    loop {
        let consumed = ctx.total_in() as usize;
        let produced = ctx.total_out() as usize;
        let status = ctx
            .decompress(&src[consumed..], &mut dst[produced..], FlushDecompress::Finish)
            // The engine only errors on malformed data: bad header bits, a
            // broken deflate payload, or a checksum mismatch. Capacity
            // exhaustion surfaces as BufError and is classified below.
            .map_err(|_| DecompressError::Corrupt)?;

        match status {
            Status::StreamEnd => {
                // A clean decode must also account for every input byte;
                // bytes past the stream end are the caller's bug.
                return if ctx.total_in() as usize == src.len() {
                    Ok(ctx.total_out() as usize)
                } else {
                    Err(DecompressError::TrailingData)
                };
            }
            Status::Ok | Status::BufError => {
                let in_now = ctx.total_in() as usize;
                let out_now = ctx.total_out() as usize;
                // Ok keeps driving as long as a cursor moves. BufError is
                // terminal for a single-shot finish: all input and output
                // were offered up front, so nothing can unstick the stream
                // and a further call would only observe a failed context.
                if status == Status::Ok && (in_now != consumed || out_now != produced) {
                    continue;
                }
                // Exhausted input is the definitive signal: a complete
                // stream never stops early for lack of input, even when it
                // has also filled the output exactly.
                return Err(if in_now == src.len() {
                    DecompressError::Truncated
                } else if out_now == dst.len() {
                    DecompressError::DstTooSmall
                } else {
                    DecompressError::Corrupt
                });
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
    fn input_below_minimum_stream_size_is_truncated() {
        let mut dst = [0u8; 16];
        for len in 0..ZLIB_MIN_STREAM_SIZE {
            let src = vec![0x78u8; len];
            assert_eq!(
                decompress(&src, &mut dst),
                Err(DecompressError::Truncated),
                "input of {len} bytes must be rejected as truncated"
            );
        }
    }

    #[test]
    fn garbage_input_is_corrupt() {
        // 0xFF 0xFF is not a valid CMF/FLG pair.
        let src = [0xFFu8; 32];
        let mut dst = [0u8; 64];
        assert_eq!(decompress(&src, &mut dst), Err(DecompressError::Corrupt));
    }
}
