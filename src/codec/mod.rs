//! The codec: stateless single-call zlib compression and decompression.
//!
//! Both operations run `Initialized -> Running -> {Success, Failure}` inside
//! one call. There is no suspended state and no partial result that can be
//! resumed later; a failed call is simply retried by the caller with bigger
//! buffers if it chooses.

pub mod compress;
pub mod decompress;
pub mod types;

pub use compress::{compress, compress_bound};
pub use decompress::decompress;
pub use types::{CompressError, DecompressError};
