//! This file is the root of the `deltapack` Rust crate.
//!
//! The crate implements a bit-packed delta/zigzag codec for fixed blocks of 64
//! integers. A block is reduced to the wrapping differences against a caller
//! supplied baseline, zigzag-mapped, and packed at the narrowest width that
//! holds every delta. Blocks whose deltas need more than
//! [`format::COMPACTION_THRESHOLD`] bits are stored raw, one word per value.
//!
//! Its responsibilities here are strictly limited to declaring the modules and
//! re-exporting the public surface.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codec;
pub mod config;
pub mod format;
pub mod kernels;

mod error;
mod traits;
mod types;
mod utils;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use codec::stream::{EncodedStream, StreamDecoder, StreamEncoder};
pub use codec::{
    analyze_pack, append_delta_decode, append_delta_encode, append_packed_delta_decode,
    append_packed_delta_encode, decode_block, encode_block,
};
pub use config::{CodecConfig, LoggingConfig};
pub use error::DeltaPackError;
pub use format::{PackKind, PackStats, BLOCK_LEN, COMPACTION_THRESHOLD, RAW_WORD_COUNT};
pub use traits::BlockInt;
pub use types::ElementType;
pub use utils::{words_as_bytes, words_from_bytes};
