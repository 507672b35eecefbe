//! The pure, stateless building blocks of the codec.
//!
//! Encoding runs them in order: `delta` (with `zigzag` per lane), then `width`
//! to pick `bitN`, then either `bitpack` or `raw`. Decoding runs the inverses.
//! Only the dispatcher in [`crate::codec`] knows how they fit together.

pub mod bitpack;
pub mod delta;
pub mod raw;
pub mod width;
pub mod zigzag;
