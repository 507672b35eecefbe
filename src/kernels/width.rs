//! The width selector: the narrowest bit count that holds every lane of a block.

use crate::format::BLOCK_LEN;

/// Returns the minimal `bitN` such that every lane is below `2^bitN`.
///
/// The lanes are OR-folded first, so the result is the position of the highest
/// set bit across the whole block and `0` only when every lane is zero.
#[inline]
pub fn required_width(lanes: &[u64; BLOCK_LEN]) -> u32 {
    let union = lanes.iter().fold(0u64, |acc, &lane| acc | lane);
    u64::BITS - union.leading_zeros()
}
