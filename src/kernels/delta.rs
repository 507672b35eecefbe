//! This module contains the pure, stateless kernels for delta encoding a block
//! against its baseline and for reconstructing it by a running sum.
//!
//! All arithmetic wraps. A delta that overflows the element type on encode is
//! undone exactly by the wrapping addition on decode, so any block and any
//! baseline round-trip.

use crate::format::BLOCK_LEN;
use crate::traits::BlockInt;

/// Computes the zigzag lanes of `block`: `lane[0]` codes `block[0] - baseline`
/// and `lane[i]` codes `block[i] - block[i - 1]`.
#[inline]
pub fn encode_lanes<T: BlockInt>(block: &[T; BLOCK_LEN], baseline: T) -> [u64; BLOCK_LEN] {
    let mut lanes = [0u64; BLOCK_LEN];
    let mut prev = baseline;
    for (lane, &value) in lanes.iter_mut().zip(block.iter()) {
        *lane = T::zigzag_lane(value.wrapping_sub(&prev));
        prev = value;
    }
    lanes
}

/// Reconstructs a block from its zigzag lanes and appends it to `dst`.
#[inline]
pub fn decode_lanes<T: BlockInt>(lanes: &[u64; BLOCK_LEN], baseline: T, dst: &mut Vec<T>) {
    dst.reserve(BLOCK_LEN);
    let mut acc = baseline;
    dst.extend(lanes.iter().map(|&lane| {
        acc = acc.wrapping_add(&T::unzigzag_lane(lane));
        acc
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_lane_is_relative_to_baseline() {
        let mut block = [100i64; BLOCK_LEN];
        block[0] = 103;
        let lanes = encode_lanes(&block, 100);
        assert_eq!(lanes[0], 5); // +3
        assert_eq!(lanes[1], 6); // -3
        assert!(lanes[2..].iter().all(|&l| l == 0));
    }

    #[test]
    fn test_wraparound_deltas_roundtrip() {
        let mut block = [0i32; BLOCK_LEN];
        for (i, v) in block.iter_mut().enumerate() {
            *v = if i % 2 == 0 { i32::MAX } else { i32::MIN };
        }
        let lanes = encode_lanes(&block, i32::MIN);

        let mut decoded = Vec::new();
        decode_lanes(&lanes, i32::MIN, &mut decoded);
        assert_eq!(decoded, block.to_vec());
    }

    #[test]
    fn test_decode_appends_after_existing_values() {
        let lanes = [0u64; BLOCK_LEN];
        let mut decoded = vec![7u64];
        decode_lanes(&lanes, 9u64, &mut decoded);
        assert_eq!(decoded.len(), BLOCK_LEN + 1);
        assert_eq!(decoded[0], 7);
        assert!(decoded[1..].iter().all(|&v| v == 9));
    }
}
