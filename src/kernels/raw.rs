//! This module contains the raw fallback kernel.
//!
//! Blocks whose deltas need more than the compaction threshold are stored as
//! their original values, one 64-bit word each, with no delta or zigzag step.
//! Decoding a raw pack therefore ignores the baseline entirely.

use crate::error::DeltaPackError;
use crate::format::{BLOCK_LEN, RAW_WORD_COUNT};
use crate::traits::BlockInt;

/// Appends the 64 raw words of `block`.
#[inline]
pub fn pack<T: BlockInt>(block: &[T; BLOCK_LEN], dst: &mut Vec<u64>) {
    dst.extend(block.iter().map(|v| v.to_raw_word()));
}

/// Truncates 64 raw words back to `T` and appends them to `dst`.
#[inline]
pub fn unpack<T: BlockInt>(words: &[u64], dst: &mut Vec<T>) -> Result<(), DeltaPackError> {
    if words.len() != RAW_WORD_COUNT {
        return Err(DeltaPackError::BufferMismatch {
            expected: RAW_WORD_COUNT,
            actual: words.len(),
        });
    }
    dst.extend(words.iter().map(|&w| T::from_raw_word(w)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_i32_words_are_sign_extended() {
        let mut block = [0i32; BLOCK_LEN];
        block[0] = -2;
        block[1] = i32::MAX;
        let mut words = Vec::new();
        pack(&block, &mut words);
        assert_eq!(words.len(), RAW_WORD_COUNT);
        assert_eq!(words[0], 0xFFFF_FFFF_FFFF_FFFE);
        assert_eq!(words[1], 0x7FFF_FFFF);

        let mut decoded = Vec::new();
        unpack::<i32>(&words, &mut decoded).unwrap();
        assert_eq!(decoded, block.to_vec());
    }

    #[test]
    fn test_raw_unpack_rejects_short_pack() {
        let mut decoded: Vec<u64> = Vec::new();
        let result = unpack::<u64>(&[0; 63], &mut decoded);
        assert!(matches!(
            result,
            Err(DeltaPackError::BufferMismatch { expected: 64, actual: 63 })
        ));
        assert!(decoded.is_empty());
    }
}
