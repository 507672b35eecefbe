//! Shared helpers for moving packs between word and byte form.
//!
//! Both directions use native endianness; a collaborator that ships packs
//! between machines of different endianness must convert them itself.

use crate::error::DeltaPackError;

/// Views a run of pack words as bytes, zero-copy.
pub fn words_as_bytes(words: &[u64]) -> &[u8] {
    bytemuck::cast_slice(words)
}

/// Copies bytes back into pack words. The input need not be aligned.
///
/// # Errors
/// Returns `DeltaPackError::BufferMismatch` if the byte length is not a
/// multiple of 8.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u64>, DeltaPackError> {
    const WORD: usize = std::mem::size_of::<u64>();
    if bytes.len() % WORD != 0 {
        return Err(DeltaPackError::BufferMismatch {
            expected: (bytes.len() / WORD + 1) * WORD,
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(WORD)
        .map(bytemuck::pod_read_unaligned::<u64>)
        .collect())
}
