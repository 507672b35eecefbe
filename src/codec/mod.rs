// In: src/codec/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Codec Dispatcher
// ====================================================================================
//
// Data Flow (Encode):
//
//   block + baseline
//         |
//         `-> kernels::delta   -> 64 zigzag lanes
//         `-> kernels::width   -> bitN
//         `-> PackKind::for_width(bitN)
//                 Constant        -> nothing appended
//                 Packed{bitN}    -> kernels::bitpack, bitN words
//                 Raw             -> kernels::raw on the ORIGINAL values, 64 words
//
// Data Flow (Decode):
//
//   pack + baseline
//         |
//         `-> PackKind::from_word_count(pack.len())   (malformed lengths fail here)
//                 Raw             -> kernels::raw, baseline unused
//                 otherwise       -> kernels::bitpack -> kernels::delta running sum
//
// Nothing is shared between calls. Baseline continuity across blocks is the
// caller's job; `stream` offers one way to do it.
// ====================================================================================

pub mod stream;


use crate::error::DeltaPackError;
use crate::format::{PackKind, PackStats, BLOCK_LEN, COMPACTION_THRESHOLD};
use crate::kernels::{bitpack, delta, raw, width};
use crate::traits::BlockInt;

//==================================================================================
// 1. Generic Entry Points
//==================================================================================

/// Encodes one block against `baseline` and appends its pack to `dst`.
///
/// Existing contents of `dst` are preserved, so successive blocks can be
/// encoded back to back into one buffer. Encoding is total: every block of
/// every supported type has a pack. Returns the kernel that was used; its
/// [`PackKind::word_count`] is the number of words appended.
pub fn append_delta_encode<T: BlockInt>(
    dst: &mut Vec<u64>,
    block: &[T; BLOCK_LEN],
    baseline: T,
) -> PackKind {
    let lanes = delta::encode_lanes(block, baseline);
    let kind = PackKind::for_width(width::required_width(&lanes));
    match kind {
        PackKind::Constant => {}
        PackKind::Packed { width } => bitpack::PACK_KERNELS[width as usize](&lanes, dst),
        PackKind::Raw => raw::pack(block, dst),
    }
    kind
}

/// Decodes one pack against `baseline` and appends the 64 values to `dst`.
///
/// `pack` must be exactly one block's words. Its length selects the kernel;
/// a length that matches no kernel is rejected with
/// [`DeltaPackError::MalformedPack`] and nothing is appended.
pub fn append_delta_decode<T: BlockInt>(
    dst: &mut Vec<T>,
    pack: &[u64],
    baseline: T,
) -> Result<PackKind, DeltaPackError> {
    let kind = PackKind::from_word_count(pack.len()).map_err(|e| {
        log::warn!("rejecting {} pack: {}", T::ELEMENT_TYPE, e);
        e
    })?;

    match kind {
        PackKind::Raw => raw::unpack(pack, dst)?,
        PackKind::Constant | PackKind::Packed { .. } => {
            let mut lanes = [0u64; BLOCK_LEN];
            bitpack::unpack_width(kind.bits_per_value(), pack, &mut lanes)?;
            delta::decode_lanes(&lanes, baseline, dst);
        }
    }
    Ok(kind)
}

/// Encodes one block into a fresh pack.
pub fn encode_block<T: BlockInt>(block: &[T; BLOCK_LEN], baseline: T) -> Vec<u64> {
    let mut pack = Vec::new();
    append_delta_encode(&mut pack, block, baseline);
    pack
}

/// Decodes one pack into a block.
pub fn decode_block<T: BlockInt>(pack: &[u64], baseline: T) -> Result<[T; BLOCK_LEN], DeltaPackError> {
    let mut values = Vec::with_capacity(BLOCK_LEN);
    append_delta_decode(&mut values, pack, baseline)?;
    values
        .try_into()
        .map_err(|v: Vec<T>| DeltaPackError::BufferMismatch {
            expected: BLOCK_LEN,
            actual: v.len(),
        })
}

//==================================================================================
// 2. Width-Specialized Entry Points
//==================================================================================

struct PackedWidth<const N: usize>;

impl<const N: usize> PackedWidth<N> {
    const VALID: () = assert!(
        N >= 1 && N <= COMPACTION_THRESHOLD as usize,
        "delta packs take 1..=COMPACTION_THRESHOLD bits"
    );
}

/// Delta-encodes a block and packs it at the fixed width `N`, skipping width
/// selection.
///
/// `N` must be within `1..=COMPACTION_THRESHOLD`, so every pack built here is
/// one [`append_delta_decode`] reads back as the same kernel. A width outside
/// that range fails to compile:
///
/// ```compile_fail
/// let mut dst = Vec::new();
/// deltapack::append_packed_delta_encode::<43, i64>(&mut dst, &[0; 64], 0).unwrap();
/// ```
///
/// # Errors
/// Returns `DeltaPackError::UnsupportedWidth` with the block's required width
/// if some zigzag delta does not fit in `N` bits. Nothing is appended then.
pub fn append_packed_delta_encode<const N: usize, T: BlockInt>(
    dst: &mut Vec<u64>,
    block: &[T; BLOCK_LEN],
    baseline: T,
) -> Result<(), DeltaPackError> {
    #[allow(clippy::let_unit_value)]
    let () = PackedWidth::<N>::VALID;
    let lanes = delta::encode_lanes(block, baseline);
    let required = width::required_width(&lanes);
    if required as usize > N {
        return Err(DeltaPackError::UnsupportedWidth(required));
    }
    dst.extend_from_slice(&bitpack::pack::<N>(&lanes));
    Ok(())
}

/// Inverse of [`append_packed_delta_encode`]. The word count is fixed by the type.
pub fn append_packed_delta_decode<const N: usize, T: BlockInt>(
    dst: &mut Vec<T>,
    pack: &[u64; N],
    baseline: T,
) {
    #[allow(clippy::let_unit_value)]
    let () = PackedWidth::<N>::VALID;
    let lanes = bitpack::unpack::<N>(pack);
    delta::decode_lanes(&lanes, baseline, dst);
}

//==================================================================================
// 3. Analysis
//==================================================================================

/// Classifies a pack of `T` values without decoding it.
pub fn analyze_pack<T: BlockInt>(pack: &[u64]) -> Result<PackStats, DeltaPackError> {
    let kind = PackKind::from_word_count(pack.len())?;
    let encoded_size = std::mem::size_of_val(pack);
    let original_size = BLOCK_LEN * T::ELEMENT_TYPE.size_of();

    Ok(PackStats {
        element_type: T::ELEMENT_TYPE,
        kind,
        word_count: pack.len(),
        encoded_size,
        original_size,
        compression_ratio: (encoded_size > 0).then(|| original_size as f64 / encoded_size as f64),
    })
}
