// In: src/format.rs

//! Defines the constants and structures of the pack format.
//!
//! A pack is the run of 64-bit words produced for one block. It carries no
//! header: its length alone identifies the kernel that produced it.
//!
//! | words      | kernel                                   |
//! |------------|------------------------------------------|
//! | 0          | zero width, every element equals baseline |
//! | 1..=42     | fixed width, `bitN` equals the word count |
//! | 64         | raw, one original value per word          |
//!
//! Within a fixed-width pack, values are laid out least-significant-bit first:
//! value `i` occupies stream bits `[i * n, (i + 1) * n)`, and stream bit `b` is
//! bit `b % 64` of word `b / 64`.

use serde::{Deserialize, Serialize};

use crate::error::DeltaPackError;
use crate::types::ElementType;

//==================================================================================
// I. Format Constants
//==================================================================================

/// The number of values in every block.
pub const BLOCK_LEN: usize = 64;

/// The widest delta width that is still bit-packed. Wider blocks are stored raw.
pub const COMPACTION_THRESHOLD: u32 = 42;

/// The word count of a raw pack.
pub const RAW_WORD_COUNT: usize = BLOCK_LEN;

//==================================================================================
// II. Pack Classification
//==================================================================================

/// The kernel that produced (or will produce) a pack.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PackKind {
    /// Every delta is zero; the pack is empty.
    Constant,
    /// Zigzag deltas packed at `width` bits each, in `width` words.
    Packed { width: u32 },
    /// Original values stored verbatim, one per word.
    Raw,
}

impl PackKind {
    /// Picks the kernel for a block whose deltas need `width` bits.
    pub fn for_width(width: u32) -> Self {
        match width {
            0 => PackKind::Constant,
            w if w <= COMPACTION_THRESHOLD => PackKind::Packed { width: w },
            _ => PackKind::Raw,
        }
    }

    /// Infers the kernel from the length of a pack.
    pub fn from_word_count(words: usize) -> Result<Self, DeltaPackError> {
        match words {
            0 => Ok(PackKind::Constant),
            n if n <= COMPACTION_THRESHOLD as usize => Ok(PackKind::Packed { width: n as u32 }),
            RAW_WORD_COUNT => Ok(PackKind::Raw),
            n => Err(DeltaPackError::MalformedPack(n)),
        }
    }

    /// The number of words a pack of this kind occupies.
    pub fn word_count(self) -> usize {
        match self {
            PackKind::Constant => 0,
            PackKind::Packed { width } => width as usize,
            PackKind::Raw => RAW_WORD_COUNT,
        }
    }

    /// The number of stored bits per block value.
    pub fn bits_per_value(self) -> u32 {
        match self {
            PackKind::Constant => 0,
            PackKind::Packed { width } => width,
            PackKind::Raw => u64::BITS,
        }
    }
}

//==================================================================================
// III. Analysis Output
//==================================================================================

/// The public-facing struct for pack analysis results, returned by `analyze_pack`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackStats {
    pub element_type: ElementType,
    pub kind: PackKind,
    pub word_count: usize,
    /// Size of the pack in bytes.
    pub encoded_size: usize,
    /// Size of the block in its native representation.
    pub original_size: usize,
    /// `original_size / encoded_size`; `None` for a constant block, which has no words.
    pub compression_ratio: Option<f64>,
}
