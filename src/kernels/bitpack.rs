//! This module contains the fixed-width pack and unpack kernels.
//!
//! A width-`N` kernel serializes the 64 lanes of a block into exactly `N`
//! 64-bit words as one contiguous, least-significant-bit-first bitstream:
//! lane `i` occupies stream bits `[i * N, (i + 1) * N)`. A lane that straddles
//! a word boundary is written and read with one shift pair, never bit by bit.
//!
//! The kernels are a single body parameterized by a const generic width, so
//! every width is monomorphized into its own straight-line routine. The codec
//! reaches them at runtime through two function tables indexed by width, where
//! slot `0` holds the zero-width kernel.

use crate::error::DeltaPackError;
use crate::format::{BLOCK_LEN, COMPACTION_THRESHOLD};

//==================================================================================
// 1. Generic Core Logic (The "Engine")
//==================================================================================

struct Width<const N: usize>;

impl<const N: usize> Width<N> {
    const VALID: () = assert!(N >= 1 && N <= 64, "fixed-width kernels take 1..=64 bits");
}

/// Packs 64 lanes of `N` bits each into `N` words.
///
/// Every lane must be below `2^N`; wider lanes would bleed into their
/// neighbours.
#[inline(always)]
pub fn pack<const N: usize>(lanes: &[u64; BLOCK_LEN]) -> [u64; N] {
    #[allow(clippy::let_unit_value)]
    let () = Width::<N>::VALID;
    debug_assert!(
        lanes.iter().all(|&l| l.checked_shr(N as u32).unwrap_or(0) == 0),
        "lane exceeds {} bits",
        N
    );

    let mut words = [0u64; N];
    for (i, &lane) in lanes.iter().enumerate() {
        let bit = i * N;
        let (word, shift) = (bit / 64, bit % 64);
        words[word] |= lane << shift;
        if shift + N > 64 {
            words[word + 1] |= lane >> (64 - shift);
        }
    }
    words
}

/// Unpacks `N` words into the 64 lanes they hold.
#[inline(always)]
pub fn unpack<const N: usize>(words: &[u64; N]) -> [u64; BLOCK_LEN] {
    #[allow(clippy::let_unit_value)]
    let () = Width::<N>::VALID;
    let mask = u64::MAX >> (64 - N);

    let mut lanes = [0u64; BLOCK_LEN];
    for (i, lane) in lanes.iter_mut().enumerate() {
        let bit = i * N;
        let (word, shift) = (bit / 64, bit % 64);
        let mut value = words[word] >> shift;
        if shift + N > 64 {
            value |= words[word + 1] << (64 - shift);
        }
        *lane = value & mask;
    }
    lanes
}

//==================================================================================
// 2. Runtime Dispatch Tables
//==================================================================================

/// Appends the pack of a block's lanes to the output buffer.
pub type PackFn = fn(&[u64; BLOCK_LEN], &mut Vec<u64>);

/// Restores a block's lanes from a pack of the kernel's width.
pub type UnpackFn = fn(&[u64], &mut [u64; BLOCK_LEN]) -> Result<(), DeltaPackError>;

fn pack_zero(_lanes: &[u64; BLOCK_LEN], _dst: &mut Vec<u64>) {}

fn unpack_zero(words: &[u64], lanes: &mut [u64; BLOCK_LEN]) -> Result<(), DeltaPackError> {
    if !words.is_empty() {
        return Err(DeltaPackError::BufferMismatch {
            expected: 0,
            actual: words.len(),
        });
    }
    *lanes = [0; BLOCK_LEN];
    Ok(())
}

fn pack_append<const N: usize>(lanes: &[u64; BLOCK_LEN], dst: &mut Vec<u64>) {
    dst.extend_from_slice(&pack::<N>(lanes));
}

fn unpack_slice<const N: usize>(
    words: &[u64],
    lanes: &mut [u64; BLOCK_LEN],
) -> Result<(), DeltaPackError> {
    let words: &[u64; N] = words
        .try_into()
        .map_err(|_| DeltaPackError::BufferMismatch {
            expected: N,
            actual: words.len(),
        })?;
    *lanes = unpack::<N>(words);
    Ok(())
}

macro_rules! kernel_table {
    ($ty:ty; $zero:ident, $kernel:ident; $($n:literal)+) => {
        [$zero as $ty, $($kernel::<$n> as $ty),+]
    };
}

const TABLE_LEN: usize = COMPACTION_THRESHOLD as usize + 1;

pub(crate) static PACK_KERNELS: [PackFn; TABLE_LEN] = kernel_table!(
    PackFn; pack_zero, pack_append;
    1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21
    22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42
);

static UNPACK_KERNELS: [UnpackFn; TABLE_LEN] = kernel_table!(
    UnpackFn; unpack_zero, unpack_slice;
    1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21
    22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42
);

//==================================================================================
// 3. Public API (Width Chosen at Runtime)
//==================================================================================

/// Packs `lanes` at `width` bits and appends the `width` resulting words.
///
/// `width` must be within `0..=COMPACTION_THRESHOLD`.
pub fn pack_width(
    width: u32,
    lanes: &[u64; BLOCK_LEN],
    dst: &mut Vec<u64>,
) -> Result<(), DeltaPackError> {
    let kernel = PACK_KERNELS
        .get(width as usize)
        .ok_or(DeltaPackError::UnsupportedWidth(width))?;
    kernel(lanes, dst);
    Ok(())
}

/// Unpacks a `width`-bit pack into `lanes`. `words` must hold exactly `width` words.
pub fn unpack_width(
    width: u32,
    words: &[u64],
    lanes: &mut [u64; BLOCK_LEN],
) -> Result<(), DeltaPackError> {
    let kernel = UNPACK_KERNELS
        .get(width as usize)
        .ok_or(DeltaPackError::UnsupportedWidth(width))?;
    kernel(words, lanes)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
