//! This module defines shared traits used across the kernels and the codec.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};
use std::fmt::Debug;

use crate::kernels::zigzag::ZigZag;
use crate::types::ElementType;

/// A trait that maps an integer type to the unsigned type of the same width.
pub trait HasUnsigned {
    type Unsigned;
}

macro_rules! impl_has_unsigned {
    ($($T:ty => $U:ty),+ $(,)?) => {
        $(
            impl HasUnsigned for $T {
                type Unsigned = $U;
            }
        )+
    };
}

impl_has_unsigned!(i32 => u32, i64 => u64, u64 => u64);

/// An element type a block can hold: `i32`, `i64` or `u64`.
///
/// All codec entry points are generic over this trait and monomorphized per
/// type. The 64-bit "lane" used by the kernels is the zigzag code of a delta
/// widened to `u64`; for `i32` its upper 32 bits are always zero.
pub trait BlockInt:
    PrimInt + WrappingAdd + WrappingSub + ZigZag + Debug + Send + Sync + 'static
{
    const ELEMENT_TYPE: ElementType;
    /// The native bit width `W`.
    const WIDTH: u32;

    /// Zigzag-maps a wrapping delta into a kernel lane.
    fn zigzag_lane(delta: Self) -> u64;

    /// Inverse of [`BlockInt::zigzag_lane`]. Bits above `WIDTH` are ignored.
    fn unzigzag_lane(lane: u64) -> Self;

    /// The two's-complement bit pattern, sign- or zero-extended to 64 bits.
    fn to_raw_word(self) -> u64;

    /// Truncates a raw word back to the native width.
    fn from_raw_word(word: u64) -> Self;
}

impl BlockInt for i32 {
    const ELEMENT_TYPE: ElementType = ElementType::Int32;
    const WIDTH: u32 = 32;

    #[inline(always)]
    fn zigzag_lane(delta: Self) -> u64 {
        u64::from(delta.zigzag())
    }

    #[inline(always)]
    fn unzigzag_lane(lane: u64) -> Self {
        i32::unzigzag(lane as u32)
    }

    #[inline(always)]
    fn to_raw_word(self) -> u64 {
        self as i64 as u64
    }

    #[inline(always)]
    fn from_raw_word(word: u64) -> Self {
        word as i32
    }
}

impl BlockInt for i64 {
    const ELEMENT_TYPE: ElementType = ElementType::Int64;
    const WIDTH: u32 = 64;

    #[inline(always)]
    fn zigzag_lane(delta: Self) -> u64 {
        delta.zigzag()
    }

    #[inline(always)]
    fn unzigzag_lane(lane: u64) -> Self {
        i64::unzigzag(lane)
    }

    #[inline(always)]
    fn to_raw_word(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_raw_word(word: u64) -> Self {
        word as i64
    }
}

impl BlockInt for u64 {
    const ELEMENT_TYPE: ElementType = ElementType::UInt64;
    const WIDTH: u32 = 64;

    #[inline(always)]
    fn zigzag_lane(delta: Self) -> u64 {
        delta.zigzag()
    }

    #[inline(always)]
    fn unzigzag_lane(lane: u64) -> Self {
        u64::unzigzag(lane)
    }

    #[inline(always)]
    fn to_raw_word(self) -> u64 {
        self
    }

    #[inline(always)]
    fn from_raw_word(word: u64) -> Self {
        word
    }
}
