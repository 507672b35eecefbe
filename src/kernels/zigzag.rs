//! This module contains the pure, stateless kernels for the zigzag mapping
//! between signed deltas and unsigned codes of the same width.
//!
//! Small magnitudes of either sign map to small codes, which is what lets the
//! width selector shrink a block. Positive deltas take the odd codes and
//! negative deltas the even ones:
//!
//! ```text
//!  delta:  0  +1  -1  +2  -2  ...  MAX    MIN+1  MIN
//!  code:   0   1   2   3   4  ...  MAX-2  MAX-1  MAX
//! ```
//!
//! Both directions are total over the full signed range.

use crate::traits::HasUnsigned;

/// A bijection between an integer type and its same-width unsigned codes.
pub trait ZigZag: HasUnsigned + Copy {
    fn zigzag(self) -> Self::Unsigned;
    fn unzigzag(code: Self::Unsigned) -> Self;
}

//==================================================================================
// 1. Signed Implementations
//==================================================================================

// The formula is the classic `(n << 1) ^ (n >> (BITS - 1))` applied to the
// negated delta. The right shift must be arithmetic.
macro_rules! impl_zigzag_signed {
    ($($S:ty => $U:ty),+ $(,)?) => {
        $(
            impl ZigZag for $S {
                #[inline(always)]
                fn zigzag(self) -> $U {
                    let n = self.wrapping_neg();
                    ((n << 1) ^ (n >> (<$S>::BITS - 1))) as $U
                }

                #[inline(always)]
                fn unzigzag(code: $U) -> $S {
                    let n = ((code >> 1) as $S) ^ -((code & 1) as $S);
                    n.wrapping_neg()
                }
            }
        )+
    };
}

impl_zigzag_signed!(i32 => u32, i64 => u64);

//==================================================================================
// 2. Unsigned Implementation
//==================================================================================

/// Unsigned deltas wrap, so they are mapped through their `i64` bit pattern.
impl ZigZag for u64 {
    #[inline(always)]
    fn zigzag(self) -> u64 {
        (self as i64).zigzag()
    }

    #[inline(always)]
    fn unzigzag(code: u64) -> u64 {
        i64::unzigzag(code) as u64
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_core_logic_i32() {
        assert_eq!(0i32.zigzag(), 0u32);
        assert_eq!(1i32.zigzag(), 1u32);
        assert_eq!((-1i32).zigzag(), 2u32);
        assert_eq!(2i32.zigzag(), 3u32);
        assert_eq!((-2i32).zigzag(), 4u32);

        assert_eq!(i32::unzigzag(0), 0);
        assert_eq!(i32::unzigzag(1), 1);
        assert_eq!(i32::unzigzag(2), -1);
    }

    #[test]
    fn test_max_min_values_i64() {
        assert_eq!(i64::MIN.zigzag(), u64::MAX);
        assert_eq!((i64::MIN + 1).zigzag(), u64::MAX - 1);
        assert_eq!(i64::MAX.zigzag(), u64::MAX - 2);
        for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
            assert_eq!(i64::unzigzag(v.zigzag()), v);
        }
    }

    #[test]
    fn test_max_min_values_i32() {
        assert_eq!(i32::MIN.zigzag(), u32::MAX);
        for v in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX] {
            assert_eq!(i32::unzigzag(v.zigzag()), v);
        }
    }

    #[test]
    fn test_unsigned_follows_signed_bit_pattern() {
        assert_eq!(1u64.zigzag(), 1);
        assert_eq!(u64::MAX.zigzag(), 2); // wrapping delta of -1
        assert_eq!(u64::unzigzag(2), u64::MAX);
        for v in [0u64, 1, u64::MAX, 1 << 63, (1 << 63) - 1] {
            assert_eq!(u64::unzigzag(v.zigzag()), v);
        }
    }

    #[test]
    fn test_i16_range_is_exhaustively_bijective_via_i32() {
        // Every code in a 16-bit window maps back to a distinct delta.
        let mut seen = std::collections::HashSet::new();
        for code in 0u32..=u16::MAX as u32 {
            let delta = i32::unzigzag(code);
            assert_eq!(delta.zigzag(), code);
            assert!(seen.insert(delta));
            assert!(delta.unsigned_abs() <= 1 << 15);
        }
    }
}
