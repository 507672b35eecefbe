//! This module defines the canonical, type-safe representation of the block
//! element types supported by the codec.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The element type of a block.
///
/// Every supported Rust integer type maps to exactly one variant through
/// [`crate::BlockInt::ELEMENT_TYPE`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    Int32,
    Int64,
    UInt64,
}

impl ElementType {
    /// The native bit width `W` of the element type.
    pub fn bits(&self) -> u32 {
        match self {
            Self::Int32 => 32,
            Self::Int64 | Self::UInt64 => 64,
        }
    }

    /// The native size in bytes of one element.
    pub fn size_of(&self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Returns `true` if the element type is a signed integer.
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Int32 | Self::Int64)
    }
}

/// Provides the canonical string representation for an `ElementType`.
impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_and_signedness() {
        assert_eq!(ElementType::Int32.bits(), 32);
        assert_eq!(ElementType::Int64.size_of(), 8);
        assert!(ElementType::Int64.is_signed());
        assert!(!ElementType::UInt64.is_signed());
        assert_eq!(ElementType::UInt64.to_string(), "UInt64");
    }
}
