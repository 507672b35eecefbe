//! This module defines the core, strongly-typed data representations used
//! throughout the codec.
//!
//! It currently includes the canonical `ElementType` enum, which names the
//! element types a block may hold.

pub mod element_type;

// Re-export the main type(s) for easier access.
pub use element_type::ElementType;
