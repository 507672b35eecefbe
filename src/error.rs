// In: src/error.rs

//! This module defines the single, unified error type for the deltapack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Encoding is total and never fails, so every variant here is raised by a
//! decode path, a buffer conversion, or configuration handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeltaPackError {
    // =========================================================================
    // === Semantic Errors (Specific to the codec's format)
    // =========================================================================
    /// The pack length does not correspond to any kernel.
    #[error("Malformed pack: {0} words does not match any kernel (expected 0, 1..=42 or 64)")]
    MalformedPack(usize),

    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    #[error("No fixed-width kernel for bit width {0}")]
    UnsupportedWidth(u32),

    #[error("Round-trip verification failed for block {block}")]
    VerificationFailed { block: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g. opening a log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading configuration.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
