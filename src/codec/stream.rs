// In: src/codec/stream.rs

//! Caller-side baseline chaining for runs of blocks.
//!
//! The codec itself is stateless: every call takes its baseline from the
//! caller. `StreamEncoder` and `StreamDecoder` are the obvious caller: they
//! seed the first block and then use the last value of block `k` as the
//! baseline of block `k + 1`. They add no framing to the words; the per-block
//! word counts are handed back separately in [`EncodedStream::pack_lens`] for
//! whatever directory the collaborator keeps.

use std::sync::Arc;

use crate::codec::{append_delta_decode, append_delta_encode};
use crate::config::{init_logging, CodecConfig};
use crate::error::DeltaPackError;
use crate::format::{PackKind, BLOCK_LEN};
use crate::traits::BlockInt;
use crate::utils::words_as_bytes;

/// The output of a `StreamEncoder`: concatenated packs plus their lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream {
    pub words: Vec<u64>,
    /// Word count of each pack, in block order.
    pub pack_lens: Vec<usize>,
}

impl EncodedStream {
    pub fn block_count(&self) -> usize {
        self.pack_lens.len()
    }

    /// Iterates over the individual packs. Stops early if `pack_lens`
    /// overruns `words` or overflows.
    pub fn packs(&self) -> impl Iterator<Item = &[u64]> + '_ {
        let mut offset: usize = 0;
        self.pack_lens.iter().map_while(move |&len| {
            let end = offset.checked_add(len)?;
            let pack = self.words.get(offset..end)?;
            offset = end;
            Some(pack)
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        words_as_bytes(&self.words)
    }
}

//==================================================================================
// 1. Encoder
//==================================================================================

type DecodeFn<T> = fn(&mut Vec<T>, &[u64], T) -> Result<PackKind, DeltaPackError>;

pub struct StreamEncoder<T: BlockInt> {
    baseline: T,
    config: Arc<CodecConfig>,
    stream: EncodedStream,
    scratch: Vec<T>,
    /// Decoder used by round-trip verification.
    verifier: DecodeFn<T>,
}

impl<T: BlockInt> StreamEncoder<T> {
    /// Creates an encoder with the default configuration.
    pub fn new(seed: T) -> Self {
        Self {
            baseline: seed,
            config: Arc::new(CodecConfig::default()),
            stream: EncodedStream::default(),
            scratch: Vec::new(),
            verifier: append_delta_decode::<T>,
        }
    }

    /// Creates an encoder, installing the configured logger if there is one.
    pub fn with_config(seed: T, config: Arc<CodecConfig>) -> Result<Self, DeltaPackError> {
        if let Some(logging) = &config.logging {
            init_logging(logging)?;
        }
        Ok(Self {
            config,
            ..Self::new(seed)
        })
    }

    /// The baseline the next block will be encoded against.
    pub fn baseline(&self) -> T {
        self.baseline
    }

    /// Encodes one block and advances the baseline to its last value.
    ///
    /// On a verification failure the block's words are discarded and the
    /// baseline is left unchanged.
    pub fn push_block(&mut self, block: &[T; BLOCK_LEN]) -> Result<PackKind, DeltaPackError> {
        let index = self.stream.block_count();
        let start = self.stream.words.len();
        let kind = append_delta_encode(&mut self.stream.words, block, self.baseline);

        if self.config.verify_round_trip {
            self.scratch.clear();
            let verified =
                (self.verifier)(&mut self.scratch, &self.stream.words[start..], self.baseline)
                    .map(|_| self.scratch[..] == block[..]);
            if !matches!(verified, Ok(true)) {
                self.stream.words.truncate(start);
                log::warn!("block {} of {} failed round-trip verification", index, T::ELEMENT_TYPE);
                return Err(DeltaPackError::VerificationFailed { block: index });
            }
        }

        if self.config.log_block_stats {
            log::debug!(
                "block {}: {} {:?}, {} words, baseline {:?}",
                index,
                T::ELEMENT_TYPE,
                kind,
                kind.word_count(),
                self.baseline
            );
        }

        self.stream.pack_lens.push(kind.word_count());
        self.baseline = block[BLOCK_LEN - 1];
        Ok(kind)
    }

    /// Encodes a slice holding a whole number of blocks. Returns the number of
    /// blocks encoded.
    ///
    /// All or nothing: if any block fails, the blocks already encoded by this
    /// call are discarded and the baseline is restored.
    pub fn push_values(&mut self, values: &[T]) -> Result<usize, DeltaPackError> {
        if values.len() % BLOCK_LEN != 0 {
            return Err(DeltaPackError::BufferMismatch {
                expected: (values.len() / BLOCK_LEN + 1) * BLOCK_LEN,
                actual: values.len(),
            });
        }
        let (words, packs, baseline) = (
            self.stream.words.len(),
            self.stream.pack_lens.len(),
            self.baseline,
        );
        let mut blocks = 0;
        for chunk in values.chunks_exact(BLOCK_LEN) {
            let pushed = chunk
                .try_into()
                .map_err(|_| DeltaPackError::BufferMismatch {
                    expected: BLOCK_LEN,
                    actual: chunk.len(),
                })
                .and_then(|block: &[T; BLOCK_LEN]| self.push_block(block));
            if let Err(e) = pushed {
                self.stream.words.truncate(words);
                self.stream.pack_lens.truncate(packs);
                self.baseline = baseline;
                return Err(e);
            }
            blocks += 1;
        }
        Ok(blocks)
    }

    pub fn finish(self) -> EncodedStream {
        self.stream
    }
}

//==================================================================================
// 2. Decoder
//==================================================================================

pub struct StreamDecoder<T: BlockInt> {
    baseline: T,
}

impl<T: BlockInt> StreamDecoder<T> {
    /// `seed` must be the seed the stream was encoded with.
    pub fn new(seed: T) -> Self {
        Self { baseline: seed }
    }

    pub fn baseline(&self) -> T {
        self.baseline
    }

    /// Decodes one pack, appends the block to `dst` and carries the baseline forward.
    pub fn decode_block(&mut self, pack: &[u64], dst: &mut Vec<T>) -> Result<PackKind, DeltaPackError> {
        let kind = append_delta_decode(dst, pack, self.baseline)?;
        if let Some(&last) = dst.last() {
            self.baseline = last;
        }
        Ok(kind)
    }

    /// Decodes every pack of `stream` in order, appending all blocks to `dst`.
    pub fn decode_stream(&mut self, stream: &EncodedStream, dst: &mut Vec<T>) -> Result<(), DeltaPackError> {
        let mut offset: usize = 0;
        for &len in &stream.pack_lens {
            let end = offset.checked_add(len).unwrap_or(usize::MAX);
            let pack = stream
                .words
                .get(offset..end)
                .ok_or(DeltaPackError::BufferMismatch {
                    expected: end,
                    actual: stream.words.len(),
                })?;
            self.decode_block(pack, dst)?;
            offset = end;
        }
        if offset != stream.words.len() {
            return Err(DeltaPackError::BufferMismatch {
                expected: offset,
                actual: stream.words.len(),
            });
        }
        Ok(())
    }
}
