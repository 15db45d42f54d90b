//! Call-frame parsing and construction.
//!
//! A frame is a 4-byte selector followed by the *word region*: a sequence of
//! 32-byte words. Static arguments occupy one word each. A variable-length
//! bytes argument is split between a head word holding the byte offset of
//! its tail (relative to the start of the word region) and the tail itself:
//! a length word followed by the payload, zero-padded to a word multiple.
//!
//! Offsets and lengths are decoded exactly as written and only bounds
//! checked; the head and tail of a frame are two independently addressed
//! regions, so nothing about one can be inferred from the position of the
//! other. [`Frame::bytes_at`] is the only way to reach a dynamic argument,
//! which makes the slice it returns the single source of truth for whatever
//! the caller does with the payload.

use castellan_types::{Address, Selector};

use crate::error::CodecError;

/// Size of one word in the frame's word region.
pub const WORD: usize = 32;

/// A parsed view over a raw call frame. Borrows the underlying bytes.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    selector: Selector,
    region: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Parse a raw frame: a selector followed by whole words.
    pub fn parse(raw: &'a [u8]) -> Result<Self, CodecError> {
        if raw.len() < Selector::SIZE {
            return Err(CodecError::MissingSelector);
        }
        let (head, region) = raw.split_at(Selector::SIZE);
        if region.len() % WORD != 0 {
            return Err(CodecError::RaggedFrame { len: region.len() });
        }
        let mut selector = [0u8; 4];
        selector.copy_from_slice(head);
        Ok(Self {
            selector: Selector::new(selector),
            region,
        })
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Number of whole words in the word region.
    pub fn word_count(&self) -> usize {
        self.region.len() / WORD
    }

    fn word(&self, index: usize) -> Result<&'a [u8], CodecError> {
        let start = index
            .checked_mul(WORD)
            .ok_or(CodecError::WordOutOfRange { index })?;
        let end = start
            .checked_add(WORD)
            .ok_or(CodecError::WordOutOfRange { index })?;
        if end > self.region.len() {
            return Err(CodecError::WordOutOfRange { index });
        }
        Ok(&self.region[start..end])
    }

    /// Read the address in the low 20 bytes of the word at `index`.
    pub fn address_at(&self, index: usize) -> Result<Address, CodecError> {
        let word = self.word(index)?;
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[WORD - 20..]);
        Ok(Address::new(bytes))
    }

    /// Read the word at `index` as a big-endian unsigned integer.
    pub fn uint_at(&self, index: usize) -> Result<u128, CodecError> {
        let word = self.word(index)?;
        if word[..WORD - 16].iter().any(|&b| b != 0) {
            return Err(CodecError::ValueTooWide { index });
        }
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&word[WORD - 16..]);
        Ok(u128::from_be_bytes(bytes))
    }

    fn usize_at(&self, index: usize) -> Result<usize, CodecError> {
        let word = self.word(index)?;
        if word[..WORD - 8].iter().any(|&b| b != 0) {
            return Err(CodecError::ValueTooWide { index });
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&word[WORD - 8..]);
        let value = u64::from_be_bytes(bytes);
        usize::try_from(value).map_err(|_| CodecError::ValueTooWide { index })
    }

    /// Resolve the variable-length bytes argument whose head word is at
    /// `index`.
    ///
    /// Follows the head word's offset to the tail, reads the length word
    /// there, and returns exactly `length` payload bytes. The returned slice
    /// is the argument as it will be seen by whoever the payload is handed
    /// to; there is no other accessor for the tail region.
    pub fn bytes_at(&self, index: usize) -> Result<&'a [u8], CodecError> {
        let offset = self.usize_at(index)?;
        let length_end = offset
            .checked_add(WORD)
            .ok_or(CodecError::OffsetOutOfBounds { offset })?;
        if length_end > self.region.len() {
            return Err(CodecError::OffsetOutOfBounds { offset });
        }
        let length_word = &self.region[offset..length_end];
        if length_word[..WORD - 8].iter().any(|&b| b != 0) {
            return Err(CodecError::LengthOutOfBounds { length: usize::MAX });
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&length_word[WORD - 8..]);
        let length = usize::try_from(u64::from_be_bytes(bytes))
            .map_err(|_| CodecError::LengthOutOfBounds { length: usize::MAX })?;
        let end = length_end
            .checked_add(length)
            .ok_or(CodecError::LengthOutOfBounds { length })?;
        if end > self.region.len() {
            return Err(CodecError::LengthOutOfBounds { length });
        }
        Ok(&self.region[length_end..end])
    }
}

/// Read the selector at the head of a decoded payload.
pub fn payload_selector(payload: &[u8]) -> Result<Selector, CodecError> {
    if payload.len() < Selector::SIZE {
        return Err(CodecError::MissingSelector);
    }
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&payload[..Selector::SIZE]);
    Ok(Selector::new(bytes))
}

/// Encode an address into a word (right-aligned, high 12 bytes zero).
pub fn address_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[WORD - 20..].copy_from_slice(address.as_bytes());
    word
}

/// Encode an unsigned integer into a word (big-endian, right-aligned).
pub fn uint_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[WORD - 16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a region offset into a word.
pub fn offset_word(offset: usize) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[WORD - 8..].copy_from_slice(&(offset as u64).to_be_bytes());
    word
}

enum Arg {
    Word([u8; 32]),
    Bytes(Vec<u8>),
}

/// Canonical frame encoder.
///
/// Heads are laid out in argument order; tails follow the head region in the
/// order their heads appear. Hand-rolled word layouts (for frames the
/// builder would never produce) can be assembled from the `*_word` helpers.
pub struct FrameBuilder {
    selector: Selector,
    args: Vec<Arg>,
}

impl FrameBuilder {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            args: Vec::new(),
        }
    }

    pub fn address(mut self, address: Address) -> Self {
        self.args.push(Arg::Word(address_word(address)));
        self
    }

    pub fn uint(mut self, value: u128) -> Self {
        self.args.push(Arg::Word(uint_word(value)));
        self
    }

    pub fn bytes(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.args.push(Arg::Bytes(payload.into()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let head_len = self.args.len() * WORD;
        let mut tail_offset = head_len;
        let mut heads = Vec::with_capacity(head_len);
        let mut tails = Vec::new();

        for arg in &self.args {
            match arg {
                Arg::Word(word) => heads.extend_from_slice(word),
                Arg::Bytes(payload) => {
                    heads.extend_from_slice(&offset_word(tail_offset));
                    tails.extend_from_slice(&uint_word(payload.len() as u128));
                    tails.extend_from_slice(payload);
                    let padding = payload.len().next_multiple_of(WORD) - payload.len();
                    tails.extend(std::iter::repeat(0u8).take(padding));
                    tail_offset += WORD + payload.len() + padding;
                }
            }
        }

        let mut frame = Vec::with_capacity(Selector::SIZE + heads.len() + tails.len());
        frame.extend_from_slice(self.selector.as_bytes());
        frame.extend_from_slice(&heads);
        frame.extend_from_slice(&tails);
        frame
    }
}
