//! Call-frame codec for castellan components.
//!
//! Components accept raw byte frames and dispatch on the leading selector.
//! This crate owns the frame layout: parsing with bounds-checked access
//! ([`Frame`]), canonical construction ([`FrameBuilder`]), and the word
//! helpers hand-rolled layouts are built from.

pub mod error;
pub mod frame;

pub use error::CodecError;
pub use frame::{
    address_word, offset_word, payload_selector, uint_word, Frame, FrameBuilder, WORD,
};
