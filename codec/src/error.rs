use thiserror::Error;

/// Failures while parsing or addressing a call frame.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("frame is shorter than a selector")]
    MissingSelector,

    #[error("word region of {len} bytes is not a whole number of words")]
    RaggedFrame { len: usize },

    #[error("word index {index} is past the end of the frame")]
    WordOutOfRange { index: usize },

    #[error("dynamic-argument offset {offset} points outside the word region")]
    OffsetOutOfBounds { offset: usize },

    #[error("dynamic-argument length {length} runs past the word region")]
    LengthOutOfBounds { length: usize },

    #[error("word at index {index} does not fit the requested integer width")]
    ValueTooWide { index: usize },
}
