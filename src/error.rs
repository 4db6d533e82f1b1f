//! Errors raised while decoding netpbm data
use thiserror::Error;

/// Every way a decode can fail. All of them abort the decode; no partial image is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetpbmError {
    #[error("file does not have a magic number")]
    MissingMagicNumber,

    #[error("unsupported file format '{0}'")]
    InvalidFormat(String),

    #[error("file does not have width and/or height specified")]
    MissingDimensions,

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("image dimensions {width}x{height} exceed the configured limits")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("file does not have max value specified")]
    MissingMaxValue,

    #[error("invalid max value {0}")]
    InvalidMaxValue(u64),

    #[error("sample {0} is greater than 255")]
    SampleOverflow(u64),

    #[error("image data contains {actual} values, expected {expected}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("image data contains invalid value {0}")]
    InvalidSampleValue(u32),
}
