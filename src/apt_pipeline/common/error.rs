use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid channel layout: {0}")]
    InvalidLayout(String),

    #[error("Scanline has {actual} words, channel expects {expected}")]
    LineWidthMismatch { expected: usize, actual: usize },

    #[error("Channel dimensions differ: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("No telemetry frame found in {lines} lines")]
    SyncNotFound { lines: usize },

    #[error("Telemetry frame at line {offset} is cut off after {lines} lines")]
    TruncatedFrame { offset: usize, lines: usize },

    #[error("Channel has not been calibrated against its telemetry wedges")]
    InvalidCalibrationState,

    #[error("Degenerate calibration: black and white reference both at {level}")]
    DegenerateCalibration { level: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    /// Whether the caller can skip this channel and carry on with the next one.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConversionError::InvalidCalibrationState)
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
