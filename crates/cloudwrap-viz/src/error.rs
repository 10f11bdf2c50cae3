/// An error type for the viz module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Error when a progress percentage is outside the `[0, 1]` range.
    #[error("Percentage ({0}) is not in the range [0, 1]")]
    PercentageOutOfRange(f64),

    /// Error when a progress bar is requested with zero length.
    #[error("Bar length must be at least 1")]
    InvalidBarLength,

    /// Error when a byte count is negative.
    #[error("Byte count ({0}) must be non-negative")]
    NegativeBytes(i64),

    /// Error when writing to the output sink fails.
    #[error("Failed to write progress output")]
    Io(#[from] std::io::Error),
}
