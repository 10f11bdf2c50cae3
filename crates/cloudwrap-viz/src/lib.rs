#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the viz module.
pub mod error;

/// Byte-count formatting.
pub mod bytes;

/// Progress-bar formatting and iteration progress reporting.
pub mod progress;

pub use crate::bytes::print_bytes;
pub use crate::error::VizError;
pub use crate::progress::{
    print_dynamic, print_progress, print_progress_with_len, progress_bar_str,
    progress_bar_str_with, PrintProgress, ProgressBarOptions,
};
