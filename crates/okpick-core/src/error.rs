//! Error types for okpick operations.
//!
//! The conversion math itself never fails: degenerate inputs (black, white,
//! grays) are handled by explicit short-circuits and out-of-range numbers are
//! passed through. Errors only arise at the edges of the engine:
//!
//! - parsing user text (hex strings, component triples, space names)
//! - sizing gradient bitmaps
//! - talking to the background render worker
//! - writing rendered output
//!
//! # Usage
//!
//! ```rust
//! use okpick_core::{Error, Result};
//!
//! fn parse_channel(s: &str) -> Result<u8> {
//!     s.parse()
//!         .map_err(|_| Error::invalid_argument(format!("not a channel value: {s:?}")))
//! }
//!
//! assert!(parse_channel("300").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in okpick operations.
///
/// # Categories
///
/// - **Argument errors**: [`InvalidArgument`](Error::InvalidArgument)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Worker errors**: [`WorkerDisconnected`](Error::WorkerDisconnected)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a value that cannot be interpreted.
    ///
    /// Returned for malformed hex strings, unparsable component triples and
    /// unknown color space names. Recoverable: the caller is expected to
    /// report or ignore it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use okpick_core::Error;
    ///
    /// let err = Error::invalid_argument("unsupported hex color \"zz\"");
    /// assert!(err.to_string().contains("zz"));
    /// ```
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bitmap dimensions are zero or overflow the buffer size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// The render worker hung up before answering.
    #[error("render worker disconnected")]
    WorkerDisconnected,

    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error was caused by caller input.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument() {
        let err = Error::invalid_argument("bad hex \"#12\"");
        assert!(err.to_string().starts_with("invalid argument"));
        assert!(err.is_invalid_argument());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 64, "width must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("0x64"));
        assert!(msg.contains("width must be > 0"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(err.is_io_error());
    }
}
