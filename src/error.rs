//! Error types returned by fallible generator operations.
//!
//! ```rust
//! use zigrand::error::{FormatErrorReason, RandError};
//! use zigrand::Rand;
//!
//! let mut rng = Rand::new(1);
//! assert!(matches!(rng.uint64n(0), Err(RandError::InvalidArgument { .. })));
//! assert!(matches!(
//!     Rand::unmarshal(&[0u8; 3]),
//!     Err(RandError::InvalidFormat { reason: FormatErrorReason::WrongLength { .. } })
//! ));
//! ```

use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// This enum contains all errors this library can return. Fallible API functions return
/// a [`RandResult<T>`].
///
/// Every error is local and synchronous: nothing is retried internally, since retrying
/// a bad argument or a malformed buffer cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RandError {
    /// A bounded sampler or distribution constructor received an argument outside its domain,
    /// e.g. a non-positive bound.
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Further specifies why the argument was invalid.
        info: String,
    },
    /// A serialized state buffer could not be decoded.
    InvalidFormat {
        /// What was wrong with the buffer.
        reason: FormatErrorReason,
    },
    /// A seed word list that the generator cannot be initialised from.
    InvalidSeed {
        /// The number of seed words supplied.
        words: usize,
        /// Further specifies why the seed was rejected.
        info: String,
    },
}

impl RandError {
    pub(crate) fn invalid_argument(operation: &'static str, info: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            info: info.into(),
        }
    }

    pub(crate) const fn invalid_format(reason: FormatErrorReason) -> Self {
        Self::InvalidFormat { reason }
    }
}

impl Display for RandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { operation, info } => {
                write!(f, "Invalid argument to {}: {}", operation, info)
            },
            Self::InvalidFormat { reason } => {
                write!(f, "Invalid generator state encoding: {}", reason)
            },
            Self::InvalidSeed { words, info } => {
                write!(f, "Invalid seed ({} words): {}", words, info)
            },
        }
    }
}

impl Error for RandError {}

/// The specific reason a serialized state buffer was rejected.
///
/// Structured so callers can distinguish a truncated buffer from a buffer written by a
/// newer encoder without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatErrorReason {
    /// The buffer is not exactly the encoded state length.
    WrongLength {
        /// The required length in bytes.
        expected: usize,
        /// The length of the buffer supplied.
        actual: usize,
    },
    /// The buffer does not start with the state magic bytes.
    BadMagic {
        /// The four bytes found where the magic was expected.
        found: [u8; 4],
    },
    /// The buffer was written by an encoder version this build does not understand.
    UnsupportedVersion {
        /// The version tag found in the buffer.
        found: u8,
        /// The only version this build decodes.
        supported: u8,
    },
    /// The byte-reader position is outside `0..=7`.
    ReadPositionOutOfRange {
        /// The position found in the buffer.
        found: u8,
    },
    /// The underlying decoder failed.
    Decode {
        /// The decoder's message.
        message: String,
    },
    /// The underlying encoder failed, e.g. the output buffer is too small.
    Encode {
        /// The encoder's message.
        message: String,
    },
}

impl Display for FormatErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            },
            Self::BadMagic { found } => write!(f, "bad magic bytes {:02x?}", found),
            Self::UnsupportedVersion { found, supported } => {
                write!(
                    f,
                    "unsupported version {} (this build reads version {})",
                    found, supported
                )
            },
            Self::ReadPositionOutOfRange { found } => {
                write!(f, "read position {} out of range 0..=7", found)
            },
            Self::Decode { message } => write!(f, "decode failed: {}", message),
            Self::Encode { message } => write!(f, "encode failed: {}", message),
        }
    }
}

/// Result type for fallible generator operations.
pub type RandResult<T> = Result<T, RandError>;

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = RandError::invalid_argument("int31n", "bound must be positive, got -3");
        let msg = err.to_string();
        assert!(msg.contains("int31n"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_invalid_format_display_includes_reason() {
        let err = RandError::invalid_format(FormatErrorReason::WrongLength {
            expected: 46,
            actual: 3,
        });
        let msg = err.to_string();
        assert!(msg.contains("46"));
        assert!(msg.contains('3'));

        let err = RandError::invalid_format(FormatErrorReason::UnsupportedVersion {
            found: 9,
            supported: 1,
        });
        assert!(err.to_string().contains("version 9"));
    }

    #[test]
    fn test_invalid_seed_display() {
        let err = RandError::InvalidSeed {
            words: 2,
            info: "expected 1 or 3 words".to_owned(),
        };
        assert!(err.to_string().contains("2 words"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: Error + Send + Sync + 'static>(_: &E) {}
        let err = RandError::invalid_format(FormatErrorReason::BadMagic { found: *b"nope" });
        assert_error(&err);
    }

    #[test]
    fn test_error_equality() {
        let a = RandError::invalid_argument("uint64n", "zero");
        let b = RandError::invalid_argument("uint64n", "zero");
        let c = RandError::invalid_argument("uint32n", "zero");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
