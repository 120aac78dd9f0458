//! Error types.

use core::fmt::{self, Display};

/// Result type with the `ecgroup` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors which can occur while decoding a serialized point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The input length does not match the encoding selected by its tag.
    InvalidLength {
        /// Length required for the encoding.
        expected: usize,
        /// Length of the input.
        actual: usize,
    },

    /// The leading byte is not a recognized SEC1 tag.
    InvalidTag(u8),

    /// A coordinate is not smaller than the field modulus.
    CoordinateOutOfRange,

    /// The coordinates do not describe a point on the curve. For compressed
    /// input this means `x³ + a·x + b` has no square root.
    NotOnCurve,

    /// The textual form is not valid hexadecimal.
    InvalidHex,
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => write!(
                f,
                "invalid encoded point length: expected {expected} bytes, got {actual}"
            ),
            Self::InvalidTag(tag) => write!(f, "invalid encoded point tag: 0x{tag:02x}"),
            Self::CoordinateOutOfRange => f.write_str("coordinate exceeds field modulus"),
            Self::NotOnCurve => f.write_str("encoded point is not on the curve"),
            Self::InvalidHex => f.write_str("invalid hexadecimal point encoding"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Elliptic curve group errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Serialized point could not be decoded.
    Decode(DecodeError),

    /// Point does not satisfy the curve equation.
    InvalidPoint,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "point decoding failed: {err}"),
            Self::InvalidPoint => f.write_str("point is not on the curve"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::InvalidPoint => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Error {
        Error::Decode(err)
    }
}
