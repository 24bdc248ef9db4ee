//! Error types used to report failure in low-level parsing
//!
//! This module contains a hierarchy of types representing specific
//! classes of error that may arise as a result of calls to
//! [`Parser`](crate::parse::Parser) methods, or of [`Decode`](crate::conv::Decode)
//! implementations that interpret the bytes those methods return.
//!
//! # Layout
//!
//! This module defines the primary type `ParseError` and the alias
//! `ParseResult<T>`; it additionally defines the type-level refinements of
//! `ParseError`, grouped according to similar provenance or nature.

use std::array::TryFromSliceError;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use std::string::FromUtf8Error;

use crate::error::LengthError;

/// Enumeration type over all errors that may be encountered when calling
/// methods on `Parser` types, or when decoding values from the bytes they yield.
#[derive(Debug)]
pub enum ParseError {
    /// A consume operation requested more bytes than the source has left.
    ///
    /// This is the defined failure for truncated input, including length
    /// prefixes that claim more elements or bytes than actually follow.
    Exhausted {
        offset: usize,
        requested: usize,
        limit: usize,
    },
    /// Error class encountered when internal invariants or preconditions are violated
    Internal(InternalError),
    /// Error class encountered when low-level parsing is successful but
    /// the resultant raw value cannot be converted into a legal value of
    /// a post-parse type
    External(ExternalError),
    /// Error class encountered when the bytes consumed are not a valid
    /// native representation of the primitive being read.
    Token(TokenError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ParseError::Exhausted {
                offset,
                requested,
                limit,
            } => write!(
                f,
                "cannot consume {} bytes (currently at byte {} out of {})",
                requested, offset, limit
            ),
            ParseError::Internal(err) => Display::fmt(err, f),
            ParseError::External(err) => Display::fmt(err, f),
            ParseError::Token(err) => Display::fmt(err, f),
        }
    }
}

impl From<Infallible> for ParseError {
    fn from(void: Infallible) -> Self {
        match void {}
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Exhausted { .. } => None,
            ParseError::Internal(err) => Some(err),
            ParseError::External(err) => Some(err),
            ParseError::Token(err) => Some(err),
        }
    }
}

/// Type alias for Result with an error type of [`ParseError`]
///
/// Most `Parser` methods and all `Decode` methods have a return
/// type of `ParseResult<T>` for various `T`
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors arising from bytes that are not the native representation of
/// the primitive being read
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenError {
    /// Byte read for a `bool` was neither `0` nor `1`
    InvalidBoolean(u8),
    /// Word read for a `char` is not a Unicode scalar value
    InvalidChar(u32),
}

impl From<TokenError> for ParseError {
    fn from(tok_e: TokenError) -> Self {
        Self::Token(tok_e)
    }
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBoolean(byte) => {
                write!(f, "invalid boolean encoding 0x{byte:02x}")
            }
            Self::InvalidChar(word) => {
                write!(f, "invalid char encoding 0x{word:08x}")
            }
        }
    }
}

impl Error for TokenError {}

/// Implementation-internal errors
///
/// This error class represents certain 'impossible' cases, which signify
/// an implementation bug in a `Parser` type.
#[derive(Debug, Clone, Copy)]
pub enum InternalError {
    SliceCoerceFailure(TryFromSliceError),
}

impl From<TryFromSliceError> for InternalError {
    fn from(err: TryFromSliceError) -> Self {
        Self::SliceCoerceFailure(err)
    }
}

impl From<InternalError> for ParseError {
    fn from(err: InternalError) -> Self {
        Self::Internal(err)
    }
}

impl Display for InternalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            InternalError::SliceCoerceFailure(_err) => {
                write!(f, "failed to coerce from byte-slice to fixed-length array")
            }
        }
    }
}

impl Error for InternalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InternalError::SliceCoerceFailure(err) => Some(err),
        }
    }
}

/// Converts a borrowed byte-slice into an owned byte-array
///
/// This error is guaranteed to be an `InternalError`, as callers only
/// ever pass slices returned by a successful `consume(N)`.
pub(crate) fn coerce_slice<const N: usize>(bytes: &'_ [u8]) -> ParseResult<[u8; N]> {
    match <[u8; N] as TryFrom<&'_ [u8]>>::try_from(bytes) {
        Ok(array) => Ok(array),
        Err(err) => Err(ParseError::from(InternalError::from(err))),
    }
}

/// Enumerated type representing contextually invalid results obtained from otherwise
/// succesfully executed method calls to a Parser object.
#[derive(Debug)]
pub enum ExternalError {
    /// Coercion from `&[u8]` to `String` performed on the result of a `consume`
    /// operation could not be performed for the specified reason.
    UncoercableString(FromUtf8Error),
    /// A decoded element-count does not fit the capacity of the target collection.
    LengthViolation(LengthError),
}

impl<T> From<T> for ParseError
where
    ExternalError: From<T>,
{
    fn from(err: T) -> Self {
        ParseError::External(ExternalError::from(err))
    }
}

impl From<FromUtf8Error> for ExternalError {
    fn from(err: FromUtf8Error) -> Self {
        Self::UncoercableString(err)
    }
}

impl From<LengthError> for ExternalError {
    fn from(err: LengthError) -> Self {
        Self::LengthViolation(err)
    }
}

impl Display for ExternalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ExternalError::UncoercableString(err) => {
                write!(
                    f,
                    "parsed byte-array could not be coerced to String: {}",
                    err
                )
            }
            ExternalError::LengthViolation(x) => {
                write!(f, "{}", x)
            }
        }
    }
}

impl Error for ExternalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExternalError::UncoercableString(err) => Some(err),
            ExternalError::LengthViolation(err) => Some(err),
        }
    }
}
