//! General error types
//!
//! This module contains the error type returned by the file-level entry points
//! of both codecs, along with [`LengthError`], which is shared between the
//! binary and tree codecs for bounded sequence types.

use std::error::Error as StdError;
use std::fmt::Display;
use std::path::PathBuf;

use crate::conv::error::DecodeError;
use crate::tree::error::TreeError;

/// Failure of a fixed-capacity collection to hold the element-count it was
/// asked to decode
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug)]
pub enum LengthError {
    /// Restriction on maximum element-count exceeded
    TooLong { limit: usize, actual: usize },
}

impl Display for LengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthError::TooLong { limit, actual } => {
                write!(
                    f,
                    "{actual}-element value exceeded limit of {limit} elements"
                )
            }
        }
    }
}

impl StdError for LengthError {}

/// Failure of a file-level encode or decode operation
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Destination file could not be created or truncated for writing
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Source file could not be opened for reading
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// I/O failure after the file was successfully opened
    Io(std::io::Error),
    /// File contents could not be decoded as a binary value
    Decode(DecodeError),
    /// File contents could not be decoded as a document tree
    Tree(TreeError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Create { path, source } => {
                write!(f, "cannot create `{}`: {}", path.display(), source)
            }
            Error::Open { path, source } => {
                write!(f, "cannot open `{}`: {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Decode(err) => Display::fmt(err, f),
            Error::Tree(err) => Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Create { source, .. } | Error::Open { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Tree(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<crate::parse::error::ParseError> for Error {
    fn from(err: crate::parse::error::ParseError) -> Self {
        Self::Decode(DecodeError::Parse(err))
    }
}

impl From<TreeError> for Error {
    fn from(err: TreeError) -> Self {
        Self::Tree(err)
    }
}

/// Result type of the file-level entry points in [`binary`](crate::binary)
/// and [`tree`](crate::tree)
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    fn dummy<T: Send + Sync>() {}

    #[test]
    fn error_threadsafe() {
        dummy::<Error>();
        dummy::<LengthError>();
    }

    #[test]
    fn length_error_message() {
        let err = LengthError::TooLong {
            limit: 4,
            actual: 9,
        };
        assert_eq!(err.to_string(), "9-element value exceeded limit of 4 elements");
    }

    #[test]
    fn open_error_names_path() {
        let err = Error::Open {
            path: PathBuf::from("missing.bin"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot open `missing.bin`"));
        assert!(err.source().is_some());
    }
}
