use crate::parse::error::ParseError;

/// Failure of a whole-buffer binary decode
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    Parse(ParseError),
    /// Bytes were left over after the top-level value was decoded
    ///
    /// Only reported when the `check_complete_parse` feature is enabled.
    NonEmpty { residual: usize },
}

impl From<std::convert::Infallible> for DecodeError {
    fn from(void: std::convert::Infallible) -> Self {
        match void {}
    }
}

impl From<ParseError> for DecodeError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Parse(err) => {
                write!(f, "parser encountered error: {}", err)
            }
            DecodeError::NonEmpty { residual } => {
                write!(f, "parser had {} unconsumed bytes after decoding", residual)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Parse(err) => Some(err),
            DecodeError::NonEmpty { .. } => None,
        }
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
