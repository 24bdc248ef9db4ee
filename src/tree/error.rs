//! Error types for the tree codec

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use crate::error::LengthError;

/// Enumeration over the failures of reading a value back out of a document tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// An expected child node was not found under its parent
    MissingNode { parent: String, name: String },
    /// A leaf node's text could not be converted into the expected primitive
    InvalidText {
        name: String,
        text: String,
        reason: String,
    },
    /// The document text was not well-formed XML
    Syntax(String),
    /// A decoded element-count does not fit the capacity of the target collection
    LengthViolation(LengthError),
}

impl TreeError {
    pub(crate) fn missing(parent: &str, name: &str) -> Self {
        Self::MissingNode {
            parent: parent.to_owned(),
            name: name.to_owned(),
        }
    }

    pub(crate) fn syntax(err: impl Display) -> Self {
        Self::Syntax(err.to_string())
    }
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TreeError::MissingNode { parent, name } => {
                write!(f, "node `{}` has no child named `{}`", parent, name)
            }
            TreeError::InvalidText { name, text, reason } => {
                write!(f, "text {:?} of node `{}` is invalid: {}", text, name, reason)
            }
            TreeError::Syntax(msg) => write!(f, "malformed document: {}", msg),
            TreeError::LengthViolation(err) => Display::fmt(err, f),
        }
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TreeError::LengthViolation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LengthError> for TreeError {
    fn from(err: LengthError) -> Self {
        Self::LengthViolation(err)
    }
}

/// Type alias for Result with an error type of [`TreeError`]
pub type TreeResult<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_message() {
        assert_eq!(
            TreeError::missing("vec", "index_3").to_string(),
            "node `vec` has no child named `index_3`"
        );
    }
}
