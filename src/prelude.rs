//! Glob-importable set of the traits needed to call codec methods
//!
//! ```
//! use twine::prelude::*;
//!
//! let v = vec![1u8, 2, 3];
//! assert_eq!(Vec::<u8>::decode(v.to_bytes()), v);
//! ```

pub use crate::conv::{Decode, Encode, EncodeLength};
pub use crate::record::{Codec, Record};
pub use crate::tree::{FromNode, ToNode, TreeNode, TreeOptions};
pub use ::record_derive::Record;
