//! Document-tree codec
//!
//! [`ToNode`] and [`FromNode`] are the tree-shaped duals of
//! [`Encode`](crate::Encode) and [`Decode`](crate::Decode). Instead of
//! appending bytes to a stream, a value appends named child nodes to a parent
//! node, and reads itself back by looking those children up by name.
//!
//! The codec is written against the [`TreeNode`] capability trait rather than
//! a concrete document type; [`Element`](crate::doc::Element) is the
//! implementation shipped with this crate, and the top-level entry points in
//! this module render it to XML text.
//!
//! # Node shapes
//!
//! | value        | children written under the parent                          |
//! |--------------|------------------------------------------------------------|
//! | primitive    | `<value>text</value>`                                      |
//! | `String`     | `<string>text</string>`                                    |
//! | collection   | `<TAG><size>n</size><index_0>..</index_0>..</TAG>`          |
//! | pair         | `<pair><first>..</first><second>..</second></pair>`        |
//! | aggregate    | one `<FIELD>..</FIELD>` per registered field                |

pub mod error;

use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::doc::{self, Element};
use crate::transport;

pub use error::{TreeError, TreeResult};

/// Name of the synthetic root node used when none is configured
pub const DEFAULT_ROOT: &str = "serialization";

/// Abstract capabilities of a mutable document-tree node
///
/// Nodes own their children; inserting a child hands over ownership and
/// returns a mutable reference to it in its new position, so that callers
/// can keep building below it.
pub trait TreeNode: Sized {
    /// Creates a detached node with the given name, no text and no children
    fn create(name: &str) -> Self;

    fn name(&self) -> &str;

    /// Appends `child` as the last child of `self` and returns it
    fn insert_end_child(&mut self, child: Self) -> &mut Self;

    /// Replaces the text payload of this node
    fn set_text(&mut self, text: &str);

    /// Text payload of this node, if one was set
    fn text(&self) -> Option<&str>;

    /// Returns the first child of `self` named `name`, if any
    fn first_child(&self, name: &str) -> Option<&Self>;
}

/// Trait for types that can write themselves as child nodes of a document tree
pub trait ToNode {
    /// Appends the node(s) representing this value under `parent`
    fn write_node<N: TreeNode>(&self, parent: &mut N);
}

impl<T: ToNode + ?Sized> ToNode for &T {
    #[inline]
    fn write_node<N: TreeNode>(&self, parent: &mut N) {
        (**self).write_node(parent)
    }
}

/// Trait for types that can be reconstructed from child nodes of a document tree
pub trait FromNode: Sized {
    /// Reads a value of this type from the children of `parent`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingNode`] if an expected child is absent, and
    /// [`TreeError::InvalidText`] if a leaf cannot be parsed.
    fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self>;

    /// Reconstructs a value of this type in place, overwriting `self`.
    ///
    /// Collections override this to clear and refill their existing storage.
    fn read_node_into<N: TreeNode>(&mut self, parent: &N) -> TreeResult<()> {
        *self = Self::read_node(parent)?;
        Ok(())
    }
}

/// Creates a child named `name` at the end of `parent` and returns it
#[inline]
pub fn append_child<'a, N: TreeNode>(parent: &'a mut N, name: &str) -> &'a mut N {
    parent.insert_end_child(N::create(name))
}

/// Looks up the first child of `parent` named `name`
///
/// # Errors
///
/// Returns [`TreeError::MissingNode`] when there is no such child.
#[inline]
pub fn child<'a, N: TreeNode>(parent: &'a N, name: &str) -> TreeResult<&'a N> {
    parent
        .first_child(name)
        .ok_or_else(|| TreeError::missing(parent.name(), name))
}

/// Appends a leaf child named `name` whose text is the `Display` form of `value`
pub fn write_leaf<N: TreeNode, T: Display + ?Sized>(parent: &mut N, name: &str, value: &T) {
    append_child(parent, name).set_text(&value.to_string());
}

/// Reads the leaf child `name` of `parent` and parses its text with `FromStr`
///
/// A leaf without text is parsed as the empty string.
pub fn read_leaf<N, T>(parent: &N, name: &str) -> TreeResult<T>
where
    N: TreeNode,
    T: FromStr,
    T::Err: Display,
{
    let node = child(parent, name)?;
    let text = node.text().unwrap_or("");
    text.parse().map_err(|err: T::Err| TreeError::InvalidText {
        name: name.to_owned(),
        text: text.to_owned(),
        reason: err.to_string(),
    })
}

/// Runtime options for the top-level tree entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Wrap the rendered XML in the base64 transport encoding
    pub transport: bool,
    /// Indent nested elements by this many spaces; compact output when `None`
    pub indent: Option<usize>,
    /// Name of the synthetic root node wrapping the value
    pub root: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            transport: false,
            indent: None,
            root: DEFAULT_ROOT.to_owned(),
        }
    }
}

impl TreeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_transport(mut self, transport: bool) -> Self {
        self.transport = transport;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }
}

/// Builds a document whose root node wraps the encoding of `value`
#[must_use]
pub fn to_document<T: ToNode + ?Sized>(value: &T, opts: &TreeOptions) -> Element {
    let mut root = Element::new(&opts.root);
    value.write_node(&mut root);
    root
}

/// Reads a value back from a document built by [`to_document`]
///
/// # Errors
///
/// Returns [`TreeError::MissingNode`] if the document root is not named
/// `opts.root`, along with any error from decoding the value itself.
pub fn from_document<T: FromNode>(doc: &Element, opts: &TreeOptions) -> TreeResult<T> {
    check_root(doc, opts)?;
    T::read_node(doc)
}

/// In-place variant of [`from_document`]
pub fn from_document_into<T: FromNode>(
    value: &mut T,
    doc: &Element,
    opts: &TreeOptions,
) -> TreeResult<()> {
    check_root(doc, opts)?;
    value.read_node_into(doc)
}

fn check_root(doc: &Element, opts: &TreeOptions) -> TreeResult<()> {
    if doc.name() == opts.root {
        Ok(())
    } else {
        Err(TreeError::missing("#document", &opts.root))
    }
}

/// Renders `value` to document text, transport-encoded if requested
pub fn to_string<T: ToNode + ?Sized>(value: &T, opts: &TreeOptions) -> TreeResult<String> {
    let xml = doc::xml::render(&to_document(value, opts), opts.indent)?;
    if opts.transport {
        trace!(xml_len = xml.len(), "wrapping document in transport encoding");
        Ok(transport::encode(xml.as_bytes()))
    } else {
        Ok(xml)
    }
}

/// Parses document text produced by [`to_string`] into a document tree
pub fn parse_document(text: &str, opts: &TreeOptions) -> TreeResult<Element> {
    if opts.transport {
        let joined: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        let raw = transport::decode(&joined);
        trace!(
            text_len = joined.len(),
            xml_len = raw.len(),
            "unwrapped transport encoding"
        );
        let xml = String::from_utf8(raw).map_err(TreeError::syntax)?;
        doc::xml::parse(&xml)
    } else {
        doc::xml::parse(text)
    }
}

/// Reads a value back from document text produced by [`to_string`]
pub fn from_str<T: FromNode>(text: &str, opts: &TreeOptions) -> TreeResult<T> {
    from_document(&parse_document(text, opts)?, opts)
}

/// Encodes `value` as a document and writes it to the file at `path`
///
/// The file is created if absent and truncated otherwise.
///
/// # Errors
///
/// Returns [`Error::Create`](crate::Error::Create) if the file cannot be
/// created, and [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_file<T, Q>(value: &T, path: Q, opts: &TreeOptions) -> crate::Result<()>
where
    T: ToNode + ?Sized,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let text = to_string(value, opts)?;
    let mut file = File::create(path).map_err(|source| crate::Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(text.as_bytes())?;
    debug!(
        path = %path.display(),
        bytes = text.len(),
        transport = opts.transport,
        "wrote document"
    );
    Ok(())
}

fn read_text(path: &Path) -> crate::Result<String> {
    let mut file = File::open(path).map_err(|source| crate::Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

/// Reads a value from the document file at `path`
///
/// # Errors
///
/// Returns [`Error::Open`](crate::Error::Open) if the file cannot be opened,
/// and [`Error::Tree`](crate::Error::Tree) if its contents do not decode.
pub fn read_file<T, Q>(path: Q, opts: &TreeOptions) -> crate::Result<T>
where
    T: FromNode,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_text(path)?;
    debug!(
        path = %path.display(),
        bytes = text.len(),
        transport = opts.transport,
        "read document"
    );
    Ok(from_str(&text, opts)?)
}

/// In-place variant of [`read_file`]
pub fn read_file_into<T, Q>(value: &mut T, path: Q, opts: &TreeOptions) -> crate::Result<()>
where
    T: FromNode,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_text(path)?;
    debug!(
        path = %path.display(),
        bytes = text.len(),
        transport = opts.transport,
        "read document"
    );
    let doc = parse_document(&text, opts)?;
    Ok(from_document_into(value, &doc, opts)?)
}
