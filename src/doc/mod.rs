//! In-memory document trees
//!
//! [`Element`] is a minimal owned tree of named nodes carrying optional text,
//! which is all the tree codec needs from a document model. The [`xml`]
//! submodule converts it to and from XML text.

pub mod xml;

use crate::tree::TreeNode;

/// A named node with an optional text payload and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub(crate) fn clear_text(&mut self) {
        self.text = None;
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends `child` and returns a reference to it in place
    pub fn push(&mut self, child: Element) -> &mut Element {
        let ix = self.children.len();
        self.children.push(child);
        &mut self.children[ix]
    }

    /// First child named `name`, in document order
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

impl TreeNode for Element {
    fn create(name: &str) -> Self {
        Element::new(name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn insert_end_child(&mut self, child: Self) -> &mut Self {
        self.push(child)
    }

    fn set_text(&mut self, text: &str) {
        Element::set_text(self, text)
    }

    fn text(&self) -> Option<&str> {
        Element::text(self)
    }

    fn first_child(&self, name: &str) -> Option<&Self> {
        self.child(name)
    }
}
