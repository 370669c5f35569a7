//! Tree Node
//!
//! Arena node with index links instead of pointers.

use crate::{AttributeValue, NamedNodeMap, NodeId};

/// Element node in a [`crate::DomTree`]
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Element data
    pub data: ElementData,
}

impl Node {
    /// Create a new detached element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: ElementData::new(tag_name),
        }
    }
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lower-cased tag name
    pub tag_name: String,
    pub attrs: NamedNodeMap,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&AttributeValue> {
        self.attrs.get_attribute(name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attrs.set_attribute(name, value);
    }
}
