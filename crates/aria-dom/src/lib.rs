//! html-aria DOM - element descriptors
//!
//! The element shape consumed by the ARIA resolvers, plus a small
//! arena tree for callers that hold a live structure.

mod attributes;
mod element;
mod node;
mod tree;
mod value;

pub use attributes::{Attr, NamedNodeMap};
pub use element::{Element, ElementDescriptor};
pub use node::{ElementData, Node};
pub use tree::{DomTree, NodeRef, TreeError, TreeResult};
pub use value::AttributeValue;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
