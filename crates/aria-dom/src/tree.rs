//! Element Tree (arena-based allocation)
//!
//! A minimal live tree. Resolvers never walk it themselves; callers use
//! [`DomTree::ancestors`] to build the nearest-first ancestor context.

use crate::{AttributeValue, Element, ElementDescriptor, Node, NodeId};

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Tree operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Node not found")]
    NotFound,

    #[error("Hierarchy request error")]
    HierarchyRequest,

    #[error("Node is not a child")]
    NotAChild,
}

/// Arena-based element tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a detached element, returning its id
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::element(tag_name));
        id
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Borrow a node as an [`Element`]
    pub fn element(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.get(id).map(|node| NodeRef { node })
    }

    /// Set an attribute on a node; ignored for unknown ids
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<AttributeValue>) {
        if let Some(node) = self.get_mut(id) {
            node.data.set_attr(name, value);
        }
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// An attached child is moved: it is unlinked from its old parent
    /// first. Appending a node under itself or one of its descendants
    /// fails with [`TreeError::HierarchyRequest`].
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<NodeId> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(TreeError::NotFound);
        }
        if self.is_inclusive_ancestor(child, parent) {
            tracing::debug!(parent = parent.0, child = child.0, "refused cyclic append");
            return Err(TreeError::HierarchyRequest);
        }
        self.detach(child);

        let prev = self.nodes[parent.0 as usize].last_child;
        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = NodeId::NONE;
        }
        if let Some(prev_node) = self.get_mut(prev) {
            prev_node.next_sibling = child;
        }
        let parent_node = &mut self.nodes[parent.0 as usize];
        if !parent_node.first_child.is_valid() {
            parent_node.first_child = child;
        }
        parent_node.last_child = child;
        Ok(child)
    }

    /// Remove `child` from `parent`, leaving it detached in the arena
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<NodeId> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(TreeError::NotFound);
        }
        if self.parent(child) != Some(parent) {
            return Err(TreeError::NotAChild);
        }
        self.detach(child);
        Ok(child)
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if let Some(prev_node) = self.get_mut(prev) {
            prev_node.next_sibling = next;
        } else if let Some(parent_node) = self.get_mut(parent) {
            parent_node.first_child = next;
        }
        if let Some(next_node) = self.get_mut(next) {
            next_node.prev_sibling = prev;
        } else if let Some(parent_node) = self.get_mut(parent) {
            parent_node.last_child = prev;
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        std::iter::successors(Some(first).filter(|c| c.is_valid()), move |&c| {
            self.get(c).map(|n| n.next_sibling).filter(|n| n.is_valid())
        })
    }

    /// Ancestor descriptors, nearest first.
    ///
    /// A root element yields an empty list: its ancestor context is known
    /// and empty, which resolvers treat differently from unknown context.
    pub fn ancestors(&self, id: NodeId) -> Vec<ElementDescriptor> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(pid) = current {
            if let Some(el) = self.element(pid) {
                out.push(el.virtualize());
            }
            current = self.parent(pid);
        }
        tracing::trace!(node = id.0, depth = out.len(), "collected ancestors");
        out
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed handle to a tree node
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
}

impl Element for NodeRef<'_> {
    fn tag_name(&self) -> &str {
        &self.node.data.tag_name
    }

    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.node.data.get_attr(name)
    }

    fn virtualize(&self) -> ElementDescriptor {
        ElementDescriptor {
            tag_name: self.node.data.tag_name.clone(),
            attributes: self.node.data.attrs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, b).unwrap();

        assert_eq!(tree.children(ul).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.parent(b), Some(ul));
        assert_eq!(tree.get(a).unwrap().next_sibling, b);
        assert_eq!(tree.get(b).unwrap().prev_sibling, a);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut tree = DomTree::new();
        let table = tree.create_element("table");
        let tbody = tree.create_element("tbody");
        let tr = tree.create_element("tr");
        let td = tree.create_element("TD");
        tree.append_child(table, tbody).unwrap();
        tree.append_child(tbody, tr).unwrap();
        tree.append_child(tr, td).unwrap();

        let tags: Vec<_> = tree.ancestors(td).into_iter().map(|e| e.tag_name).collect();
        assert_eq!(tags, vec!["tr", "tbody", "table"]);
        assert!(tree.ancestors(table).is_empty());
        assert_eq!(tree.element(td).unwrap().tag_name(), "td");
    }

    #[test]
    fn test_invalid_ids() {
        let mut tree = DomTree::new();
        assert!(tree.get(NodeId::NONE).is_none());
        tree.set_attribute(NodeId(7), "role", "grid");
        assert_eq!(tree.append_child(NodeId(7), NodeId(8)), Err(TreeError::NotFound));
        assert!(tree.is_empty());
        assert_eq!(tree.children(NodeId(7)).count(), 0);
    }

    #[test]
    fn test_node_ref_attributes() {
        let mut tree = DomTree::new();
        let table = tree.create_element("table");
        tree.set_attribute(table, "role", "grid");

        let el = tree.element(table).unwrap();
        assert_eq!(el.attribute_str("role").as_deref(), Some("grid"));
        assert_eq!(el.virtualize().attributes.length(), 1);
    }

    #[test]
    fn test_append_moves_attached_child() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let ol = tree.create_element("ol");
        let first = tree.create_element("li");
        let moved = tree.create_element("li");
        let last = tree.create_element("li");
        for li in [first, moved, last] {
            tree.append_child(ul, li).unwrap();
        }

        tree.append_child(ol, moved).unwrap();

        assert_eq!(tree.children(ul).collect::<Vec<_>>(), vec![first, last]);
        assert_eq!(tree.children(ol).collect::<Vec<_>>(), vec![moved]);
        assert_eq!(tree.parent(moved), Some(ol));
        assert_eq!(tree.get(first).unwrap().next_sibling, last);
        assert_eq!(tree.get(last).unwrap().prev_sibling, first);
        assert_eq!(tree.ancestors(moved)[0].tag_name, "ol");
    }

    #[test]
    fn test_append_refuses_cycles() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("section");
        let c = tree.create_element("p");
        tree.append_child(a, b).unwrap();
        tree.append_child(b, c).unwrap();

        assert_eq!(tree.append_child(b, a), Err(TreeError::HierarchyRequest));
        assert_eq!(tree.append_child(c, a), Err(TreeError::HierarchyRequest));
        assert_eq!(tree.append_child(a, a), Err(TreeError::HierarchyRequest));

        // tree is unchanged and still finite
        assert_eq!(tree.parent(a), None);
        let tags: Vec<_> = tree.ancestors(c).into_iter().map(|e| e.tag_name).collect();
        assert_eq!(tags, vec!["section", "div"]);
    }

    #[test]
    fn test_remove_child() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, b).unwrap();

        assert_eq!(tree.remove_child(ul, a), Ok(a));
        assert_eq!(tree.children(ul).collect::<Vec<_>>(), vec![b]);
        assert_eq!(tree.get(ul).unwrap().first_child, b);
        assert!(tree.ancestors(a).is_empty());
        assert_eq!(tree.remove_child(ul, a), Err(TreeError::NotAChild));
    }
}
