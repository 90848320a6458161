//! Tree nodes: a leaf or a composite owning its children.

use std::fmt;

use crate::domain::render::{render_lines, RenderOptions};

/// Terminal node, holds only a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub name: String,
}

/// Node owning an ordered sequence of children.
///
/// Children are owned exclusively: a node lives exactly as long as the root it
/// is reachable from, and cannot sit under two parents at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    pub name: String,
    children: Vec<Node>,
}

impl Composite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Appends `child` after the existing children.
    pub fn add(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

// Children are dismantled onto a heap stack so dropping a deep chain
// does not recurse once per level.
impl Drop for Composite {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Composite(composite) = &mut node {
                pending.append(&mut composite.children);
            }
        }
    }
}

/// Element of the hierarchy, either a [`Leaf`] or a [`Composite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Composite(Composite),
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Node::Composite(composite)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Node {
    pub fn leaf(name: impl Into<String>) -> Self {
        Node::Leaf(Leaf { name: name.into() })
    }

    pub fn composite(name: impl Into<String>) -> Self {
        Node::Composite(Composite::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.name,
            Node::Composite(composite) => &composite.name,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Children in insertion order; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Composite(composite) => composite.children(),
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Node::Leaf(_) => None,
            Node::Composite(composite) => Some(composite),
        }
    }

    /// Renders this node and its descendants with the default marker and step.
    pub fn render(&self, depth: usize) -> Vec<String> {
        render_lines(self, depth, &RenderOptions::default())
    }

    pub fn render_with(&self, depth: usize, opts: &RenderOptions) -> Vec<String> {
        render_lines(self, depth, opts)
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels in this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|(level, _)| level + 1).max().unwrap_or(1)
    }

    /// Names of all leaves in pre-order.
    ///
    /// Empty composites are not leaves: they are excluded.
    pub fn leaf_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.name())
            .collect()
    }

    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }
}

/// Pre-order walk yielding `(level, node)`, the start node at level 0.
pub struct PreOrderIterator<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack.push((level + 1, child));
        }
        Some((level, node))
    }
}

/// Post-order walk yielding `(level, node)`: children before their parent.
pub struct PostOrderIterator<'a> {
    stack: Vec<(usize, &'a Node, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(0, root, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((level, node, visited)) = self.stack.pop() {
            if visited {
                return Some((level, node));
            }
            self.stack.push((level, node, true));
            for child in node.children().iter().rev() {
                self.stack.push((level + 1, child, false));
            }
        }
        None
    }
}
