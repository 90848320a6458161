//! Rooted tree with path-addressed, structure-checked mutation.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;
use crate::domain::render::{render_lines, RenderOptions};

/// Address of a node: child indices walked from the root.
///
/// The empty path is the root. Textual form is `/`-separated indices,
/// e.g. `"/1/0"`; both `""` and `"/"` parse to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent; `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// True if `self` is `ancestor` or lies below it.
    pub fn starts_with(&self, ancestor: &NodePath) -> bool {
        self.0.starts_with(&ancestor.0)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        trimmed
            .split('/')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| DomainError::InvalidPath(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// A root node plus the operations that keep it a strict tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(&self.root, |node, &i| node.children().get(i))
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for &i in path.indices() {
            node = node.as_composite_mut()?.children_mut().get_mut(i)?;
        }
        Some(node)
    }

    /// Appends `child` under the composite at `parent` and returns its path.
    #[instrument(level = "debug", skip(self, child), fields(child = %child))]
    pub fn add(&mut self, parent: &NodePath, child: Node) -> DomainResult<NodePath> {
        let node = self
            .get_mut(parent)
            .ok_or_else(|| DomainError::NodeNotFound(parent.clone()))?;
        let composite = node
            .as_composite_mut()
            .ok_or_else(|| DomainError::NotAComposite(parent.clone()))?;
        composite.add(child);
        let path = parent.child(composite.children().len() - 1);
        debug!("attached at {}", path);
        Ok(path)
    }

    /// Detaches and returns the subtree at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, path: &NodePath) -> DomainResult<Node> {
        let (&index, _) = path.indices().split_last().ok_or(DomainError::RootRemoval)?;
        let parent = path.parent().unwrap_or_default();
        let children = self
            .get_mut(&parent)
            .and_then(Node::as_composite_mut)
            .map(|c| c.children_mut())
            .filter(|children| index < children.len())
            .ok_or_else(|| DomainError::NodeNotFound(path.clone()))?;
        Ok(children.remove(index))
    }

    /// Re-attaches the subtree at `from` as the last child of `to_parent`.
    ///
    /// Moving a node under itself or one of its descendants is a structural
    /// violation. Every check runs before the tree is touched, so a failed
    /// move leaves it unmodified.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(&mut self, from: &NodePath, to_parent: &NodePath) -> DomainResult<NodePath> {
        if from.is_root() {
            return Err(DomainError::RootRemoval);
        }
        if self.get(from).is_none() {
            return Err(DomainError::NodeNotFound(from.clone()));
        }
        match self.get(to_parent) {
            None => return Err(DomainError::NodeNotFound(to_parent.clone())),
            Some(node) if node.is_leaf() => {
                return Err(DomainError::NotAComposite(to_parent.clone()))
            }
            Some(_) => {}
        }
        if to_parent.starts_with(from) {
            return Err(DomainError::CycleDetected {
                from: from.clone(),
                to: to_parent.clone(),
            });
        }

        let target = shift_after_removal(from, to_parent);
        let subtree = self.remove(from)?;
        self.add(&target, subtree)
    }

    pub fn render(&self, depth: usize, opts: &RenderOptions) -> Vec<String> {
        render_lines(&self.root, depth, opts)
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

/// Where `path` ends up once the sibling-or-ancestor at `removed` is taken out.
fn shift_after_removal(removed: &NodePath, path: &NodePath) -> NodePath {
    let k = removed.indices().len() - 1;
    let mut indices = path.indices().to_vec();
    if indices.len() > k
        && indices[..k] == removed.indices()[..k]
        && indices[k] > removed.indices()[k]
    {
        indices[k] -= 1;
    }
    NodePath::from(indices)
}
