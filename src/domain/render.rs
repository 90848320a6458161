//! Depth-first outline rendering and box-drawing display.

use std::borrow::Cow;

use termtree::Tree;

use crate::domain::node::Node;

/// Shape of a rendered outline line: `<marker * depth><name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indent marker repeated once per depth unit
    pub marker: char,
    /// Depth added for each level below the start node
    pub step: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: '-',
            step: 2,
        }
    }
}

/// Renders `node` in pre-order, one line per node.
///
/// Children start at `depth + step` and follow their parent's line in
/// insertion order. Never fails; an empty composite yields one line.
pub fn render_lines(node: &Node, depth: usize, opts: &RenderOptions) -> Vec<String> {
    node.iter()
        .map(|(level, n)| {
            let width = depth.saturating_add(level.saturating_mul(opts.step));
            let indent: String = std::iter::repeat(opts.marker).take(width).collect();
            format!("{}{}", indent, display_name(n.name()))
        })
        .collect()
}

/// Escapes control characters so a name always occupies exactly one line.
fn display_name(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    let mut escaped = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Conversion into a `termtree` structure for box-drawing output.
pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for Node {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_tree_string()).collect();
        Tree::new(display_name(self.name()).into_owned()).with_leaves(leaves)
    }
}
