//! Domain layer: nodes, rendering and checked tree mutation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod render;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::{Composite, Leaf, Node, PostOrderIterator, PreOrderIterator};
pub use render::{render_lines, RenderOptions, TreeDisplay};
pub use tree::{NodePath, Tree};
