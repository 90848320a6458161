//! Composite trees: leaves and composites owned strictly by their parent,
//! rendered depth-first as indented outlines.
//!
//! ```
//! use comptree::domain::{Composite, Node};
//!
//! let mut root = Composite::new("Root");
//! root.add(Node::leaf("File1.txt"));
//! let root = Node::from(root);
//! assert_eq!(root.render(1), vec!["-Root", "--File1.txt"]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Composite, DomainError, Leaf, Node, NodePath, RenderOptions, Tree};
