//! Directory scanner: builds a composite tree mirroring a directory.
//!
//! Directories become composites, every other entry (files, symlinks) a leaf.
//! Siblings are ordered by file name so repeated scans render identically.

use std::path::Path;

use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Composite, Node};

/// Knobs for [`TreeScanner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Include entries whose name starts with `.`
    pub include_hidden: bool,
    /// Deepest level to descend to below the root; `None` for unlimited
    pub max_depth: Option<usize>,
}

/// Constructs [`Node`] trees from directories.
#[derive(Debug, Clone, Default)]
pub struct TreeScanner {
    options: ScanOptions,
}

impl TreeScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan `directory_path` into a tree rooted at that directory.
    #[instrument(level = "debug", skip(self))]
    pub fn scan(&self, directory_path: &Path) -> ApplicationResult<Node> {
        if !directory_path.exists() {
            return Err(ApplicationError::NotFound(directory_path.to_path_buf()));
        }
        if !directory_path.is_dir() {
            return Err(ApplicationError::NotADirectory(directory_path.to_path_buf()));
        }

        let mut walker = WalkDir::new(directory_path).sort_by_file_name();
        if let Some(max_depth) = self.options.max_depth {
            walker = walker.max_depth(max_depth);
        }
        let include_hidden = self.options.include_hidden;

        // stack[d] is the open composite at walk depth d
        let mut stack: Vec<Composite> = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| ApplicationError::Scan {
                path: directory_path.to_path_buf(),
                message: e.to_string(),
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            trace!(depth = entry.depth(), name = %name, "visit");

            close_until(&mut stack, entry.depth().max(1));
            if entry.file_type().is_dir() {
                stack.push(Composite::new(name));
            } else if let Some(parent) = stack.last_mut() {
                parent.add(Node::leaf(name));
            }
        }

        close_until(&mut stack, 1);
        let root = stack.pop().ok_or_else(|| ApplicationError::Scan {
            path: directory_path.to_path_buf(),
            message: "walk yielded no root entry".to_string(),
        })?;
        let root = Node::from(root);
        debug!(
            "scanned {} nodes, depth {}",
            root.node_count(),
            root.depth()
        );
        Ok(root)
    }
}

/// Attach finished composites to their parents until `depth` remain open.
fn close_until(stack: &mut Vec<Composite>, depth: usize) {
    while stack.len() > depth {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.add(done.into());
            }
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
