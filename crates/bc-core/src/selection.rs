//! Block-selection domain model.
//!
//! A selection set is an ordered sequence of (node, path) pairs naming the
//! top-level blocks currently highlighted in block-selection mode. It is
//! transient: produced fresh on every query, never persisted.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Position of a block within the document tree, as a sequence of child
/// indices from the root.
pub type Path = Vec<usize>;

/// One selected top-level block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedBlock {
    pub node: Node,
    pub path: Path,
}

impl SelectedBlock {
    pub fn new(node: Node, path: Path) -> Self {
        Self { node, path }
    }
}
