//! In-memory block-selection implementation.
//!
//! Backs integration tests and headless embedding. A real editor supplies
//! its own [`BlockSelectionPort`] over its document and selection state.

use std::collections::BTreeSet;
use std::sync::Mutex;

use anyhow::Result;

use bc_core::node::Node;
use bc_core::ports::BlockSelectionPort;
use bc_core::selection::SelectedBlock;

struct DocumentState {
    blocks: Vec<Node>,
    /// Indices of selected top-level blocks. BTreeSet keeps document order.
    selected: BTreeSet<usize>,
}

/// Block-selection port over an owned list of top-level blocks.
pub struct InMemoryBlockSelection {
    state: Mutex<DocumentState>,
}

impl InMemoryBlockSelection {
    pub fn new(blocks: Vec<Node>) -> Self {
        Self {
            state: Mutex::new(DocumentState {
                blocks,
                selected: BTreeSet::new(),
            }),
        }
    }

    /// Select the blocks at the given top-level indices. Out-of-range
    /// indices are ignored.
    pub fn select(&self, indices: impl IntoIterator<Item = usize>) {
        let mut state = self.state.lock().unwrap();
        let len = state.blocks.len();
        state.selected = indices.into_iter().filter(|i| *i < len).collect();
    }

    pub fn clear_selection(&self) {
        self.state.lock().unwrap().selected.clear();
    }

    /// Current top-level blocks, in document order.
    pub fn blocks(&self) -> Vec<Node> {
        self.state.lock().unwrap().blocks.clone()
    }
}

impl BlockSelectionPort for InMemoryBlockSelection {
    fn selected_blocks(&self) -> Result<Vec<SelectedBlock>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .selected
            .iter()
            .map(|&i| SelectedBlock::new(state.blocks[i].clone(), vec![i]))
            .collect())
    }

    fn remove_selected(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let selected = std::mem::take(&mut state.selected);
        let mut index = 0;
        state.blocks.retain(|_| {
            let keep = !selected.contains(&index);
            index += 1;
            keep
        });
        Ok(())
    }
}
