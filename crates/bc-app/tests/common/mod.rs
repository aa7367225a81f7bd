//! Shared port mocks for bc-app integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use bc_core::clipboard::ClipboardItem;
use bc_core::node::Node;
use bc_core::ports::{BlockSelectionPort, SystemClipboardPort};
use bc_core::selection::SelectedBlock;

/// Clipboard mock recording every write it receives.
pub struct RecordingClipboard {
    multi_format: bool,
    fail_multi_format: bool,
    pub writes: Mutex<Vec<Vec<ClipboardItem>>>,
    pub text_writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn multi_format() -> Self {
        Self {
            multi_format: true,
            fail_multi_format: false,
            writes: Mutex::new(Vec::new()),
            text_writes: Mutex::new(Vec::new()),
        }
    }

    pub fn plain_text_only() -> Self {
        Self {
            multi_format: false,
            ..Self::multi_format()
        }
    }

    /// Multi-format backend whose `write` always rejects.
    pub fn failing_multi_format() -> Self {
        Self {
            fail_multi_format: true,
            ..Self::multi_format()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn text_write_count(&self) -> usize {
        self.text_writes.lock().unwrap().len()
    }
}

#[async_trait]
impl SystemClipboardPort for RecordingClipboard {
    fn supports_multi_format(&self) -> bool {
        self.multi_format
    }

    async fn write(&self, items: Vec<ClipboardItem>) -> Result<()> {
        if self.fail_multi_format {
            return Err(anyhow!("simulated clipboard rejection"));
        }
        self.writes.lock().unwrap().push(items);
        Ok(())
    }

    async fn write_text(&self, text: String) -> Result<()> {
        self.text_writes.lock().unwrap().push(text);
        Ok(())
    }
}

/// Block-selection mock serving a fixed selection snapshot.
pub struct FixedSelection {
    blocks: Vec<SelectedBlock>,
    pub removals: AtomicUsize,
}

impl FixedSelection {
    pub fn of(nodes: Vec<Node>) -> Self {
        Self {
            blocks: nodes
                .into_iter()
                .enumerate()
                .map(|(i, node)| SelectedBlock::new(node, vec![i]))
                .collect(),
            removals: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::of(Vec::new())
    }

    pub fn removal_count(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }
}

impl BlockSelectionPort for FixedSelection {
    fn selected_blocks(&self) -> Result<Vec<SelectedBlock>> {
        Ok(self.blocks.clone())
    }

    fn remove_selected(&self) -> Result<()> {
        self.removals.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Poll until `condition` holds, failing the test after ~500ms.
pub async fn eventually(condition: impl Fn() -> bool) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not met within timeout");
}
