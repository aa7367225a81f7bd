//! Block-selection kit: the wired-up plugin surface the host registers.

use bc_core::hotkey::KeyEvent;
use bc_core::node::Node;
use bc_core::plugin::{selection_overlay, BlockSelectionOptions, ElementLayout, SelectionOverlay};

use crate::deps::KitDeps;
use crate::handler::{KeyDispatch, SelectingKeyHandler};

/// Everything the host editor registers for block selection: the
/// configured options, the selecting-mode key handler, and the render
/// override drawing the selection highlight.
pub struct BlockSelectionKit {
    options: BlockSelectionOptions,
    handler: SelectingKeyHandler,
}

impl BlockSelectionKit {
    pub fn new(deps: KitDeps, options: BlockSelectionOptions) -> Self {
        Self {
            options,
            handler: SelectingKeyHandler::new(deps.selection, deps.clipboard, deps.ai_chat),
        }
    }

    pub fn options(&self) -> &BlockSelectionOptions {
        &self.options
    }

    /// Selectability predicate the host consults when entering
    /// block-selection mode.
    pub fn is_selectable(&self, node: &Node) -> bool {
        self.options.is_selectable(node)
    }

    /// Key handler for events arriving while a block selection is active.
    pub fn on_key_down_selecting(&self, event: &KeyEvent) -> KeyDispatch {
        self.handler.on_key_down(event)
    }

    /// Render override: a highlight decoration beneath selectable elements.
    pub fn below_root_nodes(&self, layout: &ElementLayout) -> Option<SelectionOverlay> {
        selection_overlay(layout)
    }
}
