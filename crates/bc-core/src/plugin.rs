//! Block-selection plugin configuration and render contract.
//!
//! [`BlockSelectionOptions`] is what the host editor registers the plugin
//! with; [`selection_overlay`] is the render override it installs, mapping
//! a selectable element's layout to a highlight decoration.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::node::Node;

/// Marker class the editor stamps on DOM-backed nodes that participate in
/// block selection.
pub const SELECTABLE_CLASS: &str = "slate-selectable";

/// Configuration for the block-selection plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockSelectionOptions {
    /// Right-click context menu on selected blocks.
    #[serde(default = "default_true")]
    pub enable_context_menu: bool,

    /// Block kinds excluded from individual selectability.
    #[serde(default = "default_non_selectable_kinds")]
    pub non_selectable_kinds: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_non_selectable_kinds() -> Vec<String> {
    keys::STRUCTURAL_KINDS.iter().map(|k| k.to_string()).collect()
}

impl Default for BlockSelectionOptions {
    fn default() -> Self {
        Self {
            enable_context_menu: default_true(),
            non_selectable_kinds: default_non_selectable_kinds(),
        }
    }
}

impl BlockSelectionOptions {
    /// Whether a node may be individually selected. Nodes without a
    /// declared kind are selectable.
    pub fn is_selectable(&self, node: &Node) -> bool {
        match node.kind() {
            Some(kind) => !self.non_selectable_kinds.iter().any(|k| k == kind),
            None => true,
        }
    }
}

/// Layout attributes of a rendered, DOM-backed element, as handed to the
/// render override by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementLayout {
    /// CSS classes present on the element.
    pub class_names: Vec<String>,

    /// Element rectangle, relative to its positioned ancestor.
    pub rect: LayoutRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Selection-highlight decoration drawn beneath a selected block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOverlay {
    pub rect: LayoutRect,
}

/// Render override: a highlight overlay for elements carrying the
/// selectable marker class, nothing for everything else.
pub fn selection_overlay(layout: &ElementLayout) -> Option<SelectionOverlay> {
    if !layout.class_names.iter().any(|c| c == SELECTABLE_CLASS) {
        return None;
    }
    Some(SelectionOverlay { rect: layout.rect })
}
