//! BlockClip Application Orchestration Layer
//!
//! This crate contains the block-selection use cases and the key handler
//! that dispatches to them while the editor is in block-selecting mode.

pub mod adapters;
pub mod deps;
pub mod handler;
pub mod plugin;
pub mod use_cases;

pub use deps::KitDeps;
pub use handler::{KeyDispatch, SelectingKeyHandler};
pub use plugin::BlockSelectionKit;
pub use use_cases::{CopySelection, CutSelection};
