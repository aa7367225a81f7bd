//! In-process adapters for the core ports.

mod selection_adapter;

pub use selection_adapter::InMemoryBlockSelection;
