//! Block-selection use cases.

pub mod copy_selection;
pub mod cut_selection;

pub use copy_selection::CopySelection;
pub use cut_selection::CutSelection;
