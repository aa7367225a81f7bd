//! Well-known block kind identifiers.
//!
//! These mirror the kind tags the editor assigns to its built-in blocks.
//! Only the kinds this crate makes decisions about are listed.

pub const PARAGRAPH: &str = "p";
pub const COLUMN: &str = "column";
pub const CODE_LINE: &str = "code_line";
pub const TABLE_CELL: &str = "td";

/// Structural container kinds that are never individually selectable:
/// selecting their enclosing block is the intended granularity.
pub const STRUCTURAL_KINDS: [&str; 3] = [COLUMN, CODE_LINE, TABLE_CELL];
