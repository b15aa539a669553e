//! Conversion configuration and Tool Center schema constants.
//!
//! Everything that was a module-level constant in earlier incarnations of
//! the converter lives here as explicit, immutable configuration that gets
//! passed into the mapper and assembler.

use crate::catalog::services::schema_mapper::CategoryTable;

/// `$schema` URI written into consolidated catalogue documents.
pub const CATALOG_SCHEMA_URI: &str =
    "https://cyclonedx.org/schema/tool-center-v2.schema.json";

/// `$schema` URI written into per-tool documents.
pub const TOOL_SCHEMA_URI: &str =
    "https://cyclonedx.org/schema/tool-center-v2.tool.schema.json";

/// Tool Center specification version emitted by this converter.
pub const SPEC_VERSION: &str = "2.0";

/// Hard cap on description length, counted in characters (not bytes).
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Immutable configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// When true, every tool carries all nine reserved arrays as empty
    /// arrays; when false, none of them are written.
    pub include_empty_arrays: bool,
    /// Maximum description length in characters; longer descriptions are
    /// hard-cut with no ellipsis.
    pub max_description_len: usize,
    /// Category label lookup table used by the schema mapper.
    pub category_table: CategoryTable,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            include_empty_arrays: true,
            max_description_len: MAX_DESCRIPTION_LEN,
            category_table: CategoryTable::default(),
        }
    }
}
