//! Wraps mapped tool entries in the consolidated catalogue envelope.

use chrono::Utc;

use crate::catalog::domain::{Catalog, ToolEntry};
use crate::config::{ConvertConfig, CATALOG_SCHEMA_URI, SPEC_VERSION};

/// Current UTC time at second precision, `Z`-suffixed.
///
/// Computed once per run and shared by everything that needs a
/// generation timestamp.
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// CatalogAssembler - builds the output envelope
///
/// Attaches the reserved arrays according to the single configuration
/// flag: all nine as empty arrays, or none at all. The flag is not a
/// per-field decision since nothing populates them at this stage.
pub struct CatalogAssembler<'a> {
    config: &'a ConvertConfig,
}

impl<'a> CatalogAssembler<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    pub fn assemble(&self, mut tools: Vec<ToolEntry>) -> Catalog {
        if self.config.include_empty_arrays {
            for tool in &mut tools {
                attach_reserved_arrays(tool);
            }
        }

        Catalog {
            schema: CATALOG_SCHEMA_URI.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            last_updated: current_timestamp(),
            license: None,
            tools,
        }
    }
}

fn attach_reserved_arrays(tool: &mut ToolEntry) {
    tool.capabilities = Some(Vec::new());
    tool.analysis = Some(Vec::new());
    tool.transform = Some(Vec::new());
    tool.library = Some(Vec::new());
    tool.platform = Some(Vec::new());
    tool.lifecycle = Some(Vec::new());
    tool.supported_standards = Some(Vec::new());
    tool.cyclonedx_version = Some(Vec::new());
    tool.supported_languages = Some(Vec::new());
}
