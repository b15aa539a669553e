use anyhow::Context;

use crate::application::dto::{SplitRequest, SplitResponse};
use crate::catalog::domain::{Catalog, ToolDocument};
use crate::config::TOOL_SCHEMA_URI;
use crate::ports::outbound::{DocumentWriter, ProgressReporter, SourceReader};
use crate::shared::error::ConvertError;
use crate::shared::Result;

/// SplitCatalogUseCase - consolidated catalogue to one document per tool
///
/// Each tool becomes `{"$schema": ..., "specVersion": <inherited>,
/// "tool": ...}` in its own file. The `_fromFile` bookkeeping field and
/// null URL values never survive the split.
pub struct SplitCatalogUseCase<SR, DW, PR> {
    source_reader: SR,
    document_writer: DW,
    progress_reporter: PR,
}

impl<SR, DW, PR> SplitCatalogUseCase<SR, DW, PR>
where
    SR: SourceReader,
    DW: DocumentWriter,
    PR: ProgressReporter,
{
    pub fn new(source_reader: SR, document_writer: DW, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            document_writer,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: SplitRequest) -> Result<SplitResponse> {
        let content = self.source_reader.read_source(&request.catalog_path)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| ConvertError::CatalogParseError {
                path: request.catalog_path.clone(),
                details: e.to_string(),
            })?;

        let mut files_written = Vec::with_capacity(catalog.tools.len());
        for mut tool in catalog.tools {
            tool.from_file = None;
            let file_name = tool_file_name(&tool.name);
            self.progress_reporter
                .report(&format!("tool {} -> {}", tool.name, file_name));

            let document = ToolDocument {
                schema: TOOL_SCHEMA_URI.to_string(),
                spec_version: catalog.spec_version.clone(),
                tool,
            };
            let serialized = serde_json::to_string_pretty(&document)
                .with_context(|| format!("Failed to serialize per-tool document {}", file_name))?;

            self.document_writer
                .write_document(&request.tools_dir.join(&file_name), &serialized)?;
            files_written.push(file_name);
        }

        Ok(SplitResponse { files_written })
    }
}

/// Derives the per-tool file name from the tool name: runs of
/// non-alphanumeric characters collapse to a single underscore, the
/// result is lowercased.
pub fn tool_file_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_separator = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    format!("{}.json", slug)
}
