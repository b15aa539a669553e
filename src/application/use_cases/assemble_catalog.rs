use anyhow::Context;

use crate::application::dto::{AssembleRequest, AssembleResponse};
use crate::catalog::domain::{Catalog, CatalogLicense, ToolDocument};
use crate::catalog::services::current_timestamp;
use crate::config::{CATALOG_SCHEMA_URI, SPEC_VERSION};
use crate::ports::outbound::{DocumentWriter, ProgressReporter, ToolFolderReader};
use crate::shared::error::ConvertError;
use crate::shared::Result;

/// AssembleCatalogUseCase - per-tool documents to consolidated catalogue
///
/// Reads every per-tool document in file-name order, records where each
/// tool came from in `_fromFile`, and wraps the lot in a fresh envelope
/// with the catalogue licence block.
pub struct AssembleCatalogUseCase<TFR, DW, PR> {
    folder_reader: TFR,
    document_writer: DW,
    progress_reporter: PR,
}

impl<TFR, DW, PR> AssembleCatalogUseCase<TFR, DW, PR>
where
    TFR: ToolFolderReader,
    DW: DocumentWriter,
    PR: ProgressReporter,
{
    pub fn new(folder_reader: TFR, document_writer: DW, progress_reporter: PR) -> Self {
        Self {
            folder_reader,
            document_writer,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: AssembleRequest) -> Result<AssembleResponse> {
        let documents = self.folder_reader.list_tool_documents(&request.tools_dir)?;

        let mut tools = Vec::with_capacity(documents.len());
        for (file_name, content) in documents {
            self.progress_reporter
                .report(&format!("loading {} ...", file_name));
            let document: ToolDocument =
                serde_json::from_str(&content).map_err(|e| ConvertError::CatalogParseError {
                    path: request.tools_dir.join(&file_name),
                    details: e.to_string(),
                })?;
            let mut tool = document.tool;
            tool.from_file = Some(file_name);
            tools.push(tool);
        }

        let catalog = Catalog {
            schema: CATALOG_SCHEMA_URI.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            last_updated: current_timestamp(),
            license: Some(CatalogLicense::cc_by_sa_4()),
            tools,
        };

        self.progress_reporter
            .report(&format!("writing {} ...", request.output_path.display()));
        let serialized = serde_json::to_string_pretty(&catalog)
            .context("Failed to serialize the consolidated catalogue")?;
        self.document_writer
            .write_document(&request.output_path, &serialized)?;

        Ok(AssembleResponse {
            tool_count: catalog.tools.len(),
            last_updated: catalog.last_updated,
        })
    }
}
