use anyhow::Context;

use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::catalog::domain::ToolEntry;
use crate::catalog::services::{parse_records, CatalogAssembler, SchemaMapper};
use crate::config::ConvertConfig;
use crate::ports::outbound::{DocumentWriter, ProgressReporter, SourceReader};
use crate::shared::Result;

/// ConvertCatalogUseCase - v1 text catalogue to consolidated v2 JSON
///
/// Orchestrates the one-way pipeline: raw lines -> records -> schema
/// objects -> envelope -> serialized document. No stage reads back its
/// own output.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation
/// * `DW` - DocumentWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertCatalogUseCase<SR, DW, PR> {
    source_reader: SR,
    document_writer: DW,
    progress_reporter: PR,
    config: ConvertConfig,
}

impl<SR, DW, PR> ConvertCatalogUseCase<SR, DW, PR>
where
    SR: SourceReader,
    DW: DocumentWriter,
    PR: ProgressReporter,
{
    pub fn new(
        source_reader: SR,
        document_writer: DW,
        progress_reporter: PR,
        config: ConvertConfig,
    ) -> Self {
        Self {
            source_reader,
            document_writer,
            progress_reporter,
            config,
        }
    }

    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading v1 catalogue from: {}",
            request.source_path.display()
        ));
        let source = self.source_reader.read_source(&request.source_path)?;

        let records = parse_records(&source);
        self.progress_reporter
            .report(&format!("✅ Parsed {} tool record(s)", records.len()));

        let mapper = SchemaMapper::new(&self.config);
        let tools: Vec<ToolEntry> = records.iter().map(|record| mapper.map(record)).collect();

        let catalog = CatalogAssembler::new(&self.config).assemble(tools);
        let content = serde_json::to_string_pretty(&catalog)
            .context("Failed to serialize the consolidated catalogue")?;

        self.document_writer
            .write_document(&request.output_path, &content)?;

        Ok(ConvertResponse {
            tool_count: catalog.tools.len(),
            last_updated: catalog.last_updated,
        })
    }
}
