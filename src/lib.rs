//! toolcenter-convert - CycloneDX Tool Center catalogue converter
//!
//! This library converts the Tool Center catalogue between three
//! representations: the legacy v1 line-oriented text format, the
//! consolidated v2 JSON document, and the one-file-per-tool JSON layout.
//! It follows hexagonal architecture: pure conversion logic in the core,
//! file system and console access behind ports.
//!
//! # Architecture
//!
//! - **Domain Layer** (`catalog`): record parser, schema mapper, envelope
//!   assembler, and the catalogue data model
//! - **Application Layer** (`application`): the convert, split, and
//!   assemble use cases
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use toolcenter_convert::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertCatalogUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//!     ConvertConfig::default(),
//! );
//!
//! let request = ConvertRequest::new(PathBuf::from("tools.yaml"), PathBuf::from("tools.json"));
//! let response = use_case.execute(request)?;
//! eprintln!("converted {} tool(s)", response.tool_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::application::dto::{
        AssembleRequest, AssembleResponse, ConvertRequest, ConvertResponse, SplitRequest,
        SplitResponse,
    };
    pub use crate::application::use_cases::{
        tool_file_name, AssembleCatalogUseCase, ConvertCatalogUseCase, SplitCatalogUseCase,
    };
    pub use crate::catalog::domain::{Catalog, CatalogLicense, RawRecord, ToolDocument, ToolEntry};
    pub use crate::catalog::services::{
        current_timestamp, parse_records, CatalogAssembler, CategoryTable, SchemaMapper,
    };
    pub use crate::cli::{Args, Command};
    pub use crate::config::{
        ConvertConfig, CATALOG_SCHEMA_URI, MAX_DESCRIPTION_LEN, SPEC_VERSION, TOOL_SCHEMA_URI,
    };
    pub use crate::ports::outbound::{
        DocumentWriter, ProgressReporter, SourceReader, ToolFolderReader,
    };
    pub use crate::shared::error::{ConvertError, ExitCode};
    pub use crate::shared::Result;
}
