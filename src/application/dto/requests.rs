use std::path::PathBuf;

/// Request to convert a v1 text catalogue into a consolidated v2 document.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConvertRequest {
    pub fn new(source_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            source_path,
            output_path,
        }
    }
}

/// Request to split a consolidated catalogue into per-tool documents.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub catalog_path: PathBuf,
    pub tools_dir: PathBuf,
}

impl SplitRequest {
    pub fn new(catalog_path: PathBuf, tools_dir: PathBuf) -> Self {
        Self {
            catalog_path,
            tools_dir,
        }
    }
}

/// Request to assemble per-tool documents into a consolidated catalogue.
#[derive(Debug, Clone)]
pub struct AssembleRequest {
    pub tools_dir: PathBuf,
    pub output_path: PathBuf,
}

impl AssembleRequest {
    pub fn new(tools_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            tools_dir,
            output_path,
        }
    }
}
