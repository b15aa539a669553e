use crate::ports::outbound::{SourceReader, ToolFolderReader};
use crate::shared::error::ConvertError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading documents from the file system
///
/// Implements both SourceReader and ToolFolderReader, covering the
/// consolidated-catalogue and per-tool-folder inputs.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| ConvertError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(ConvertError::SecurityError {
                path: path.to_path_buf(),
                reason: "The path is a symbolic link".to_string(),
                hint: "For security reasons, symbolic links are not allowed. Point the tool at the real file.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ConvertError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(ConvertError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("File is too large ({} bytes)", file_size),
                hint: format!("Maximum allowed size is {} bytes", MAX_FILE_SIZE),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            ConvertError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl SourceReader for FileSystemReader {
    fn read_source(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ConvertError::SourceNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The source document \"{}\" does not exist.\n   \
                     Please run in the catalogue repository root, or pass the correct path on the command line.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path)
    }
}

impl ToolFolderReader for FileSystemReader {
    fn list_tool_documents(&self, dir: &Path) -> Result<Vec<(String, String)>> {
        let entries = fs::read_dir(dir).map_err(|e| ConvertError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConvertError::FileReadError {
                path: dir.to_path_buf(),
                details: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(file_name.to_string());
            }
        }
        names.sort();

        let mut documents = Vec::with_capacity(names.len());
        for name in names {
            let content = self.safe_read_file(&dir.join(&name))?;
            documents.push((name, content));
        }

        Ok(documents)
    }
}
