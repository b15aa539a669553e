use crate::ports::outbound::DocumentWriter;
use crate::shared::error::ConvertError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemWriter adapter for writing documents to files
///
/// Overwrites existing content. One instance writes any number of
/// documents (split produces one per tool).
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(ConvertError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Security validation before writing: refuse to follow a symlink at
    /// the destination.
    fn validate_output_security(&self, path: &Path) -> Result<()> {
        if path.exists() {
            let metadata =
                fs::symlink_metadata(path).map_err(|e| ConvertError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Failed to read file metadata: {}", e),
                })?;

            if metadata.is_symlink() {
                return Err(ConvertError::SecurityError {
                    path: path.to_path_buf(),
                    reason: "Output path is a symbolic link".to_string(),
                    hint: "For security reasons, writing through symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for FileSystemWriter {
    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        self.validate_parent_directory(path)?;
        self.validate_output_security(path)?;

        fs::write(path, content).map_err(|e| {
            ConvertError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
