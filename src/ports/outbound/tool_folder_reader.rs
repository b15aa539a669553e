use crate::shared::Result;
use std::path::Path;

/// ToolFolderReader port for enumerating per-tool documents
///
/// Abstracts "enumerate all per-tool JSON documents in a directory,
/// sorted by file name". An empty directory yields an empty list, not
/// an error.
pub trait ToolFolderReader {
    /// Returns `(file_name, content)` pairs for every `.json` document
    /// in `dir`, sorted by file name.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read or any document
    /// in it cannot be read.
    fn list_tool_documents(&self, dir: &Path) -> Result<Vec<(String, String)>>;
}
