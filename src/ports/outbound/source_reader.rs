use crate::shared::Result;
use std::path::Path;

/// SourceReader port for reading a source document
///
/// Abstracts "read all lines of the source text document". An absent or
/// unreadable source fails the whole run; there is no partial-success
/// mode.
pub trait SourceReader {
    /// Reads the full content of the document at `path`.
    ///
    /// # Errors
    /// Returns an error if the document does not exist or cannot be read.
    fn read_source(&self, path: &Path) -> Result<String>;
}
