use crate::shared::Result;
use std::path::Path;

/// DocumentWriter port for writing serialized documents
///
/// Abstracts "write a JSON document to a path, overwriting any existing
/// content". Serialization happens before this port is invoked, so a
/// run never leaves a half-written document behind on a logic error.
pub trait DocumentWriter {
    /// Writes `content` to `path`, replacing whatever was there.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written.
    fn write_document(&self, path: &Path, content: &str) -> Result<()>;
}
