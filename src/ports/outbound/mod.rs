/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system and the console.
pub mod document_writer;
pub mod progress_reporter;
pub mod source_reader;
pub mod tool_folder_reader;

pub use document_writer::DocumentWriter;
pub use progress_reporter::ProgressReporter;
pub use source_reader::SourceReader;
pub use tool_folder_reader::ToolFolderReader;
