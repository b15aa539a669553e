//! Mock implementations of the outbound ports for use-case tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use toolcenter_convert::prelude::*;

/// SourceReader backed by an in-memory string, or configured as missing.
pub struct MockSourceReader {
    content: Option<String>,
}

impl MockSourceReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl SourceReader for MockSourceReader {
    fn read_source(&self, path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(ConvertError::SourceNotFound {
                path: path.to_path_buf(),
                suggestion: "mock source configured as missing".to_string(),
            }
            .into()),
        }
    }
}

/// DocumentWriter that records every written document in memory.
#[derive(Default)]
pub struct MockDocumentWriter {
    written: RefCell<Vec<(PathBuf, String)>>,
}

impl MockDocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.written.borrow().clone()
    }

    pub fn single_document(&self) -> String {
        let written = self.written.borrow();
        assert_eq!(written.len(), 1, "expected exactly one written document");
        written[0].1.clone()
    }
}

impl DocumentWriter for MockDocumentWriter {
    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        self.written
            .borrow_mut()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

// Use cases take their ports by value; a reference impl lets a test hand
// the use case `&writer` and still inspect the recorded documents after.
impl DocumentWriter for &MockDocumentWriter {
    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_document(path, content)
    }
}

/// ToolFolderReader backed by in-memory documents; sorts like the real one.
pub struct MockToolFolderReader {
    documents: Vec<(String, String)>,
}

impl MockToolFolderReader {
    pub fn new(documents: Vec<(String, String)>) -> Self {
        Self { documents }
    }
}

impl ToolFolderReader for MockToolFolderReader {
    fn list_tool_documents(&self, _dir: &Path) -> Result<Vec<(String, String)>> {
        let mut documents = self.documents.clone();
        documents.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(documents)
    }
}

/// ProgressReporter that records messages for assertions.
#[derive(Default)]
pub struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
