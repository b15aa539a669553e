/// One entry as reconstructed from the legacy v1 text format.
///
/// RawRecord is transient: it exists between the record parser and the
/// schema mapper and never appears in any output document. Fields other
/// than the name are optional because the legacy format never enforced
/// them; categories keep insertion order and may contain duplicates,
/// which the mapper resolves later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub name: String,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub website_url: Option<String>,
    pub categories: Vec<String>,
}

impl RawRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
