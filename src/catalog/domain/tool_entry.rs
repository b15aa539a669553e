use serde::{Deserialize, Serialize};

/// One tool in the Tool Center v2 schema.
///
/// Field order matters: serde serializes struct fields in declaration
/// order, and the v2 schema expects name, publisher, description, the
/// three classification arrays, the optional URLs, then the reserved
/// arrays. The reserved arrays are `Option<Vec<String>>` so that one
/// configuration flag can switch between "present but empty" and
/// "absent" without a per-field decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub packaging: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    // Reserved arrays: always empty today, kept for future producers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Vec<String>>,
    #[serde(
        rename = "supportedStandards",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_standards: Option<Vec<String>>,
    #[serde(
        rename = "cycloneDxVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cyclonedx_version: Option<Vec<String>>,
    #[serde(
        rename = "supportedLanguages",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_languages: Option<Vec<String>>,

    /// Bookkeeping only: which per-tool file this entry was assembled
    /// from. Stripped before a tool is written back to its own file.
    #[serde(rename = "_fromFile", default, skip_serializing_if = "Option::is_none")]
    pub from_file: Option<String>,
}
