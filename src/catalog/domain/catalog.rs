use serde::{Deserialize, Serialize};

use super::ToolEntry;

/// The consolidated catalogue envelope (`tools.json`).
///
/// Key order is fixed by field declaration order: `$schema`,
/// `specVersion`, `last_updated`, optional `license`, `tools`. The
/// licence block only appears in catalogues produced by `assemble`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<CatalogLicense>,
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

/// Licence metadata attached to assembled catalogues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLicense {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl CatalogLicense {
    /// The catalogue content licence, CC BY-SA 4.0.
    pub fn cc_by_sa_4() -> Self {
        Self {
            id: "CC-BY-SA-4.0".to_string(),
            name: "Creative Commons Attribution-ShareAlike 4.0 International".to_string(),
            url: "https://creativecommons.org/licenses/by-sa/4.0/".to_string(),
        }
    }
}

/// The per-tool document wrapper (`tools/<name>.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    pub tool: ToolEntry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CATALOG_SCHEMA_URI, SPEC_VERSION, TOOL_SCHEMA_URI};

    #[test]
    fn test_catalog_key_order() {
        let catalog = Catalog {
            schema: CATALOG_SCHEMA_URI.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            last_updated: "2025-01-01T00:00:00Z".to_string(),
            license: Some(CatalogLicense::cc_by_sa_4()),
            tools: vec![],
        };
        let json = serde_json::to_string(&catalog).unwrap();
        let schema_pos = json.find("\"$schema\"").unwrap();
        let version_pos = json.find("\"specVersion\"").unwrap();
        let updated_pos = json.find("\"last_updated\"").unwrap();
        let license_pos = json.find("\"license\"").unwrap();
        let tools_pos = json.find("\"tools\"").unwrap();
        assert!(schema_pos < version_pos);
        assert!(version_pos < updated_pos);
        assert!(updated_pos < license_pos);
        assert!(license_pos < tools_pos);
    }

    #[test]
    fn test_catalog_without_license_omits_key() {
        let catalog = Catalog {
            schema: CATALOG_SCHEMA_URI.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            last_updated: "2025-01-01T00:00:00Z".to_string(),
            license: None,
            tools: vec![],
        };
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(!json.contains("\"license\""));
    }

    #[test]
    fn test_catalog_deserializes_without_license() {
        let json = format!(
            r#"{{"$schema": "{}", "specVersion": "2.0", "last_updated": "2025-01-01T00:00:00Z", "tools": []}}"#,
            CATALOG_SCHEMA_URI
        );
        let catalog: Catalog = serde_json::from_str(&json).unwrap();
        assert!(catalog.license.is_none());
        assert!(catalog.tools.is_empty());
    }

    #[test]
    fn test_tool_document_shape() {
        let doc = ToolDocument {
            schema: TOOL_SCHEMA_URI.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            tool: ToolEntry {
                name: "trivy".to_string(),
                ..ToolEntry::default()
            },
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("tool-center-v2.tool.schema.json"));
        assert!(json.contains("\"tool\":{\"name\":\"trivy\""));
    }

    #[test]
    fn test_cc_by_sa_license_constant() {
        let license = CatalogLicense::cc_by_sa_4();
        assert_eq!(license.id, "CC-BY-SA-4.0");
        assert!(license.url.contains("by-sa/4.0"));
    }
}
