//! Compliance document decoding

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::ComplianceDocument;
use crate::error::{MarkupError, MarkupResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn is_document_file(path: &Path) -> bool {
    DocumentFormat::from_path(path).is_some()
}

/// Decode a document from text
pub fn parse_document_str(
    source_id: &str,
    content: &str,
    format: DocumentFormat,
) -> MarkupResult<ComplianceDocument> {
    let parse_error = |message: String| MarkupError::DocumentParse {
        source_id: source_id.to_string(),
        message,
    };
    let body: Value = match format {
        DocumentFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    if !body.is_object() {
        return Err(parse_error("top level is not a mapping".to_string()));
    }

    Ok(ComplianceDocument::new(source_id, body))
}

/// Read and decode a document file
pub fn parse_document(path: &Path) -> MarkupResult<ComplianceDocument> {
    let source_id = path.display().to_string();
    let format = DocumentFormat::from_path(path).ok_or_else(|| MarkupError::DocumentParse {
        source_id: source_id.clone(),
        message: "unsupported file extension".to_string(),
    })?;
    let content = std::fs::read_to_string(path)?;
    parse_document_str(&source_id, &content, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_and_json_decode_to_the_same_body() {
        let yaml = parse_document_str(
            "a.yaml",
            "version: 2.0.0\nprofiles:\n  base:\n    checks:\n      c1: true\n",
            DocumentFormat::Yaml,
        )
        .unwrap();
        let json = parse_document_str(
            "a.json",
            r#"{"version": "2.0.0", "profiles": {"base": {"checks": {"c1": true}}}}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(yaml.body(), json.body());
        assert!(yaml.is_supported());
    }

    #[test]
    fn non_mapping_top_level_is_rejected() {
        let err = parse_document_str("a.yaml", "- 1\n- 2\n", DocumentFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("top level is not a mapping"));
    }

    #[test]
    fn syntax_errors_name_the_source() {
        let err = parse_document_str("broken.json", "{", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), Some(DocumentFormat::Json));
        assert!(!is_document_file(Path::new("README.md")));
    }
}
