//! HTTP DTOs for document generation endpoints.

use serde::Deserialize;

use crate::domain::document::{DocumentType, FieldMap};

/// Request to generate a document.
///
/// Mirrors the browser contract: `type` selects the schema, `data`
/// carries the raw form fields and `isShort` picks the wording length.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDocxRequest {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub data: FieldMap,
    #[serde(rename = "isShort", default)]
    pub is_short: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_deserializes_wire_names() {
        let json = r#"{"type": "company", "data": {"companyName": "شركة"}, "isShort": true}"#;
        let req: GenerateDocxRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.document_type, DocumentType::Company);
        assert_eq!(req.data.get("companyName").map(String::as_str), Some("شركة"));
        assert!(req.is_short);
    }

    #[test]
    fn is_short_defaults_to_false_when_absent() {
        let json = r#"{"type": "personal", "data": {}}"#;
        let req: GenerateDocxRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.document_type, DocumentType::Personal);
        assert!(!req.is_short);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{"type": "partnership", "data": {}}"#;
        let result = serde_json::from_str::<GenerateDocxRequest>(json);
        assert!(result.is_err());
    }
}
