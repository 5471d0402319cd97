//! HTTP DTOs for history endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::document::{DocumentType, FieldMap};
use crate::domain::foundation::Timestamp;
use crate::domain::history::GeneratedDocumentRecord;

/// Query parameters for listing history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    /// Case-insensitive search term; absent means list everything.
    pub q: Option<String>,
}

/// A history record as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecordResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    #[serde(rename = "isShort")]
    pub is_short: bool,
    pub data: FieldMap,
    pub timestamp: Timestamp,
}

impl From<GeneratedDocumentRecord> for HistoryRecordResponse {
    fn from(record: GeneratedDocumentRecord) -> Self {
        Self {
            id: record.id().to_string(),
            document_type: record.document_type(),
            is_short: record.length_variant().is_short(),
            data: record.fields().as_map().clone(),
            timestamp: *record.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{LengthVariant, ValidatedFields};

    #[test]
    fn record_response_uses_wire_field_names() {
        let mut fields = FieldMap::new();
        fields.insert("fullName".into(), "محمد".into());
        let record = GeneratedDocumentRecord::new(
            DocumentType::Personal,
            LengthVariant::Short,
            ValidatedFields::reconstitute(fields),
        );
        let expected_id = record.id().to_string();

        let response: HistoryRecordResponse = record.into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], serde_json::json!(expected_id));
        assert_eq!(json["type"], serde_json::json!("personal"));
        assert_eq!(json["isShort"], serde_json::json!(true));
        assert_eq!(json["data"]["fullName"], serde_json::json!("محمد"));
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn history_query_tolerates_missing_term() {
        let query: HistoryQuery = serde_json::from_str("{}").unwrap();
        assert!(query.q.is_none());
    }
}
