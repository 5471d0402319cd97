//! History domain module.
//!
//! A durable log of successfully generated documents. Records are
//! immutable snapshots captured at generation time; the log itself only
//! changes by prepending a new record, removing one record by id, or
//! clearing entirely.

use serde::{Deserialize, Serialize};

use crate::domain::document::selection::as_is_short;
use crate::domain::document::{DocumentType, LengthVariant, ValidatedFields};
use crate::domain::foundation::{RecordId, Timestamp};

/// A successfully generated document, captured at generation time.
///
/// # Invariants
///
/// - The field snapshot passed validation when the record was created.
/// - Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocumentRecord {
    /// Unique identifier of this record.
    id: RecordId,

    /// Which kind of power of attorney was generated.
    #[serde(rename = "type")]
    document_type: DocumentType,

    /// Wording length, persisted as the `isShort` flag.
    #[serde(rename = "isShort", with = "as_is_short", default)]
    length_variant: LengthVariant,

    /// The validated field snapshot the document was rendered from.
    #[serde(default)]
    data: ValidatedFields,

    /// When the document was generated.
    timestamp: Timestamp,
}

impl GeneratedDocumentRecord {
    /// Captures a record for a document that was just generated.
    pub fn new(
        document_type: DocumentType,
        length_variant: LengthVariant,
        fields: ValidatedFields,
    ) -> Self {
        Self {
            id: RecordId::new(),
            document_type,
            length_variant,
            data: fields,
            timestamp: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the record ID.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the document type.
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Returns the wording length variant.
    pub fn length_variant(&self) -> LengthVariant {
        self.length_variant
    }

    /// Returns the validated field snapshot.
    pub fn fields(&self) -> &ValidatedFields {
        &self.data
    }

    /// Returns when the document was generated.
    pub fn created_at(&self) -> &Timestamp {
        &self.timestamp
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// The lowercased text search terms are matched against.
    ///
    /// Company records expose the native and English company names plus the
    /// reference number; personal records the native and English full names
    /// plus the reference number. Missing fields contribute nothing.
    pub fn searchable_text(&self) -> String {
        let (native, english) = match self.document_type {
            DocumentType::Company => ("companyName", "companyNameEnglish"),
            DocumentType::Personal => ("fullName", "fullNameEnglish"),
        };
        let get = |name: &str| self.data.get(name).unwrap_or("");
        format!("{} {} {}", get(native), get(english), get("referenceNumber")).to_lowercase()
    }

    /// Returns true if `term` occurs in the searchable text, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        self.searchable_text().contains(&term.to_lowercase())
    }
}

/// Ordered log of generated documents, most recent first.
///
/// # Invariants
///
/// - Record ids are unique within the log.
/// - `append` places the new record at the front; existing order is
///   otherwise never rearranged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<GeneratedDocumentRecord>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prepends a record, making it the most recent entry.
    pub fn append(&mut self, record: GeneratedDocumentRecord) {
        self.records.insert(0, record);
    }

    /// Removes the record with `id`, returning true if one was removed.
    ///
    /// Removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns all records, most recent first.
    pub fn records(&self) -> &[GeneratedDocumentRecord] {
        &self.records
    }

    /// Returns the record with `id`, if present.
    pub fn find(&self, id: &RecordId) -> Option<&GeneratedDocumentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns records whose searchable text contains `term`, ignoring
    /// case and preserving log order. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&GeneratedDocumentRecord> {
        self.records.iter().filter(|r| r.matches(term)).collect()
    }

    /// Number of records in the log.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the log has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
