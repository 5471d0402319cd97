//! Form field schemas and validation.
//!
//! Each document type has a fixed schema of required fields. Validation
//! checks every field and reports all failures at once, so a caller can
//! surface the full set of problems next to the inputs that caused them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::script;
use super::selection::DocumentType;

/// Raw submitted form fields, keyed by field name.
///
/// A `BTreeMap` keeps iteration deterministic, so error reporting and
/// placeholder binding are stable across runs.
pub type FieldMap = BTreeMap<String, String>;

/// Validation rule applied to a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    /// Any non-empty string.
    FreeText,
    /// Non-empty Arabic-script text.
    ArabicText,
}

/// One required field in a document schema.
#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    name: &'static str,
    label: &'static str,
    rule: FieldRule,
}

const fn field(name: &'static str, label: &'static str, rule: FieldRule) -> FieldSpec {
    FieldSpec { name, label, rule }
}

const COMPANY_FIELDS: [FieldSpec; 8] = [
    field("companyName", "Company Name", FieldRule::ArabicText),
    field("companyNameEnglish", "Company Name (English)", FieldRule::FreeText),
    field("licenseNumber", "License Number", FieldRule::FreeText),
    field("issuingAuthority", "Issuing Authority", FieldRule::ArabicText),
    field("address", "Company Address", FieldRule::FreeText),
    field("representative", "Representative", FieldRule::ArabicText),
    field("nationality", "Nationality", FieldRule::ArabicText),
    field("idNumber", "ID Number", FieldRule::FreeText),
];

const PERSONAL_FIELDS: [FieldSpec; 4] = [
    field("fullName", "Full Name", FieldRule::ArabicText),
    field("fullNameEnglish", "Full Name (English)", FieldRule::FreeText),
    field("nationality", "Nationality", FieldRule::ArabicText),
    field("idNumber", "ID Number", FieldRule::FreeText),
];

/// Static storage for the per-type schemas.
static SCHEMAS: Lazy<HashMap<DocumentType, &'static [FieldSpec]>> = Lazy::new(|| {
    let mut map: HashMap<DocumentType, &'static [FieldSpec]> = HashMap::new();
    map.insert(DocumentType::Company, &COMPANY_FIELDS);
    map.insert(DocumentType::Personal, &PERSONAL_FIELDS);
    map
});

fn schema_fields(document_type: DocumentType) -> &'static [FieldSpec] {
    SCHEMAS
        .get(&document_type)
        .expect("Schema must exist for every document type")
}

/// Per-field messages for a rejected submission.
///
/// Every failing field is present, not just the first one found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    /// Returns the message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Fields that passed schema validation.
///
/// Extra submitted fields beyond the schema are retained unchanged, since
/// templates may reference optional values such as `referenceNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedFields(FieldMap);

impl ValidatedFields {
    /// Rebuilds validated fields from a stored snapshot.
    ///
    /// Only for data that already passed validation when it was recorded;
    /// fresh submissions go through [`FormValidator::validate`].
    pub fn reconstitute(fields: FieldMap) -> Self {
        Self(fields)
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the underlying field map.
    pub fn as_map(&self) -> &FieldMap {
        &self.0
    }

    /// Consumes self, returning the underlying field map.
    pub fn into_map(self) -> FieldMap {
        self.0
    }
}

/// Validates raw form submissions against the per-type schemas.
pub struct FormValidator;

impl FormValidator {
    /// Checks `fields` against the schema for `document_type`.
    ///
    /// A missing field and an empty string are treated the same way. On
    /// success the whole submission is captured, including any fields the
    /// schema does not mention.
    pub fn validate(
        document_type: DocumentType,
        fields: &FieldMap,
    ) -> Result<ValidatedFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        for spec in schema_fields(document_type) {
            let value = fields.get(spec.name).map(String::as_str).unwrap_or("");
            if value.is_empty() {
                errors.insert(spec.name, format!("{} is required", spec.label));
                continue;
            }
            if spec.rule == FieldRule::ArabicText && !script::is_arabic_text(value) {
                errors.insert(spec.name, "Only Arabic letters are allowed");
            }
        }

        if errors.is_empty() {
            Ok(ValidatedFields(fields.clone()))
        } else {
            Err(errors)
        }
    }
}
