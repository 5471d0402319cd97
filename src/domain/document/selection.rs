//! Document taxonomy and template selection.
//!
//! A power of attorney is generated for either a company or an individual,
//! in a short or a full wording. Each of the four combinations binds into
//! its own template asset; the mapping is total, so an unknown combination
//! can only enter the system as an unparseable wire string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for a document type string that names no known kind of
/// power of attorney.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown document type combination: '{value}'")]
pub struct UnknownCombination {
    value: String,
}

impl UnknownCombination {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// The party a power of attorney is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Company,
    Personal,
}

impl DocumentType {
    /// Returns both document types.
    pub fn all() -> &'static [DocumentType] {
        &[DocumentType::Company, DocumentType::Personal]
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Company => "company",
            DocumentType::Personal => "personal",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Company => "Company",
            DocumentType::Personal => "Personal",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = UnknownCombination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(DocumentType::Company),
            "personal" => Ok(DocumentType::Personal),
            other => Err(UnknownCombination::new(other)),
        }
    }
}

/// Wording length of the generated document.
///
/// The wire and the persisted log carry this as the `isShort` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthVariant {
    Short,
    Full,
}

impl LengthVariant {
    /// Maps the wire flag to a variant.
    pub fn from_is_short(is_short: bool) -> Self {
        if is_short {
            LengthVariant::Short
        } else {
            LengthVariant::Full
        }
    }

    /// Returns the wire flag for this variant.
    pub fn is_short(&self) -> bool {
        matches!(self, LengthVariant::Short)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LengthVariant::Short => "Short",
            LengthVariant::Full => "Full",
        }
    }
}

impl Default for LengthVariant {
    fn default() -> Self {
        LengthVariant::Full
    }
}

impl fmt::Display for LengthVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Serde helper for fields that carry a [`LengthVariant`] as the `isShort`
/// boolean, for use with `#[serde(with = "as_is_short")]`.
pub mod as_is_short {
    use super::LengthVariant;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(variant: &LengthVariant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(variant.is_short())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<LengthVariant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let is_short = bool::deserialize(deserializer)?;
        Ok(LengthVariant::from_is_short(is_short))
    }
}

/// Identifier of one of the four template assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    CompanyFull,
    CompanyShort,
    PersonalFull,
    PersonalShort,
}

impl TemplateId {
    /// Selects the template for a document type and length variant.
    ///
    /// The mapping is total: every combination yields a template, and the
    /// four outputs are pairwise distinct.
    pub fn select(document_type: DocumentType, variant: LengthVariant) -> Self {
        match (document_type, variant) {
            (DocumentType::Company, LengthVariant::Full) => TemplateId::CompanyFull,
            (DocumentType::Company, LengthVariant::Short) => TemplateId::CompanyShort,
            (DocumentType::Personal, LengthVariant::Full) => TemplateId::PersonalFull,
            (DocumentType::Personal, LengthVariant::Short) => TemplateId::PersonalShort,
        }
    }

    /// Returns all template identifiers.
    pub fn all() -> &'static [TemplateId] {
        &[
            TemplateId::CompanyFull,
            TemplateId::CompanyShort,
            TemplateId::PersonalFull,
            TemplateId::PersonalShort,
        ]
    }

    /// Returns the file name of the template asset.
    pub fn asset_file(&self) -> &'static str {
        match self {
            TemplateId::CompanyFull => "company-full.docx",
            TemplateId::CompanyShort => "company-short.docx",
            TemplateId::PersonalFull => "personal-full.docx",
            TemplateId::PersonalShort => "personal-short.docx",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemplateId::CompanyFull => "company-full",
            TemplateId::CompanyShort => "company-short",
            TemplateId::PersonalFull => "personal-full",
            TemplateId::PersonalShort => "personal-short",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn document_type_parses_wire_names() {
        assert_eq!("company".parse::<DocumentType>().unwrap(), DocumentType::Company);
        assert_eq!("personal".parse::<DocumentType>().unwrap(), DocumentType::Personal);
    }

    #[test]
    fn document_type_rejects_unknown_names() {
        let err = "corporate".parse::<DocumentType>().unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Unknown document type combination: 'corporate'"
        );
    }

    #[test]
    fn document_type_parse_is_case_sensitive() {
        assert!("Company".parse::<DocumentType>().is_err());
    }

    #[test]
    fn document_type_serializes_to_lowercase_json() {
        let json = serde_json::to_string(&DocumentType::Company).unwrap();
        assert_eq!(json, "\"company\"");
    }

    #[test]
    fn length_variant_maps_wire_flag() {
        assert_eq!(LengthVariant::from_is_short(true), LengthVariant::Short);
        assert_eq!(LengthVariant::from_is_short(false), LengthVariant::Full);
        assert!(LengthVariant::Short.is_short());
        assert!(!LengthVariant::Full.is_short());
    }

    #[test]
    fn length_variant_defaults_to_full() {
        assert_eq!(LengthVariant::default(), LengthVariant::Full);
    }

    #[test]
    fn select_covers_all_four_combinations() {
        assert_eq!(
            TemplateId::select(DocumentType::Company, LengthVariant::Full),
            TemplateId::CompanyFull
        );
        assert_eq!(
            TemplateId::select(DocumentType::Company, LengthVariant::Short),
            TemplateId::CompanyShort
        );
        assert_eq!(
            TemplateId::select(DocumentType::Personal, LengthVariant::Full),
            TemplateId::PersonalFull
        );
        assert_eq!(
            TemplateId::select(DocumentType::Personal, LengthVariant::Short),
            TemplateId::PersonalShort
        );
    }

    #[test]
    fn select_outputs_are_pairwise_distinct() {
        let mut seen = HashSet::new();
        for dt in DocumentType::all() {
            for variant in [LengthVariant::Short, LengthVariant::Full] {
                seen.insert(TemplateId::select(*dt, variant));
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn asset_files_are_pairwise_distinct() {
        let files: HashSet<_> = TemplateId::all().iter().map(|t| t.asset_file()).collect();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn as_is_short_roundtrips_through_json() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Probe {
            #[serde(rename = "isShort", with = "as_is_short")]
            variant: LengthVariant,
        }

        let json = serde_json::to_string(&Probe { variant: LengthVariant::Short }).unwrap();
        assert_eq!(json, "{\"isShort\":true}");

        let probe: Probe = serde_json::from_str("{\"isShort\":false}").unwrap();
        assert_eq!(probe.variant, LengthVariant::Full);
    }
}
