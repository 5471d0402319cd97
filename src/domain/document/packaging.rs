//! Packaging of rendered document bytes into a named download.

use thiserror::Error;

use super::schema::ValidatedFields;
use super::selection::DocumentType;

/// MIME type of a Word document in the OOXML container format.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Errors from assembling a download package.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("Field '{field}' is required to derive the download filename")]
    MissingEnglishName { field: &'static str },
}

impl PackageError {
    pub fn missing_english_name(field: &'static str) -> Self {
        PackageError::MissingEnglishName { field }
    }
}

/// A rendered document ready to hand to a client as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPackage {
    bytes: Vec<u8>,
    filename: String,
}

impl DownloadPackage {
    /// The rendered document bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The attachment filename, `"<english name> POA.docx"`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The fixed OOXML content type.
    pub fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    /// Consumes self, returning the document bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Derives the download name and content type for rendered bytes.
pub struct DownloadPackager;

impl DownloadPackager {
    /// Wraps rendered bytes into a package named after the English name
    /// field of the document's subject.
    ///
    /// The schemas require that field, so a snapshot produced by
    /// validation always packages; only hand-built field maps can fail.
    pub fn package(
        bytes: Vec<u8>,
        document_type: DocumentType,
        fields: &ValidatedFields,
    ) -> Result<DownloadPackage, PackageError> {
        let name_field = Self::english_name_field(document_type);
        let english = fields
            .get(name_field)
            .filter(|name| !name.is_empty())
            .ok_or(PackageError::missing_english_name(name_field))?;

        Ok(DownloadPackage {
            bytes,
            filename: format!("{} POA.docx", english),
        })
    }

    /// The field carrying the subject's English name for a document type.
    pub fn english_name_field(document_type: DocumentType) -> &'static str {
        match document_type {
            DocumentType::Company => "companyNameEnglish",
            DocumentType::Personal => "fullNameEnglish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::schema::FieldMap;

    fn fields(entries: &[(&str, &str)]) -> ValidatedFields {
        let map: FieldMap = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ValidatedFields::reconstitute(map)
    }

    #[test]
    fn company_package_uses_english_company_name() {
        let fields = fields(&[("companyName", "شركة"), ("companyNameEnglish", "Acme")]);
        let package =
            DownloadPackager::package(vec![1, 2, 3], DocumentType::Company, &fields).unwrap();

        assert_eq!(package.filename(), "Acme POA.docx");
        assert_eq!(package.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn personal_package_uses_english_full_name() {
        let fields = fields(&[("fullName", "محمد"), ("fullNameEnglish", "Mohammed")]);
        let package =
            DownloadPackager::package(vec![0], DocumentType::Personal, &fields).unwrap();

        assert_eq!(package.filename(), "Mohammed POA.docx");
    }

    #[test]
    fn content_type_is_the_fixed_ooxml_type() {
        let fields = fields(&[("fullNameEnglish", "Sara")]);
        let package = DownloadPackager::package(vec![], DocumentType::Personal, &fields).unwrap();

        assert_eq!(
            package.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn missing_english_name_fails() {
        let fields = fields(&[("companyName", "شركة")]);
        let err = DownloadPackager::package(vec![], DocumentType::Company, &fields).unwrap_err();

        assert_eq!(
            err,
            PackageError::MissingEnglishName { field: "companyNameEnglish" }
        );
    }

    #[test]
    fn empty_english_name_fails() {
        let fields = fields(&[("fullNameEnglish", "")]);
        let err = DownloadPackager::package(vec![], DocumentType::Personal, &fields).unwrap_err();

        assert!(matches!(err, PackageError::MissingEnglishName { .. }));
    }
}
