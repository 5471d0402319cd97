//! Document domain module.
//!
//! Pure logic for turning a form submission into a named DOCX download:
//! field schemas and validation, the Arabic-script predicate, template
//! selection, and packaging of rendered bytes.

pub mod packaging;
pub mod schema;
pub mod script;
pub mod selection;

pub use packaging::{DownloadPackage, DownloadPackager, PackageError, DOCX_CONTENT_TYPE};
pub use schema::{FieldErrors, FieldMap, FormValidator, ValidatedFields};
pub use selection::{DocumentType, LengthVariant, TemplateId, UnknownCombination};
