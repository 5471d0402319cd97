//! DOCX rendering adapters.

mod archive;
mod renderer;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use archive::{DocxArchive, DOCUMENT_PART};
pub use renderer::PlaceholderDocxRenderer;
