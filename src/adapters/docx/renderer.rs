//! Placeholder-binding DOCX renderer.

use quick_xml::escape::escape;

use crate::adapters::docx::archive::DocxArchive;
use crate::domain::document::ValidatedFields;
use crate::ports::{DocumentRenderer, RenderError};

/// Renders DOCX templates by substituting `{fieldName}` placeholders.
///
/// Substitution covers the main document part plus any header and footer
/// parts; every other part passes through byte for byte. Values are
/// XML-escaped, so submitted text can never break the document markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderDocxRenderer;

impl PlaceholderDocxRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PlaceholderDocxRenderer {
    fn render(&self, template: &[u8], fields: &ValidatedFields) -> Result<Vec<u8>, RenderError> {
        let mut archive = DocxArchive::from_bytes(template)?;

        for path in archive.text_part_paths() {
            let bytes = match archive.get(&path) {
                Some(bytes) => bytes.to_vec(),
                None => continue,
            };
            let xml = String::from_utf8(bytes)
                .map_err(|_| RenderError::malformed(format!("{} is not valid UTF-8", path)))?;

            let bound = bind_placeholders(&xml, fields)?;
            if bound != xml {
                archive.set(path, bound.into_bytes());
            }
        }

        archive.to_bytes()
    }
}

/// Substitutes every `{fieldName}` token in `xml` with the matching field
/// value, XML-escaped.
///
/// A placeholder naming a field the submission does not carry fails the
/// render; silently blanking a value would hand out a document that looks
/// complete but is not.
fn bind_placeholders(xml: &str, fields: &ValidatedFields) -> Result<String, RenderError> {
    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find(&['{', '}'][..]) {
            Some(idx) if after_open.as_bytes()[idx] == b'}' => {
                let name = &after_open[..idx];
                let value = fields
                    .get(name)
                    .ok_or_else(|| RenderError::unresolved_placeholder(name))?;
                out.push_str(&escape(value));
                rest = &after_open[idx + 1..];
            }
            _ => return Err(RenderError::malformed("unterminated '{' delimiter")),
        }
    }

    out.push_str(rest);
    Ok(out)
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
