//! In-memory DOCX archive handling.
//!
//! A DOCX file is a ZIP archive of XML parts and resources. The renderer
//! unpacks the whole archive into memory, rewrites the text-bearing parts,
//! and repacks everything else byte for byte.

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};

use zip::read::ZipArchive;
use zip::write::ZipWriter;
use zip::CompressionMethod;

use crate::ports::RenderError;

/// Path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Represents an unpacked DOCX document.
#[derive(Debug)]
pub struct DocxArchive {
    /// All files in the archive, keyed by path.
    files: HashMap<String, Vec<u8>>,
}

impl DocxArchive {
    /// Unpacks a DOCX from raw bytes.
    ///
    /// Fails with `MalformedTemplate` when the bytes are not a readable
    /// ZIP archive or the main document part is missing.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| RenderError::malformed(format!("not a ZIP archive: {}", e)))?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| RenderError::malformed(format!("unreadable ZIP entry: {}", e)))?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)
                .map_err(|e| RenderError::malformed(format!("unreadable ZIP entry: {}", e)))?;
            files.insert(name, contents);
        }

        let unpacked = Self { files };
        if !unpacked.contains(DOCUMENT_PART) {
            return Err(RenderError::malformed(format!("missing {}", DOCUMENT_PART)));
        }
        Ok(unpacked)
    }

    /// Gets a part's contents by path.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Checks if a part exists in the archive.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Sets or replaces a part's contents.
    pub fn set(&mut self, path: impl Into<String>, contents: Vec<u8>) {
        self.files.insert(path.into(), contents);
    }

    /// Paths of the text-bearing parts placeholders may appear in: the
    /// main document plus any header and footer parts, in sorted order.
    pub fn text_part_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .files
            .keys()
            .filter(|path| {
                path.as_str() == DOCUMENT_PART
                    || (path.starts_with("word/header") && path.ends_with(".xml"))
                    || (path.starts_with("word/footer") && path.ends_with(".xml"))
            })
            .cloned()
            .collect();
        paths.sort();
        paths
    }

    /// Repacks the archive into DOCX bytes.
    ///
    /// Paths are written in sorted order so output is deterministic for
    /// the same parts.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated);

        let mut paths: Vec<_> = self.files.keys().collect();
        paths.sort();

        for path in paths {
            let contents = &self.files[path];
            zip.start_file(path.as_str(), options)
                .map_err(|e| RenderError::internal(format!("ZIP write failed: {}", e)))?;
            zip.write_all(contents)
                .map_err(|e| RenderError::internal(format!("ZIP write failed: {}", e)))?;
        }

        zip.finish()
            .map_err(|e| RenderError::internal(format!("ZIP write failed: {}", e)))?;
        Ok(buffer.into_inner())
    }
}
