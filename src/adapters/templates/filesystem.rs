//! Filesystem-backed template store.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::document::TemplateId;
use crate::ports::{TemplateStore, TemplateStoreError};

/// Filesystem-backed template store.
///
/// Serves the four template assets from a single directory, reading the
/// file fresh on every fetch so a replaced asset takes effect without a
/// restart.
pub struct FsTemplateStore {
    templates_dir: PathBuf,
}

impl FsTemplateStore {
    /// Creates a store serving assets from `templates_dir`.
    pub fn new(templates_dir: impl AsRef<Path>) -> Self {
        Self {
            templates_dir: templates_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of the asset backing a template.
    fn asset_path(&self, template_id: TemplateId) -> PathBuf {
        self.templates_dir.join(template_id.asset_file())
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn fetch(&self, template_id: TemplateId) -> Result<Vec<u8>, TemplateStoreError> {
        let path = self.asset_path(template_id);

        fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TemplateStoreError::not_found(path.display().to_string())
            } else {
                TemplateStoreError::io(format!("Failed to read {}: {}", path.display(), e))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn fetch_reads_asset_bytes() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("company-full.docx"), b"template bytes").unwrap();
        let store = FsTemplateStore::new(temp_dir.path());

        let bytes = store.fetch(TemplateId::CompanyFull).await.unwrap();
        assert_eq!(bytes, b"template bytes");
    }

    #[tokio::test]
    async fn fetch_of_missing_asset_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsTemplateStore::new(temp_dir.path());

        let err = store.fetch(TemplateId::PersonalShort).await.unwrap_err();
        assert!(matches!(err, TemplateStoreError::NotFound(_)));
        assert!(err.to_string().contains("personal-short.docx"));
    }

    #[tokio::test]
    async fn fetch_reads_fresh_on_every_call() {
        let temp_dir = TempDir::new().unwrap();
        let asset = temp_dir.path().join("personal-full.docx");
        let store = FsTemplateStore::new(temp_dir.path());

        std::fs::write(&asset, b"version 1").unwrap();
        assert_eq!(store.fetch(TemplateId::PersonalFull).await.unwrap(), b"version 1");

        std::fs::write(&asset, b"version 2").unwrap();
        assert_eq!(store.fetch(TemplateId::PersonalFull).await.unwrap(), b"version 2");
    }

    #[tokio::test]
    async fn each_template_maps_to_its_own_asset() {
        let temp_dir = TempDir::new().unwrap();
        for template_id in TemplateId::all() {
            std::fs::write(
                temp_dir.path().join(template_id.asset_file()),
                template_id.asset_file().as_bytes(),
            )
            .unwrap();
        }
        let store = FsTemplateStore::new(temp_dir.path());

        for template_id in TemplateId::all() {
            let bytes = store.fetch(*template_id).await.unwrap();
            assert_eq!(bytes, template_id.asset_file().as_bytes());
        }
    }
}
