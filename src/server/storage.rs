//! Local file store for uploaded documents.
//!
//! Files are written beneath the configured media root under `documents/` with a random
//! name that keeps the original extension. The returned key is stored on the document row
//! and is the only handle used to read or delete the file later.

use std::path::{Path, PathBuf};

use rand::{distr::Alphanumeric, Rng};

const DOCUMENT_DIR: &str = "documents";
const KEY_LENGTH: usize = 24;

#[derive(Clone, Debug)]
pub struct DocumentStorage {
    root: PathBuf,
}

impl DocumentStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the document directory if it does not exist yet.
    pub async fn prepare(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.root.join(DOCUMENT_DIR)).await
    }

    /// Writes `bytes` under a fresh random key and returns the key.
    pub async fn save(&self, bytes: &[u8], filename: &str) -> std::io::Result<String> {
        self.prepare().await?;

        let key = match extension(filename) {
            Some(ext) => format!("{}/{}.{}", DOCUMENT_DIR, random_name(), ext),
            None => format!("{}/{}", DOCUMENT_DIR, random_name()),
        };

        tokio::fs::write(self.root.join(&key), bytes).await?;

        tracing::debug!("Stored document file {}", key);

        Ok(key)
    }

    pub async fn read(&self, key: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(key)).await
    }

    /// Removes a stored file. A file that is already gone is not an error.
    pub async fn delete(&self, key: &str) -> std::io::Result<()> {
        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Document file {} was already missing", key);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn random_name() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect()
}

/// Lowercased extension of `filename`, limited to ASCII alphanumerics.
fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;

    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_extensions_only() {
        assert_eq!(extension("notes.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension("README"), None);
        assert_eq!(extension("weird.p/df"), None);
    }

    #[tokio::test]
    async fn saves_reads_and_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DocumentStorage::new(dir.path());

        let key = storage.save(b"hello", "greeting.txt").await.unwrap();

        assert!(key.starts_with("documents/"));
        assert!(key.ends_with(".txt"));
        assert_eq!(storage.read(&key).await.unwrap(), b"hello");

        storage.delete(&key).await.unwrap();

        assert!(storage.read(&key).await.is_err());
        assert!(storage.delete(&key).await.is_ok());
    }

    #[tokio::test]
    async fn keys_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DocumentStorage::new(dir.path());

        let first = storage.save(b"a", "a.pdf").await.unwrap();
        let second = storage.save(b"b", "a.pdf").await.unwrap();

        assert_ne!(first, second);
    }
}
