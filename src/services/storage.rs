/*
 * Responsibility
 * - Persist uploaded files (profile images, course videos)
 * - Filename sanitizing lives here so handlers never build paths themselves
 * - FileStore is a trait so tests / other backends can swap the local disk out
 */
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use axum::body::Bytes;
use thiserror::Error;
use uuid::Uuid;

pub const PROFILE_IMAGES: &str = "profile_images";
pub const COURSE_VIDEOS: &str = "course_videos";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid file name")]
    InvalidName,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store `bytes` under `folder` and return the stored path relative to the store root.
    async fn save(
        &self,
        folder: &str,
        original_name: &str,
        bytes: Bytes,
    ) -> Result<String, StorageError>;

    /// Delete a file previously returned by `save`. A missing file is not an error.
    async fn remove(&self, stored_path: &str) -> Result<(), StorageError>;
}

/// Keep ASCII alphanumerics, `.`, `-` and `_`; whitespace becomes `_`.
/// Leading dots are stripped so nothing can become hidden or climb directories.
pub fn sanitize_filename(name: &str) -> Option<String> {
    // Browsers may send a full client path.
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').trim_matches('_');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(
        &self,
        folder: &str,
        original_name: &str,
        bytes: Bytes,
    ) -> Result<String, StorageError> {
        let name = sanitize_filename(original_name).ok_or(StorageError::InvalidName)?;
        // Prefix keeps two uploads of "avatar.png" from clobbering each other.
        let stored_name = format!("{}-{}", Uuid::new_v4(), name);

        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&stored_name), &bytes).await?;

        tracing::debug!(folder, file = %stored_name, size = bytes.len(), "stored upload");

        Ok(format!("{}/{}", folder, stored_name))
    }

    async fn remove(&self, stored_path: &str) -> Result<(), StorageError> {
        let relative = Path::new(stored_path);
        // Only paths shaped like `save` output (plain relative components) are touched.
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(StorageError::InvalidName);
        }

        match tokio::fs::remove_file(self.root.join(relative)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("avatar.png").as_deref(), Some("avatar.png"));
        assert_eq!(
            sanitize_filename("my holiday photo.JPG").as_deref(),
            Some("my_holiday_photo.JPG")
        );
        assert_eq!(sanitize_filename("lesson-01_v2.mp4").as_deref(), Some("lesson-01_v2.mp4"));
    }

    #[test]
    fn sanitize_drops_directories_and_hidden_prefixes() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename("C:\\Users\\me\\cv.pdf").as_deref(),
            Some("cv.pdf")
        );
        assert_eq!(sanitize_filename(".bashrc").as_deref(), Some("bashrc"));
    }

    #[test]
    fn sanitize_rejects_names_with_nothing_left() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("日本語"), None);
    }

    #[tokio::test]
    async fn local_store_writes_under_folder() {
        let root = std::env::temp_dir().join(format!("campus-api-test-{}", Uuid::new_v4()));
        let store = LocalFileStore::new(&root);

        let stored = store
            .save(PROFILE_IMAGES, "me.png", Bytes::from_static(b"png-bytes"))
            .await
            .unwrap();

        assert!(stored.starts_with("profile_images/"));
        assert!(stored.ends_with("-me.png"));
        let written = tokio::fs::read(root.join(&stored)).await.unwrap();
        assert_eq!(written, b"png-bytes");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn local_store_refuses_unusable_names() {
        let store = LocalFileStore::new(std::env::temp_dir());
        let err = store
            .save(COURSE_VIDEOS, "..", Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidName));
    }

    #[tokio::test]
    async fn local_store_removes_what_it_saved() {
        let root = std::env::temp_dir().join(format!("campus-api-test-{}", Uuid::new_v4()));
        let store = LocalFileStore::new(&root);

        let stored = store
            .save(COURSE_VIDEOS, "intro.mp4", Bytes::from_static(b"mp4"))
            .await
            .unwrap();
        store.remove(&stored).await.unwrap();
        assert!(!root.join(&stored).exists());

        // Already gone is fine.
        store.remove(&stored).await.unwrap();

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn local_store_remove_stays_under_root() {
        let store = LocalFileStore::new(std::env::temp_dir());
        for path in ["../etc/passwd", "/etc/passwd", "profile_images/../../x"] {
            let err = store.remove(path).await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidName), "{path}");
        }
    }
}
