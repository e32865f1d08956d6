//! Saving to and opening from the local filesystem.
//!
//! Both operations are async so the UI can run them as tasks while the
//! window stays responsive.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

use crate::{CoreError, CoreResult};

/// A text file read off disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub text: String,
}

/// Writes `text` to `path` as plain UTF-8.
///
/// The text goes to a hidden sibling first and is renamed over the target,
/// so a failed write never leaves a truncated file behind. Each call gets
/// its own sibling, so overlapping saves of one path don't collide; the
/// last rename wins.
pub async fn save_to_disk(path: impl AsRef<Path>, text: &str) -> CoreResult<PathBuf> {
    let path = path.as_ref();
    let temp_path = temp_sibling(path);

    if let Err(e) = fs::write(&temp_path, text.as_bytes()).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(CoreError::io(path, e));
    }
    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(CoreError::io(path, e));
    }

    tracing::info!("Saved {} ({} bytes)", path.display(), text.len());
    Ok(path.to_path_buf())
}

/// Reads a UTF-8 text file no larger than `max_bytes`.
pub async fn open_from_disk(path: impl AsRef<Path>, max_bytes: u64) -> CoreResult<LoadedFile> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).await.map_err(|e| CoreError::io(path, e))?;
    if metadata.len() > max_bytes {
        return Err(CoreError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path).await.map_err(|e| CoreError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| CoreError::NotText(path.to_path_buf()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!("Opened {} ({} bytes)", path.display(), text.len());
    Ok(LoadedFile {
        path: path.to_path_buf(),
        file_name,
        text,
    })
}

/// Cleans up a name typed into the filename field.
///
/// Surrounding whitespace and path separators are removed; an empty result
/// (or one made only of dots) becomes `default`.
pub fn sanitize_file_name(name: &str, default: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\') && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.chars().all(|c| c == '.') {
        default.to_string()
    } else {
        cleaned.to_string()
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    static NEXT: AtomicU64 = AtomicU64::new(0);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}-{n}.quill-tmp", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 1024 * 1024;

    #[tokio::test]
    async fn test_save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");

        let saved = save_to_disk(&path, "hello\nworld\n").await.unwrap();
        assert_eq!(saved, path);

        let loaded = open_from_disk(&path, LIMIT).await.unwrap();
        assert_eq!(loaded.file_name, "hello.txt");
        assert_eq!(loaded.text, "hello\nworld\n");
        assert_eq!(loaded.path, path);
    }

    #[tokio::test]
    async fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "old content that is longer").unwrap();

        save_to_disk(&path, "new").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_overlapping_saves_of_one_path_both_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let first = "a".repeat(4 * 1024 * 1024);
        let second = "b".repeat(4 * 1024 * 1024);

        for _ in 0..5 {
            let (a, b) = tokio::join!(save_to_disk(&path, &first), save_to_disk(&path, &second));
            assert_eq!(a.unwrap(), path);
            assert_eq!(b.unwrap(), path);

            let on_disk = std::fs::read_to_string(&path).unwrap();
            assert!(on_disk == first || on_disk == second);
        }

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_temp_siblings_are_unique() {
        let path = Path::new("/tmp/doc.txt");
        let a = temp_sibling(path);
        let b = temp_sibling(path);
        assert_ne!(a, b);
        assert_eq!(a.parent(), path.parent());
        assert!(a.file_name().unwrap().to_string_lossy().starts_with(".doc.txt."));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("file.txt");

        let err = save_to_disk(&path, "x").await.unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_from_disk(dir.path().join("nope.txt"), LIMIT)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[tokio::test]
    async fn test_open_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = open_from_disk(&path, LIMIT).await.unwrap_err();
        assert!(matches!(err, CoreError::NotText(p) if p == path));
    }

    #[tokio::test]
    async fn test_open_rejects_large_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let err = open_from_disk(&path, 16).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::TooLarge {
                size: 64,
                limit: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("  notes.txt ", "untitled.txt"), "notes.txt");
        assert_eq!(sanitize_file_name("../etc/passwd", "untitled.txt"), "..etcpasswd");
        assert_eq!(sanitize_file_name("a\\b.rs", "untitled.txt"), "ab.rs");
        assert_eq!(sanitize_file_name("", "untitled.txt"), "untitled.txt");
        assert_eq!(sanitize_file_name(" .. ", "untitled.txt"), "untitled.txt");
        assert_eq!(sanitize_file_name("/", "untitled.txt"), "untitled.txt");
    }
}
