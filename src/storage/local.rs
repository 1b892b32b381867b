use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::io::AsyncRead;

use super::{FileStat, FileSystem};

/// Local disk access through tokio::fs / 本地磁盘访问
#[derive(Debug, Clone, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for LocalFs {
    async fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = tokio::fs::metadata(path).await?;
        let modified: DateTime<Utc> = metadata
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH)
            .into();

        Ok(FileStat {
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified,
        })
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut result = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            result.push(entry.path());
        }

        Ok(result)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn open_reader(&self, path: &Path) -> io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        let file = tokio::fs::File::open(path).await?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_stat_and_read() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let fs = LocalFs::new();
        let stat = fs.stat(&file).await.unwrap();
        assert!(!stat.is_dir);
        assert_eq!(stat.size, 5);
        assert!(fs.stat(dir.path()).await.unwrap().is_dir);
        assert_eq!(fs.read(&file).await.unwrap(), b"hello");

        let mut reader = fs.open_reader(&file).await.unwrap();
        let mut buf = String::new();
        reader.read_to_string(&mut buf).await.unwrap();
        assert_eq!(buf, "hello");
    }

    #[tokio::test]
    async fn test_read_dir_returns_full_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("one"), b"").unwrap();
        std::fs::create_dir(dir.path().join("two")).unwrap();

        let mut children = LocalFs::new().read_dir(dir.path()).await.unwrap();
        children.sort();
        assert_eq!(children, vec![dir.path().join("one"), dir.path().join("two")]);
    }

    #[tokio::test]
    async fn test_stat_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs::new().stat(&dir.path().join("nope")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
