//! Filesystem access abstraction / 文件系统访问抽象
//!
//! Search and preview only ever touch the disk through [`FileSystem`], so a request
//! handler can be given any implementation (local disk, instrumented wrapper in tests).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncRead;

mod local;
#[cfg(test)]
pub(crate) mod memory;

pub use local::LocalFs;

/// Stat result of a single node / 单个节点的元信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Stat a path, following symlinks / 获取元信息（跟随符号链接）
    async fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Full paths of the immediate children, in the order the OS lists them / 列出直接子项
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read the whole file / 读取整个文件
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Open a raw byte stream / 打开原始字节流
    async fn open_reader(&self, path: &Path) -> io::Result<Box<dyn AsyncRead + Unpin + Send>>;
}

/// Base name of a path, lossily converted / 获取文件名
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
