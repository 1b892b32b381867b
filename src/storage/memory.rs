//! In-memory tree with deterministic listing order, for tests / 测试用内存文件系统

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::SystemTime;
use tokio::io::AsyncRead;

use super::{FileStat, FileSystem};

enum Node {
    Dir(Vec<PathBuf>),
    File(Vec<u8>),
}

/// Children are listed in insertion order; every trait call is counted
pub struct MemoryFs {
    nodes: Mutex<HashMap<PathBuf, Node>>,
    denied: Mutex<HashSet<PathBuf>>,
    calls: AtomicUsize,
    reads: AtomicUsize,
}

impl MemoryFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(root.into(), Node::Dir(Vec::new()));
        Self {
            nodes: Mutex::new(nodes),
            denied: Mutex::new(HashSet::new()),
            calls: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn dir(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Node::Dir(Vec::new()));
        self
    }

    pub fn file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path.into(), Node::File(content.into()));
        self
    }

    /// Listing this directory fails with PermissionDenied / 目录不可读
    pub fn deny(self, path: impl Into<PathBuf>) -> Self {
        self.denied.lock().insert(path.into());
        self
    }

    /// Number of FileSystem calls made so far / 调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of content reads (read + open_reader) / 内容读取次数
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn insert(&self, path: PathBuf, node: Node) {
        let mut nodes = self.nodes.lock();
        if let Some(parent) = path.parent() {
            if let Some(Node::Dir(children)) = nodes.get_mut(parent) {
                children.push(path.clone());
            }
        }
        nodes.insert(path, node);
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn stat(&self, path: &Path) -> io::Result<FileStat> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let nodes = self.nodes.lock();
        let modified = DateTime::<Utc>::from(SystemTime::UNIX_EPOCH);
        match nodes.get(path) {
            Some(Node::Dir(_)) => Ok(FileStat { is_dir: true, size: 4096, modified }),
            Some(Node::File(data)) => Ok(FileStat { is_dir: false, size: data.len() as u64, modified }),
            None => Err(Self::not_found(path)),
        }
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.denied.lock().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        match self.nodes.lock().get(path) {
            Some(Node::Dir(children)) => Ok(children.clone()),
            Some(Node::File(_)) => Err(io::Error::new(io::ErrorKind::Other, "not a directory")),
            None => Err(Self::not_found(path)),
        }
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.nodes.lock().get(path) {
            Some(Node::File(data)) => Ok(data.clone()),
            Some(Node::Dir(_)) => Err(io::Error::new(io::ErrorKind::Other, "is a directory")),
            None => Err(Self::not_found(path)),
        }
    }

    async fn open_reader(&self, path: &Path) -> io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        let data = self.read(path).await?;
        Ok(Box::new(io::Cursor::new(data)))
    }
}
