//! Depth-bounded, result-capped recursive walk / 有界递归搜索
//!
//! The engine holds no mutable state: depth and the result accumulator are threaded
//! through every recursive call, so one engine serves concurrent requests.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use super::matcher::NameMatcher;
use super::schema::{SearchOutcome, SearchQuery};
use crate::error::{ExplorerError, Result};
use crate::models::EntryDescriptor;
use crate::storage::{base_name, FileSystem};

type WalkFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Per-request walk state / 单次搜索的遍历状态
struct Walk {
    root: PathBuf,
    matcher: NameMatcher,
    max_depth: usize,
    max_results: usize,
    results: Vec<EntryDescriptor>,
}

impl Walk {
    fn is_full(&self) -> bool {
        self.results.len() >= self.max_results
    }

    /// Parent directory relative to the root, "." for the root itself / 相对路径
    fn relative(&self, dir: &Path) -> String {
        match dir.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => dir.to_string_lossy().to_string(),
        }
    }
}

/// Search engine / 搜索引擎
pub struct SearchEngine {
    fs: Arc<dyn FileSystem>,
}

impl SearchEngine {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Run a search / 执行搜索
    ///
    /// The term is validated and compiled before the root is touched, so a bad pattern
    /// fails without any filesystem access. Per-entry I/O errors during the walk are
    /// skipped; only root validation errors abort the search.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        if query.term.is_empty() {
            return Err(ExplorerError::MissingQuery);
        }
        let matcher = NameMatcher::compile(&query.term, query.mode)?;

        let stat = self
            .fs
            .stat(&query.root)
            .await
            .map_err(|e| ExplorerError::from_stat(e, &query.root))?;
        if !stat.is_dir {
            return Err(ExplorerError::NotADirectory(query.root.clone()));
        }

        tracing::debug!(
            "search: root={:?}, term={:?}, mode={:?}, max_depth={}",
            query.root, query.term, query.mode, query.max_depth
        );

        let mut walk = Walk {
            root: query.root.clone(),
            matcher,
            max_depth: query.max_depth,
            max_results: query.max_results,
            results: Vec::new(),
        };
        self.walk_dir(&mut walk, query.root.clone(), 0).await;

        let total_found = walk.results.len();
        tracing::debug!("search: root={:?} found {} entries", query.root, total_found);

        Ok(SearchOutcome {
            results: walk.results,
            total_found,
        })
    }

    /// Pre-order walk of one directory level / 遍历单层目录
    fn walk_dir<'a>(&'a self, walk: &'a mut Walk, dir: PathBuf, depth: usize) -> WalkFuture<'a> {
        Box::pin(async move {
            if walk.is_full() {
                return;
            }

            let children = match self.fs.read_dir(&dir).await {
                Ok(children) => children,
                Err(e) => {
                    tracing::trace!("search: skip unreadable directory {:?}: {}", dir, e);
                    return;
                }
            };
            let relative = walk.relative(&dir);

            for child in children {
                if walk.is_full() {
                    return;
                }

                let stat = match self.fs.stat(&child).await {
                    Ok(stat) => stat,
                    Err(e) => {
                        tracing::trace!("search: skip entry {:?}: {}", child, e);
                        continue;
                    }
                };

                if walk.matcher.is_match(&base_name(&child)) {
                    let entry = EntryDescriptor::from_stat(&child, &stat).with_relative_path(relative.clone());
                    walk.results.push(entry);
                }

                // A matched directory is still searched inside
                if stat.is_dir && depth < walk.max_depth {
                    self.walk_dir(walk, child, depth + 1).await;
                }
            }
        })
    }
}
