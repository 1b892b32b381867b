//! Single-level directory listing / 单层目录列表

use std::path::Path;

use crate::error::{ExplorerError, Result};
use crate::models::EntryDescriptor;
use crate::storage::FileSystem;

/// List the immediate children of a directory with their metadata / 列出目录内容
///
/// Children whose stat fails (dangling symlinks, removed mid-listing) are left out.
pub async fn list_directory(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<EntryDescriptor>> {
    let stat = fs.stat(dir).await.map_err(|e| ExplorerError::from_stat(e, dir))?;
    if !stat.is_dir {
        return Err(ExplorerError::NotADirectory(dir.to_path_buf()));
    }

    let children = fs.read_dir(dir).await?;
    let mut files = Vec::with_capacity(children.len());

    for child in children {
        match fs.stat(&child).await {
            Ok(stat) => files.push(EntryDescriptor::from_stat(&child, &stat)),
            Err(e) => tracing::trace!("list_directory: skip {:?}: {}", child, e),
        }
    }

    Ok(files)
}
