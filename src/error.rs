//! Error taxonomy shared by search and preview / 搜索与预览共用的错误类型

use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Search term absent or empty / 搜索关键词为空
    #[error("Search query is required")]
    MissingQuery,

    /// Regex mode term that does not compile / 正则表达式无效
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(String),

    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Path is a directory, not a file: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

impl ExplorerError {
    /// HTTP status for this error kind / 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingQuery
            | Self::InvalidPattern(_)
            | Self::NotADirectory(_)
            | Self::IsADirectory(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a stat failure on a request target, keeping NotFound distinct from other I/O failures
    pub fn from_stat(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io(err)
        }
    }
}
