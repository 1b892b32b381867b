use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncRead;

use super::category::{image_mime_type, language_hint, FileCategory};
use crate::error::{ExplorerError, Result};
use crate::storage::{base_name, FileSystem};
use crate::utils::get_ext;

/// Files larger than this are never read / 超过此大小的文件不预览
pub const MAX_PREVIEW_SIZE: u64 = 10 * 1024 * 1024;

/// Why a file has no content payload / 无法预览的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnpreviewableReason {
    TooLarge,
    BinaryDetected,
    UnclassifiedExtension,
}

impl UnpreviewableReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooLarge => "too_large",
            Self::BinaryDetected => "binary_detected",
            Self::UnclassifiedExtension => "unclassified_extension",
        }
    }
}

/// Deferred raw byte stream for an image / 图片原始字节流句柄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteStreamHandle {
    path: PathBuf,
}

impl ByteStreamHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn open(&self, fs: &dyn FileSystem) -> io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        fs.open_reader(&self.path).await
    }
}

/// How a file is presented / 文件展示方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Image {
        mime_type: &'static str,
        stream: ByteStreamHandle,
    },
    Code {
        text: String,
        language: &'static str,
    },
    PlainText {
        text: String,
    },
    Unpreviewable {
        reason: UnpreviewableReason,
    },
}

/// Classification plus the metadata every variant reports / 分类结果及文件元信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub name: String,
    pub path: PathBuf,
    /// Lower-cased, empty when the name has none / 小写扩展名
    pub extension: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub classification: Classification,
}

/// Content classifier / 内容分类器
pub struct ContentClassifier {
    fs: Arc<dyn FileSystem>,
}

impl ContentClassifier {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Classify a file / 对文件进行分类
    pub async fn classify(&self, path: &Path) -> Result<ClassifiedFile> {
        let stat = self
            .fs
            .stat(path)
            .await
            .map_err(|e| ExplorerError::from_stat(e, path))?;
        if stat.is_dir {
            return Err(ExplorerError::IsADirectory(path.to_path_buf()));
        }

        let extension = get_ext(&path.to_string_lossy());
        let classification = self.decide(path, &extension, stat.size).await?;
        tracing::debug!("classify: {:?} ext={:?} -> {:?}", path, extension, kind_name(&classification));

        Ok(ClassifiedFile {
            name: base_name(path),
            path: path.to_path_buf(),
            extension,
            size: stat.size,
            modified: stat.modified,
            classification,
        })
    }

    async fn decide(&self, path: &Path, extension: &str, size: u64) -> Result<Classification> {
        if size > MAX_PREVIEW_SIZE {
            return Ok(Classification::Unpreviewable {
                reason: UnpreviewableReason::TooLarge,
            });
        }

        let category = FileCategory::from_extension(extension);
        let text = match category {
            FileCategory::Image => {
                return Ok(Classification::Image {
                    mime_type: image_mime_type(extension),
                    stream: ByteStreamHandle {
                        path: path.to_path_buf(),
                    },
                });
            }
            FileCategory::Unknown => {
                return Ok(Classification::Unpreviewable {
                    reason: UnpreviewableReason::UnclassifiedExtension,
                });
            }
            FileCategory::Code | FileCategory::Text => {
                let bytes = self.fs.read(path).await?;
                let (text, _) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
                text.into_owned()
            }
        };

        // NUL in decoded text means the extension lied
        if text.contains('\0') {
            return Ok(Classification::Unpreviewable {
                reason: UnpreviewableReason::BinaryDetected,
            });
        }

        Ok(match category {
            FileCategory::Code => Classification::Code {
                text,
                language: language_hint(extension),
            },
            _ => Classification::PlainText { text },
        })
    }
}

fn kind_name(classification: &Classification) -> &'static str {
    match classification {
        Classification::Image { .. } => "image",
        Classification::Code { .. } => "code",
        Classification::PlainText { .. } => "text",
        Classification::Unpreviewable { reason } => reason.as_str(),
    }
}
