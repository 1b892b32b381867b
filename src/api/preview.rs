use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use super::{request_path, ApiError, Endpoint};
use crate::state::AppState;
use explorer_backend::preview::{Classification, ClassifiedFile, UnpreviewableReason};

/// JSON envelope for every non-image classification / 文件预览响应
#[derive(Debug, Serialize)]
pub struct FilePreviewResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnpreviewableReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<ClassifiedFile> for FilePreviewResponse {
    fn from(file: ClassifiedFile) -> Self {
        let mut resp = Self {
            kind: "binary",
            name: file.name,
            content: None,
            size: file.size,
            modified: file.modified,
            path: file.path.to_string_lossy().to_string(),
            extension: None,
            language: None,
            reason: None,
            error: None,
            message: None,
        };

        match file.classification {
            Classification::Code { text, language } => {
                resp.kind = "code";
                resp.content = Some(text);
                resp.extension = Some(file.extension);
                resp.language = Some(language);
            }
            Classification::PlainText { text } => {
                resp.kind = "text";
                resp.content = Some(text);
                resp.extension = Some(file.extension);
            }
            // file_preview streams images before building an envelope
            Classification::Image { .. } => {
                resp.extension = Some(file.extension);
            }
            Classification::Unpreviewable { reason } => {
                resp.reason = Some(reason);
                match reason {
                    UnpreviewableReason::TooLarge => resp.error = Some("File too large to preview"),
                    UnpreviewableReason::BinaryDetected => resp.message = Some("Binary file detected"),
                    UnpreviewableReason::UnclassifiedExtension => resp.extension = Some(file.extension),
                }
            }
        }

        resp
    }
}

/// GET /api/file/*path - 文件预览（图片直接返回字节流）
pub async fn file_preview(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
) -> Result<Response, ApiError> {
    let file_path = request_path(path.map(|Path(p)| p));

    let file = state
        .classifier
        .classify(std::path::Path::new(&file_path))
        .await
        .map_err(|e| ApiError::new(Endpoint::Preview, e))?;

    if let Classification::Image { mime_type, stream } = &file.classification {
        let reader = stream
            .open(state.fs.as_ref())
            .await
            .map_err(|e| ApiError::new(Endpoint::Preview, e))?;
        let body = Body::from_stream(ReaderStream::new(reader));
        return Ok(([(header::CONTENT_TYPE, *mime_type)], body).into_response());
    }

    Ok(Json(FilePreviewResponse::from(file)).into_response())
}
