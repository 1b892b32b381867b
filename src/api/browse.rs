use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::{request_path, ApiError, Endpoint};
use crate::state::AppState;
use explorer_backend::browse::list_directory;
use explorer_backend::models::EntryDescriptor;

#[derive(Debug, Serialize)]
pub struct DirectoryListing {
    pub directory: String,
    pub files: Vec<EntryDescriptor>,
}

/// GET /api/files/*path - 列出目录内容
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
) -> Result<Json<DirectoryListing>, ApiError> {
    let dir_path = request_path(path.map(|Path(p)| p));

    let files = list_directory(state.fs.as_ref(), std::path::Path::new(&dir_path))
        .await
        .map_err(|e| ApiError::new(Endpoint::Browse, e))?;

    Ok(Json(DirectoryListing {
        directory: dir_path,
        files,
    }))
}
