use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{request_path, ApiError, Endpoint};
use crate::state::AppState;
use explorer_backend::error::ExplorerError;
use explorer_backend::models::EntryDescriptor;
use explorer_backend::search::SearchQuery;
use explorer_backend::utils::parse_depth;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    /// "true" enables regex mode / 为 "true" 时启用正则模式
    pub regex: Option<String>,
    pub max_depth: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub search_directory: String,
    pub query: String,
    pub is_regex: bool,
    pub results: Vec<EntryDescriptor>,
    pub total_found: usize,
}

/// GET /api/search/*path?q=&regex=&maxDepth= - 递归搜索文件名
pub async fn search(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let search_dir = request_path(path.map(|Path(p)| p));

    let term = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::new(Endpoint::Search, ExplorerError::MissingQuery)),
    };
    let is_regex = params.regex.as_deref() == Some("true");
    let max_depth = parse_depth(params.max_depth.as_deref(), state.default_max_depth());

    let query = SearchQuery::new(&search_dir, term)
        .regex(is_regex)
        .max_depth(max_depth);

    let outcome = state
        .search_engine
        .search(&query)
        .await
        .map_err(|e| ApiError::new(Endpoint::Search, e))?;

    Ok(Json(SearchResponse {
        search_directory: search_dir,
        query: query.term,
        is_regex,
        results: outcome.results,
        total_found: outcome.total_found,
    }))
}
