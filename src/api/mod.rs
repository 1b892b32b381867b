pub mod browse;
pub mod preview;
pub mod search;
pub mod server;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;
use explorer_backend::error::ExplorerError;
use explorer_backend::utils::fix_and_clean_path;

/// Build the HTTP router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.read().get_static_dir();

    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/files/", get(browse::list_files))
        .route("/api/files/*path", get(browse::list_files))
        .route("/api/search/", get(search::search))
        .route("/api/search/*path", get(search::search))
        .route("/api/file/", get(preview::file_preview))
        .route("/api/file/*path", get(preview::file_preview))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn the wildcard capture into an absolute, normalized path / 规范化请求路径
pub fn request_path(raw: Option<String>) -> String {
    fix_and_clean_path(&raw.unwrap_or_default())
}

/// Which endpoint failed, for the error wording / 出错的接口
#[derive(Debug, Clone, Copy)]
pub enum Endpoint {
    Browse,
    Search,
    Preview,
}

impl Endpoint {
    fn headline(&self) -> &'static str {
        match self {
            Self::Browse => "Failed to read directory",
            Self::Search => "Search failed",
            Self::Preview => "Failed to read file",
        }
    }

    fn not_found(&self) -> &'static str {
        match self {
            Self::Browse => "Directory not found",
            Self::Search => "Search directory not found",
            Self::Preview => "File not found",
        }
    }

    fn not_a_directory(&self) -> &'static str {
        match self {
            Self::Search => "Search path is not a directory",
            _ => "Path is not a directory",
        }
    }
}

/// Error payload `{ error, message? }` with the matching status / 接口错误响应
#[derive(Debug)]
pub struct ApiError {
    endpoint: Endpoint,
    err: ExplorerError,
}

impl ApiError {
    pub fn new(endpoint: Endpoint, err: impl Into<ExplorerError>) -> Self {
        Self {
            endpoint,
            err: err.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.err.status();
        let body = match &self.err {
            ExplorerError::MissingQuery => json!({ "error": self.err.to_string() }),
            ExplorerError::InvalidPattern(message) => json!({
                "error": "Invalid regex pattern",
                "message": message,
            }),
            ExplorerError::NotFound(_) => json!({ "error": self.endpoint.not_found() }),
            ExplorerError::NotADirectory(_) => json!({ "error": self.endpoint.not_a_directory() }),
            ExplorerError::IsADirectory(_) => json!({ "error": "Path is a directory, not a file" }),
            ExplorerError::Io(e) => {
                tracing::error!("{}: {}", self.endpoint.headline(), e);
                json!({
                    "error": self.endpoint.headline(),
                    "message": e.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_request_path() {
        assert_eq!(request_path(None), "/");
        assert_eq!(request_path(Some("tmp/a".into())), "/tmp/a");
        assert_eq!(request_path(Some("/tmp/../etc".into())), "/etc");
    }

    #[tokio::test]
    async fn test_error_payloads() {
        let response = ApiError::new(Endpoint::Search, ExplorerError::InvalidPattern("unclosed group".into()))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::new(Endpoint::Preview, ExplorerError::NotFound("/x".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let response = ApiError::new(Endpoint::Browse, io).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
