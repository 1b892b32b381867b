use explorer_backend::config::AppConfig;
use explorer_backend::preview::ContentClassifier;
use explorer_backend::search::SearchEngine;
use explorer_backend::storage::FileSystem;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state / 应用共享状态
///
/// Everything here is read-only after startup; each request gets its own walk state.
pub struct AppState {
    pub config: Arc<RwLock<AppConfig>>,
    pub fs: Arc<dyn FileSystem>,
    pub search_engine: SearchEngine,
    pub classifier: ContentClassifier,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Arc<RwLock<AppConfig>>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            search_engine: SearchEngine::new(fs.clone()),
            classifier: ContentClassifier::new(fs.clone()),
            fs,
            started_at: Instant::now(),
        }
    }

    /// Depth used when a search request gives none / 默认搜索深度
    pub fn default_max_depth(&self) -> usize {
        self.config.read().search.default_max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_backend::storage::LocalFs;

    #[test]
    fn test_default_max_depth_follows_shared_config() {
        let config = Arc::new(RwLock::new(AppConfig::default()));
        let state = AppState::new(config.clone(), Arc::new(LocalFs::new()));
        assert_eq!(state.default_max_depth(), 5);

        config.write().search.default_max_depth = 2;
        assert_eq!(state.default_max_depth(), 2);
    }
}
