//! Search request and result types / 搜索请求与结果类型

use serde::Serialize;
use std::path::PathBuf;

use crate::models::EntryDescriptor;

/// Default recursion depth below the root / 默认搜索深度
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Hard cap on returned matches / 最大返回结果数
pub const MAX_RESULTS: usize = 100;

/// How the term is tested against a base name / 匹配模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring / 忽略大小写的子串匹配
    #[default]
    Literal,
    /// Case-insensitive regular expression / 忽略大小写的正则匹配
    Regex,
}

/// Search query options / 搜索查询选项
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Directory the walk starts from / 搜索根目录
    pub root: PathBuf,
    /// Search term, raw as the client sent it / 搜索关键词
    pub term: String,
    pub mode: MatchMode,
    pub max_depth: usize,
    pub max_results: usize,
}

impl SearchQuery {
    pub fn new(root: impl Into<PathBuf>, term: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            term: term.into(),
            mode: MatchMode::Literal,
            max_depth: DEFAULT_MAX_DEPTH,
            max_results: MAX_RESULTS,
        }
    }

    pub fn regex(mut self, enabled: bool) -> Self {
        self.mode = if enabled { MatchMode::Regex } else { MatchMode::Literal };
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn is_regex(&self) -> bool {
        self.mode == MatchMode::Regex
    }
}

/// Matches in discovery order / 按发现顺序排列的匹配结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<EntryDescriptor>,
    /// Equals `results.len()`; the walk stops at the cap so this is never an unbounded count
    pub total_found: usize,
}
