//! Recursive name search / 递归文件名搜索
//!
//! Walks a directory tree depth-first and collects entries whose base name matches
//! the query. Two bounds guarantee termination on any tree, including symlink cycles:
//! - depth limit: the root's direct children are depth 0 / 深度限制
//! - result cap: the walk stops everywhere once the cap is reached / 结果数上限

pub mod engine;
pub mod matcher;
pub mod schema;

pub use engine::SearchEngine;
pub use matcher::NameMatcher;
pub use schema::{MatchMode, SearchOutcome, SearchQuery, DEFAULT_MAX_DEPTH, MAX_RESULTS};
