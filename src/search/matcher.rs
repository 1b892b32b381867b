use regex::{Regex, RegexBuilder};

use super::schema::MatchMode;
use crate::error::{ExplorerError, Result};

/// Compiled name test, built once before the walk / 文件名匹配器
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Lower-cased needle / 小写关键词
    Literal(String),
    Regex(Regex),
}

impl NameMatcher {
    /// Compile a term for the given mode / 编译匹配器
    ///
    /// In regex mode a `/pattern/` term is unwrapped to `pattern`. Matching is always
    /// case-insensitive.
    pub fn compile(term: &str, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Literal => Ok(Self::Literal(term.to_lowercase())),
            MatchMode::Regex => {
                let pattern = strip_slashes(term);
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(Self::Regex)
                    .map_err(|e| ExplorerError::InvalidPattern(e.to_string()))
            }
        }
    }

    /// Test a base name / 测试文件名
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Literal(needle) => name.to_lowercase().contains(needle.as_str()),
            Self::Regex(re) => re.is_match(name),
        }
    }
}

/// Unwrap `/pattern/`; a lone "/" is not a pair and stays as is
fn strip_slashes(term: &str) -> &str {
    term.strip_prefix('/')
        .and_then(|inner| inner.strip_suffix('/'))
        .unwrap_or(term)
}
