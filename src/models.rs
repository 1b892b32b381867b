use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::storage::{base_name, FileStat};

/// One filesystem node surfaced to a client / 返回给客户端的文件节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDescriptor {
    pub name: String,
    pub path: String,
    /// Parent directory relative to the search root, "." for direct children / 相对搜索根目录的父路径
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    pub is_directory: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl EntryDescriptor {
    pub fn from_stat(path: &Path, stat: &FileStat) -> Self {
        Self {
            name: base_name(path),
            path: path.to_string_lossy().to_string(),
            relative_path: None,
            is_directory: stat.is_dir,
            size: stat.size,
            modified: stat.modified,
        }
    }

    pub fn with_relative_path(mut self, relative: String) -> Self {
        self.relative_path = Some(relative);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_camel_case() {
        let stat = FileStat {
            is_dir: false,
            size: 12,
            modified: DateTime::<Utc>::from(std::time::SystemTime::UNIX_EPOCH),
        };
        let entry = EntryDescriptor::from_stat(Path::new("/srv/docs/a.txt"), &stat);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["path"], "/srv/docs/a.txt");
        assert_eq!(json["isDirectory"], false);
        assert_eq!(json["size"], 12);
        assert!(json.get("relativePath").is_none());

        let json = serde_json::to_value(entry.with_relative_path("docs".into())).unwrap();
        assert_eq!(json["relativePath"], "docs");
    }
}
