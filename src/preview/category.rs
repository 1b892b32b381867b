/// Image extensions served as raw bytes / 图片扩展名
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp", "bmp"];

/// Source code extensions / 代码扩展名
const CODE_EXTENSIONS: &[&str] = &[
    "js", "html", "css", "py", "java", "cpp", "c", "php", "rb", "go", "rs", "ts", "jsx", "tsx",
];

/// Plain text extensions / 文本扩展名
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "json", "xml", "yaml", "yml", "csv", "log", "ini", "conf",
];

/// Presentation category derived from a lower-cased extension / 文件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Code,
    Text,
    Unknown,
}

impl FileCategory {
    pub fn from_extension(ext: &str) -> Self {
        if IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if CODE_EXTENSIONS.contains(&ext) {
            Self::Code
        } else if TEXT_EXTENSIONS.contains(&ext) {
            Self::Text
        } else {
            Self::Unknown
        }
    }
}

/// Media type for an image extension, image/jpeg when unknown / 图片 MIME 类型
pub fn image_mime_type(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    }
}

/// Syntax highlighting hint, "text" when unknown / 语言提示
pub fn language_hint(ext: &str) -> &'static str {
    match ext {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "rb" => "ruby",
        "php" => "php",
        "java" => "java",
        "cpp" => "cpp",
        "c" => "c",
        "go" => "go",
        "rs" => "rust",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        "xml" => "xml",
        _ => "text",
    }
}
