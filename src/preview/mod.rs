//! File preview classification / 文件预览分类
//!
//! Classification is extension-first (no I/O) and only reads content for the code
//! and text categories, where a NUL character demotes the file to binary.

pub mod category;
pub mod classifier;

pub use category::FileCategory;
pub use classifier::{
    ByteStreamHandle, Classification, ClassifiedFile, ContentClassifier, UnpreviewableReason,
    MAX_PREVIEW_SIZE,
};
