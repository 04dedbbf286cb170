//! Storage Adapter - 音频文件存储

mod file_store;

pub use file_store::*;
