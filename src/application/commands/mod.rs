//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：合成语音会写入音频文件

mod speech_commands;

pub mod handlers;

pub use speech_commands::*;
