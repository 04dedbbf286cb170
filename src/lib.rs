//! Empathy - 情绪自适应语音合成服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Sentiment: 词典式情感打分（compound score）
//! - Emotion: 情绪分类与强度
//! - Voice: 情绪 → 语速/音量映射
//!
//! 应用层 (application/):
//! - Engine: EmpathyEngine 编排识别、映射、合成
//! - Ports: SpeechBackend, AudioStore, AudioInspector
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 网页表单 + JSON API
//! - Adapters: espeak / HTTP / tone 合成后端，文件存储，WAV 解析

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
