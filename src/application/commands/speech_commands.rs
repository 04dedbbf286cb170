//! Speech Commands

/// 合成语音命令
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub text: String,
}

/// 分析文本情绪命令（不合成）
#[derive(Debug, Clone)]
pub struct AnalyzeText {
    pub text: String,
}
