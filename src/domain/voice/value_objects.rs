//! Voice Context - Value Objects

use serde::Serialize;

/// 后端未报告语速时的默认值（词/分钟）
pub const DEFAULT_BASE_RATE: u32 = 200;
/// 后端未报告音量时的默认值
pub const DEFAULT_BASE_VOLUME: f64 = 1.0;
/// 负向情绪的音量下限
pub const MIN_VOLUME: f64 = 0.2;
/// 音量上限
pub const MAX_VOLUME: f64 = 1.0;

/// 单次合成使用的语音参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceProfile {
    /// 语速（词/分钟）
    pub rate: u32,
    /// 音量 (0.0 - 1.0)
    pub volume: f64,
}

/// 基线语音参数
///
/// 引擎启动时从合成后端读取一次，之后只读
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineVoice {
    pub base_rate: u32,
    pub base_volume: f64,
}

impl Default for BaselineVoice {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            base_volume: DEFAULT_BASE_VOLUME,
        }
    }
}

impl BaselineVoice {
    pub fn new(base_rate: u32, base_volume: f64) -> Self {
        Self {
            base_rate,
            base_volume,
        }
    }

    /// 由后端报告的默认属性构造，缺失或为 0 时回退到 200 wpm / 1.0
    pub fn from_reported(rate: Option<u32>, volume: Option<f64>) -> Self {
        Self {
            base_rate: rate.filter(|r| *r > 0).unwrap_or(DEFAULT_BASE_RATE),
            base_volume: volume.filter(|v| *v > 0.0).unwrap_or(DEFAULT_BASE_VOLUME),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.base_rate == 0 {
            return Err("基线语速必须大于 0");
        }
        if !(0.0..=1.0).contains(&self.base_volume) {
            return Err("基线音量必须在 0.0 到 1.0 之间");
        }
        Ok(())
    }

    /// 中性情绪使用的参数
    pub fn profile(&self) -> VoiceProfile {
        VoiceProfile {
            rate: self.base_rate,
            volume: self.base_volume,
        }
    }
}
