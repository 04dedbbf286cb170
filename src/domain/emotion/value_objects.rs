//! Emotion Context - Value Objects

use serde::{Deserialize, Serialize};

/// compound ≥ 此值判定为正向
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// compound ≤ 此值判定为负向
pub const NEGATIVE_THRESHOLD: f64 = -0.1;
/// 强度下限，保证接近中性的文本也有可听出的变化
pub const MIN_INTENSITY: f64 = 0.2;
/// 强度上限
pub const MAX_INTENSITY: f64 = 1.0;

/// 情绪类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
}

impl Emotion {
    /// 根据 compound 分数分类
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// 首字母大写，用于页面展示
    pub fn title(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 情绪识别结果
///
/// 不变量:
/// - intensity ∈ [0.2, 1.0]
/// - emotion 仅由 raw_compound 决定
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionResult {
    pub emotion: Emotion,
    pub intensity: f64,
    pub raw_compound: f64,
}

impl EmotionResult {
    pub fn from_compound(compound: f64) -> Self {
        Self {
            emotion: Emotion::from_compound(compound),
            intensity: compound.abs().clamp(MIN_INTENSITY, MAX_INTENSITY),
            raw_compound: compound,
        }
    }

    /// 强度百分比（0-100）
    pub fn intensity_percent(&self) -> u32 {
        (self.intensity * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Emotion::from_compound(0.1), Emotion::Positive);
        assert_eq!(Emotion::from_compound(-0.1), Emotion::Negative);
        assert_eq!(Emotion::from_compound(0.0999), Emotion::Neutral);
        assert_eq!(Emotion::from_compound(-0.0999), Emotion::Neutral);
        assert_eq!(Emotion::from_compound(1.0), Emotion::Positive);
        assert_eq!(Emotion::from_compound(-1.0), Emotion::Negative);
    }

    #[test]
    fn test_intensity_floor() {
        let result = EmotionResult::from_compound(0.0);
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.intensity, MIN_INTENSITY);
        assert_eq!(result.raw_compound, 0.0);

        let result = EmotionResult::from_compound(-0.6);
        assert_eq!(result.intensity, 0.6);
    }

    #[test]
    fn test_intensity_percent_rounds() {
        assert_eq!(EmotionResult::from_compound(0.29).intensity_percent(), 29);
        assert_eq!(EmotionResult::from_compound(-0.57).intensity_percent(), 57);
        assert_eq!(EmotionResult::from_compound(0.58).intensity_percent(), 58);
        assert_eq!(EmotionResult::from_compound(0.6696).intensity_percent(), 67);
        assert_eq!(EmotionResult::from_compound(0.0).intensity_percent(), 20);
        assert_eq!(EmotionResult::from_compound(1.0).intensity_percent(), 100);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Emotion::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
        assert_eq!(Emotion::Negative.title(), "Negative");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_classification_matches_thresholds(c in -1.0f64..=1.0) {
            let emotion = Emotion::from_compound(c);
            if c >= POSITIVE_THRESHOLD {
                prop_assert_eq!(emotion, Emotion::Positive);
            } else if c <= NEGATIVE_THRESHOLD {
                prop_assert_eq!(emotion, Emotion::Negative);
            } else {
                prop_assert_eq!(emotion, Emotion::Neutral);
            }
        }

        #[test]
        fn prop_intensity_is_clamped_magnitude(c in -1.0f64..=1.0) {
            let result = EmotionResult::from_compound(c);
            prop_assert!(result.intensity >= MIN_INTENSITY);
            prop_assert!(result.intensity <= MAX_INTENSITY);
            if c.abs() >= MIN_INTENSITY {
                prop_assert_eq!(result.intensity, c.abs());
            }
        }
    }
}
