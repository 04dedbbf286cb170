//! 情绪 → 语音参数映射
//!
//! - POSITIVE: 语速最多 +60%，音量最多 +30%（上限 1.0）
//! - NEGATIVE: 语速最多 -60%，音量最多 -40%（下限 0.2）
//! - NEUTRAL: 基线参数

use std::borrow::Cow;

use crate::domain::emotion::{Emotion, EmotionResult};

use super::{BaselineVoice, VoiceProfile, MAX_VOLUME, MIN_VOLUME};

const RATE_SWING: f64 = 0.6;
const POSITIVE_VOLUME_SWING: f64 = 0.3;
const NEGATIVE_VOLUME_SWING: f64 = 0.4;

/// 负向情绪的犹豫前缀
pub const HESITATION_PREFIX: &str = "...";

/// 将情绪识别结果映射为语音参数
///
/// 纯函数：相同的基线和识别结果总是得到相同的参数，语速向零截断为整数
pub fn emotion_to_voice(baseline: &BaselineVoice, result: &EmotionResult) -> VoiceProfile {
    let base_rate = baseline.base_rate as f64;
    let intensity = result.intensity;

    match result.emotion {
        Emotion::Positive => VoiceProfile {
            rate: (base_rate * (1.0 + RATE_SWING * intensity)) as u32,
            volume: (baseline.base_volume + POSITIVE_VOLUME_SWING * intensity).min(MAX_VOLUME),
        },
        Emotion::Negative => VoiceProfile {
            rate: (base_rate * (1.0 - RATE_SWING * intensity)) as u32,
            volume: (baseline.base_volume - NEGATIVE_VOLUME_SWING * intensity).max(MIN_VOLUME),
        },
        Emotion::Neutral => baseline.profile(),
    }
}

/// 实际朗读的文本：负向情绪加省略号前缀模拟犹豫，其余原样朗读
pub fn spoken_text(text: &str, emotion: Emotion) -> Cow<'_, str> {
    match emotion {
        Emotion::Negative => Cow::Owned(format!("{}{}", HESITATION_PREFIX, text)),
        Emotion::Positive | Emotion::Neutral => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::{MAX_INTENSITY, MIN_INTENSITY};
    use proptest::prelude::*;

    fn result(emotion: Emotion, intensity: f64) -> EmotionResult {
        EmotionResult {
            emotion,
            intensity,
            raw_compound: 0.0,
        }
    }

    #[test]
    fn test_positive_mapping() {
        let baseline = BaselineVoice::new(200, 0.7);
        let profile = emotion_to_voice(&baseline, &result(Emotion::Positive, 0.6));
        assert_eq!(profile.rate, 272);
        assert!((profile.volume - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_positive_volume_capped() {
        let baseline = BaselineVoice::default();
        let profile = emotion_to_voice(&baseline, &result(Emotion::Positive, 1.0));
        assert_eq!(profile.rate, 320);
        assert_eq!(profile.volume, 1.0);
    }

    #[test]
    fn test_negative_mapping() {
        let baseline = BaselineVoice::default();
        let profile = emotion_to_voice(&baseline, &result(Emotion::Negative, 0.5));
        assert_eq!(profile.rate, 140);
        assert!((profile.volume - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_negative_volume_floored() {
        let baseline = BaselineVoice::new(200, 0.4);
        let profile = emotion_to_voice(&baseline, &result(Emotion::Negative, 1.0));
        assert_eq!(profile.rate, 80);
        assert_eq!(profile.volume, MIN_VOLUME);
    }

    #[test]
    fn test_neutral_passthrough() {
        let baseline = BaselineVoice::new(175, 0.9);
        let profile = emotion_to_voice(&baseline, &result(Emotion::Neutral, 0.2));
        assert_eq!(profile.rate, 175);
        assert_eq!(profile.volume, 0.9);
    }

    #[test]
    fn test_rate_truncated() {
        // 175 * 1.12 = 196.0000...x，截断
        let baseline = BaselineVoice::new(175, 1.0);
        let profile = emotion_to_voice(&baseline, &result(Emotion::Positive, 0.2));
        assert_eq!(profile.rate, (175.0 * (1.0 + 0.6 * 0.2)) as u32);

        // 199 * 0.88 = 175.12
        let baseline = BaselineVoice::new(199, 1.0);
        let profile = emotion_to_voice(&baseline, &result(Emotion::Negative, 0.2));
        assert_eq!(profile.rate, 175);
    }

    #[test]
    fn test_spoken_text() {
        assert_eq!(
            spoken_text("I hate everything", Emotion::Negative),
            "...I hate everything"
        );
        assert_eq!(spoken_text("I love this!", Emotion::Positive), "I love this!");
        assert_eq!(spoken_text("The sky is blue.", Emotion::Neutral), "The sky is blue.");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_volume_bounds(
            intensity in MIN_INTENSITY..=MAX_INTENSITY,
            base_volume in 0.0f64..=1.0,
            base_rate in 50u32..400,
        ) {
            let baseline = BaselineVoice::new(base_rate, base_volume);

            let positive = emotion_to_voice(&baseline, &result(Emotion::Positive, intensity));
            prop_assert!(positive.volume <= MAX_VOLUME);
            prop_assert!(positive.rate >= base_rate);

            let negative = emotion_to_voice(&baseline, &result(Emotion::Negative, intensity));
            prop_assert!(negative.volume >= MIN_VOLUME);
            prop_assert!(negative.rate <= base_rate);
        }

        #[test]
        fn prop_mapping_is_deterministic(
            intensity in MIN_INTENSITY..=MAX_INTENSITY,
            base_rate in 50u32..400,
        ) {
            let baseline = BaselineVoice::new(base_rate, 0.8);
            for emotion in [Emotion::Positive, Emotion::Negative, Emotion::Neutral] {
                let r = result(emotion, intensity);
                prop_assert_eq!(emotion_to_voice(&baseline, &r), emotion_to_voice(&baseline, &r));
            }
        }
    }
}
