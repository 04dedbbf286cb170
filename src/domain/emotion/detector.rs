//! 情绪识别器
//!
//! 将情感评分器的 compound 分数映射为 POSITIVE / NEGATIVE / NEUTRAL + 强度

use crate::domain::sentiment::{SentimentAnalyzer, SentimentScorer};

use super::EmotionResult;

/// 情绪识别器
///
/// 任何字符串都可以分析（包括空串），空输入由调用方拒绝
pub struct EmotionDetector<S = SentimentAnalyzer> {
    scorer: S,
}

impl EmotionDetector<SentimentAnalyzer> {
    pub fn new() -> Self {
        Self::with_scorer(SentimentAnalyzer::new())
    }
}

impl Default for EmotionDetector<SentimentAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentScorer> EmotionDetector<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn analyze(&self, text: &str) -> EmotionResult {
        let compound = self.scorer.compound(text);
        let result = EmotionResult::from_compound(compound);

        tracing::debug!(
            text_len = text.len(),
            compound = compound,
            emotion = %result.emotion,
            intensity = result.intensity,
            "Emotion analyzed"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::Emotion;

    struct FixedScorer(f64);

    impl SentimentScorer for FixedScorer {
        fn compound(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_reference_sentences() {
        let detector = EmotionDetector::new();

        let result = detector.analyze("I love this!");
        assert_eq!(result.emotion, Emotion::Positive);
        assert!((result.intensity - 0.6696).abs() < 1e-4);

        let result = detector.analyze("I hate everything");
        assert_eq!(result.emotion, Emotion::Negative);
        assert!((result.raw_compound + 0.5719).abs() < 1e-4);

        let result = detector.analyze("The sky is blue.");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.intensity, 0.2);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let result = EmotionDetector::new().analyze("");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.raw_compound, 0.0);
    }

    #[test]
    fn test_injected_scorer() {
        let detector = EmotionDetector::with_scorer(FixedScorer(-0.05));
        let result = detector.analyze("anything");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.intensity, 0.2);

        let detector = EmotionDetector::with_scorer(FixedScorer(0.95));
        let result = detector.analyze("anything");
        assert_eq!(result.emotion, Emotion::Positive);
        assert_eq!(result.intensity, 0.95);
    }
}
