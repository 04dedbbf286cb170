//! 基于词典 + 规则的情感极性评分器
//!
//! 评分流程:
//! 1. 按空白切词，去掉首尾标点（表情符号整体保留）
//! 2. 查词典得到每个词的效价，叠加程度副词 / 全大写强调 / 否定词修正
//! 3. "but" 之前的效价减半，之后的放大 1.5 倍
//! 4. 感叹号、问号强调
//! 5. 归一化为 [-1, 1] 的 compound 分数

use serde::Serialize;
use std::collections::HashMap;

use super::lexicon::{BOOSTERS, NEGATIONS, VALENCES};

/// 程度副词增强量
const BOOSTER_INCR: f64 = 0.293;
/// 全大写强调增量
const CAPS_INCR: f64 = 0.733;
/// 否定缩放系数
const NEGATION_SCALAR: f64 = -0.74;
/// 归一化常数
const NORMALIZE_ALPHA: f64 = 15.0;
/// 程度副词 / 否定词回看窗口
const LOOKBACK: usize = 3;

const EXCLAIM_WEIGHT: f64 = 0.292;
const MAX_EXCLAIMS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// 情感极性分数
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScores {
    /// 正向占比 [0, 1]
    pub positive: f64,
    /// 负向占比 [0, 1]
    pub negative: f64,
    /// 中性占比 [0, 1]
    pub neutral: f64,
    /// 综合极性 [-1, 1]
    pub compound: f64,
}

/// 情感评分抽象
///
/// EmotionDetector 只依赖 compound 分数，测试时可注入固定分数
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// 词典情感分析器
pub struct SentimentAnalyzer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

struct Token<'a> {
    raw: &'a str,
    word: String,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let valences = VALENCES.iter().copied().collect();
        let boosters = BOOSTERS
            .iter()
            .map(|&(word, increase)| {
                (word, if increase { BOOSTER_INCR } else { -BOOSTER_INCR })
            })
            .collect();

        Self { valences, boosters }
    }

    /// 计算文本的情感极性分数
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = self.tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let cap_differential = has_cap_differential(&tokens);
        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, i, cap_differential))
            .collect();

        apply_but_check(&tokens, &mut sentiments);

        score_valence(&sentiments, text)
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        text.split_whitespace()
            .filter_map(|raw| {
                let lower = raw.to_lowercase();
                if self.valences.contains_key(lower.as_str()) {
                    return Some(Token { raw, word: lower });
                }

                let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
                if stripped.is_empty() {
                    // 纯标点（如 "..." 或 "-"）不参与评分
                    return None;
                }

                Some(Token {
                    raw: stripped,
                    word: stripped.to_lowercase(),
                })
            })
            .collect()
    }

    fn token_valence(&self, tokens: &[Token<'_>], i: usize, cap_differential: bool) -> f64 {
        let token = &tokens[i];

        // 程度副词本身不带情感
        if self.boosters.contains_key(token.word.as_str()) {
            return 0.0;
        }

        let Some(&base) = self.valences.get(token.word.as_str()) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_differential && is_shouting(token.raw) {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 1..=LOOKBACK {
            if i < distance {
                break;
            }
            let prev = &tokens[i - distance];
            if self.valences.contains_key(prev.word.as_str()) {
                continue;
            }

            let mut scalar = self.booster_scalar(prev, valence, cap_differential);
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
        }

        let window_start = i.saturating_sub(LOOKBACK);
        if tokens[window_start..i].iter().any(|t| is_negation(&t.word)) {
            valence *= NEGATION_SCALAR;
        }

        valence
    }

    fn booster_scalar(&self, token: &Token<'_>, valence: f64, cap_differential: bool) -> f64 {
        let Some(&boost) = self.boosters.get(token.word.as_str()) else {
            return 0.0;
        };

        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_differential && is_shouting(token.raw) {
            scalar += CAPS_INCR.copysign(valence);
        }
        scalar
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}

/// 全大写（至少包含一个字母）
fn is_shouting(word: &str) -> bool {
    let mut has_alpha = false;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        has_alpha = true;
    }
    has_alpha
}

/// 部分词全大写时才视为强调（整句大写不算）
fn has_cap_differential(tokens: &[Token<'_>]) -> bool {
    let shouting = tokens.iter().filter(|t| is_shouting(t.raw)).count();
    shouting > 0 && shouting < tokens.len()
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't") || word.contains("n\u{2019}t")
}

fn apply_but_check(tokens: &[Token<'_>], sentiments: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.word == "but") else {
        return;
    };

    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= 0.5;
        } else if i > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(MAX_EXCLAIMS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclaims as f64 * EXCLAIM_WEIGHT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    let normalized = score / (score * score + NORMALIZE_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            positive_sum += s + 1.0;
        } else if s < 0.0 {
            negative_sum += s - 1.0;
        } else {
            neutral_count += 1;
        }
    }

    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count as f64;
    if total == 0.0 {
        return PolarityScores::default();
    }

    PolarityScores {
        positive: round_to(positive_sum / total, 3),
        negative: round_to(negative_sum.abs() / total, 3),
        neutral: round_to(neutral_count as f64 / total, 3),
        compound: round_to(compound, 4),
    }
}
