//! Sentiment - 词典情感评分
//!
//! 为情绪识别提供 compound 极性分数

mod analyzer;
mod lexicon;

pub use analyzer::{PolarityScores, SentimentAnalyzer, SentimentScorer};
