//! Tone Backend - 离线确定性合成
//!
//! 每个词渲染为一段正弦音，时长由语速决定，振幅由音量决定。
//! 不依赖任何外部程序，用于开发环境和测试

use async_trait::async_trait;
use std::f64::consts::PI;
use std::io::Cursor;

use crate::application::ports::{
    BackendProperties, SpeechBackendPort, SynthesisError, SynthesisRequest, SynthesisResponse,
};
use crate::domain::voice::HESITATION_PREFIX;

pub const TONE_SAMPLE_RATE: u32 = 22050;

const BASE_FREQUENCY: f64 = 220.0;
const FREQUENCY_STEP: f64 = 40.0;
const PEAK_RATIO: f64 = 0.8;
/// 每个词槽中发声部分的占比，其余为静音
const VOICED_RATIO: f64 = 0.8;
const FADE_SAMPLES: usize = 110;

/// Tone 后端
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneBackend;

impl ToneBackend {
    pub fn new() -> Self {
        Self
    }

    /// 渲染为 16-bit 单声道 WAV
    pub fn render(&self, request: &SynthesisRequest) -> Result<Vec<u8>, hound::Error> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: TONE_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let slot_samples =
            (TONE_SAMPLE_RATE as f64 * 60.0 / request.rate.max(1) as f64).round() as usize;
        let voiced_samples = (slot_samples as f64 * VOICED_RATIO) as usize;
        let amplitude = request.volume.clamp(0.0, 1.0) * PEAK_RATIO * i16::MAX as f64;

        let mut buffer = Vec::new();
        let mut writer = hound::WavWriter::new(Cursor::new(&mut buffer), spec)?;

        // 犹豫前缀渲染为一整个静音词槽
        let text = match request.text.strip_prefix(HESITATION_PREFIX) {
            Some(rest) => {
                for _ in 0..slot_samples {
                    writer.write_sample(0i16)?;
                }
                rest
            }
            None => request.text.as_str(),
        };

        for word in text.split_whitespace() {
            let frequency = BASE_FREQUENCY + (word.chars().count() % 8) as f64 * FREQUENCY_STEP;
            for n in 0..slot_samples {
                let sample = if n < voiced_samples {
                    let fade = fade_gain(n, voiced_samples);
                    let t = n as f64 / TONE_SAMPLE_RATE as f64;
                    (amplitude * fade * (2.0 * PI * frequency * t).sin()) as i16
                } else {
                    0
                };
                writer.write_sample(sample)?;
            }
        }

        writer.finalize()?;
        Ok(buffer)
    }
}

fn fade_gain(n: usize, len: usize) -> f64 {
    let edge = n.min(len.saturating_sub(n + 1));
    if edge >= FADE_SAMPLES {
        1.0
    } else {
        edge as f64 / FADE_SAMPLES as f64
    }
}

#[async_trait]
impl SpeechBackendPort for ToneBackend {
    fn name(&self) -> &'static str {
        "tone"
    }

    fn default_properties(&self) -> BackendProperties {
        BackendProperties {
            rate: Some(200),
            volume: Some(1.0),
        }
    }

    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        let audio_data = self
            .render(&request)
            .map_err(|e| SynthesisError::ServiceError(format!("Tone rendering failed: {}", e)))?;

        Ok(SynthesisResponse { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, rate: u32, volume: f64) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            voice: None,
            rate,
            volume,
        }
    }

    fn decode(data: &[u8]) -> (hound::WavSpec, Vec<i16>) {
        let reader = hound::WavReader::new(Cursor::new(data)).unwrap();
        let spec = reader.spec();
        let samples = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        (spec, samples)
    }

    #[tokio::test]
    async fn test_emits_mono_wav() {
        let response = ToneBackend::new()
            .synthesize(request("hello world", 200, 1.0))
            .await
            .unwrap();
        let (spec, samples) = decode(&response.audio_data);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, TONE_SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);
        // 2 个词，每个词 60/200 秒
        assert_eq!(samples.len(), 2 * 6615);
    }

    #[test]
    fn test_faster_rate_is_shorter() {
        let backend = ToneBackend::new();
        let slow = decode(&backend.render(&request("one two three", 100, 1.0)).unwrap()).1;
        let fast = decode(&backend.render(&request("one two three", 300, 1.0)).unwrap()).1;
        assert!(fast.len() < slow.len());
    }

    #[test]
    fn test_volume_scales_amplitude() {
        let backend = ToneBackend::new();
        let peak = |volume| {
            decode(&backend.render(&request("loud", 200, volume)).unwrap())
                .1
                .iter()
                .map(|s| s.unsigned_abs())
                .max()
                .unwrap()
        };
        assert!(peak(0.2) < peak(1.0));
        assert!(peak(1.0) <= (i16::MAX as f64 * PEAK_RATIO) as u16 + 1);
    }

    #[test]
    fn test_hesitation_prefix_adds_silence() {
        let backend = ToneBackend::new();
        let plain = decode(&backend.render(&request("no", 200, 1.0)).unwrap()).1;
        let hesitant = decode(&backend.render(&request("...no", 200, 1.0)).unwrap()).1;

        assert_eq!(hesitant.len(), plain.len() * 2);
        assert!(hesitant[..plain.len()].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_empty_text_is_valid_wav() {
        let data = ToneBackend::new().render(&request("", 200, 1.0)).unwrap();
        let (_, samples) = decode(&data);
        assert!(samples.is_empty());
    }
}
