//! WAV Inspector - 基于 symphonia 的 WAV 信息提取
//!
//! 另外提供流式 WAV 头修正：管道输出的 WAV（如 espeak-ng --stdout）
//! 写入时不知道总长度，RIFF / data 块大小是占位值，需要在落盘前按实际长度回填

use std::io::Cursor;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioInfo, AudioInspectorPort, InspectError};

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// WAV 信息提取器
#[derive(Debug, Clone, Copy, Default)]
pub struct WavInspector;

impl WavInspector {
    pub fn new() -> Self {
        Self
    }
}

impl AudioInspectorPort for WavInspector {
    fn inspect(&self, wav_data: &[u8]) -> Result<AudioInfo, InspectError> {
        let cursor = Cursor::new(wav_data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        hint.with_extension("wav");

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| InspectError::DecodingError(format!("Probe failed: {}", e)))?;

        let format = probed.format;
        let track = format
            .default_track()
            .ok_or_else(|| InspectError::DecodingError("No audio track found".to_string()))?;
        let params = &track.codec_params;

        let sample_rate = params
            .sample_rate
            .ok_or_else(|| InspectError::DecodingError("Unknown sample rate".to_string()))?;
        let channels = params
            .channels
            .map(|c| c.count() as u8)
            .ok_or_else(|| InspectError::DecodingError("Unknown channel count".to_string()))?;
        let bits_per_sample = params.bits_per_sample.unwrap_or(16) as u16;
        let frames = params.n_frames.unwrap_or(0);

        let duration_ms = if sample_rate > 0 {
            frames * 1000 / sample_rate as u64
        } else {
            0
        };
        let data_size =
            frames as usize * channels as usize * (bits_per_sample as usize / 8).max(1);

        Ok(AudioInfo {
            duration_ms,
            sample_rate,
            channels,
            bits_per_sample,
            data_size,
        })
    }
}

/// 按实际数据长度回填 RIFF 和 data 块大小
///
/// data 块之后的内容全部视为音频数据
pub fn repair_streamed_header(data: &mut [u8]) -> Result<(), InspectError> {
    if data.len() < RIFF_HEADER_LEN + CHUNK_HEADER_LEN {
        return Err(InspectError::InvalidInput("WAV data too short".to_string()));
    }
    if &data[0..4] != b"RIFF" {
        return Err(InspectError::InvalidInput(
            "Invalid WAV: missing RIFF header".to_string(),
        ));
    }
    if &data[8..12] != b"WAVE" {
        return Err(InspectError::InvalidInput(
            "Invalid WAV: missing WAVE identifier".to_string(),
        ));
    }

    let riff_size = (data.len() - 8) as u32;
    data[4..8].copy_from_slice(&riff_size.to_le_bytes());

    let mut pos = RIFF_HEADER_LEN;
    while pos + CHUNK_HEADER_LEN <= data.len() {
        let chunk_size = u32::from_le_bytes([
            data[pos + 4],
            data[pos + 5],
            data[pos + 6],
            data[pos + 7],
        ]) as usize;

        if &data[pos..pos + 4] == b"data" {
            let actual = (data.len() - pos - CHUNK_HEADER_LEN) as u32;
            data[pos + 4..pos + 8].copy_from_slice(&actual.to_le_bytes());
            return Ok(());
        }

        // 块大小为奇数时有一个填充字节
        pos = pos
            .saturating_add(CHUNK_HEADER_LEN)
            .saturating_add(chunk_size)
            .saturating_add(chunk_size % 2);
    }

    Err(InspectError::InvalidInput(
        "Invalid WAV: missing data chunk".to_string(),
    ))
}
