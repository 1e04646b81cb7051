//! Minimal RIFF/WAVE writer for silent placeholder sounds.

pub const WAVE_FORMAT_PCM: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WaveFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WaveFormat {
    /// Mono, 22050 Hz, 8-bit: the classic Quake sound format.
    pub const PLACEHOLDER: WaveFormat = WaveFormat {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 8,
    };

    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}

impl Default for WaveFormat {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// `RIFF` container with a PCM `fmt ` chunk and an empty `data` chunk.
pub fn encode_silent_wav(format: WaveFormat) -> Vec<u8> {
    let data_len = 0u32;
    let riff_len = 4 + (8 + FMT_CHUNK_LEN) + (8 + data_len);

    let mut out = Vec::with_capacity(8 + riff_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_len.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    out.extend_from_slice(&WAVE_FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&format.channels.to_le_bytes());
    out.extend_from_slice(&format.sample_rate.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&format.block_align().to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out
}
