//! Loading audio samples into memory.
//!
//! A [`Sample`] is a fully decoded clip held as interleaved `f32` frames,
//! ready to hand to a sampler voice or to draw as a waveform. Decoding is
//! done by `rodio`, so every format it supports (WAV, FLAC, Ogg Vorbis, MP3)
//! can be loaded. Only mono and stereo material is accepted.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use std::time::Duration;

use faderkit_core::logging::targets;
use rodio::{Decoder, Source};

use crate::error::{MultimediaError, Result};

/// A decoded audio clip.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    data: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl Sample {
    /// Interleaved samples, one value per channel per frame.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Take ownership of the interleaved samples.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Number of channels (1 or 2).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Frames per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.data.len() / self.channels as usize
    }

    /// Playing time at the native sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }

    /// Samples of one channel, de-interleaved.
    ///
    /// Returns `None` if `channel` is out of range.
    pub fn channel(&self, channel: u16) -> Option<Vec<f32>> {
        if channel >= self.channels {
            return None;
        }
        Some(
            self.data
                .iter()
                .skip(channel as usize)
                .step_by(self.channels as usize)
                .copied()
                .collect(),
        )
    }
}

/// Decode an audio file from disk.
///
/// # Example
///
/// ```no_run
/// let sample = faderkit_multimedia::load_sample("samples/kick_01.wav")?;
/// println!("{} frames at {} Hz", sample.frames(), sample.sample_rate());
/// # Ok::<(), faderkit_multimedia::MultimediaError>(())
/// ```
pub fn load_sample(path: impl AsRef<Path>) -> Result<Sample> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        tracing::warn!(target: targets::SAMPLE, path = %path.display(), error = %source, "failed to open sample");
        MultimediaError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let sample = decode(BufReader::new(file)).inspect_err(|err| {
        tracing::warn!(target: targets::SAMPLE, path = %path.display(), error = %err, "failed to load sample");
    })?;
    tracing::debug!(
        target: targets::SAMPLE,
        path = %path.display(),
        channels = sample.channels,
        frames = sample.frames(),
        "sample loaded"
    );
    Ok(sample)
}

/// Decode an audio file that is already in memory.
pub fn load_sample_bytes(data: Vec<u8>) -> Result<Sample> {
    decode(Cursor::new(data))
}

fn decode<R>(reader: R) -> Result<Sample>
where
    R: Read + Seek + Send + Sync + 'static,
{
    let source = Decoder::new(reader)?;
    let channels = source.channels();
    let sample_rate = source.sample_rate();

    if !(channels == 1 || channels == 2) {
        return Err(MultimediaError::UnsupportedFormat(format!(
            "{channels} channels, only mono and stereo are supported"
        )));
    }

    let data: Vec<f32> = source.convert_samples::<f32>().collect();
    Ok(Sample {
        data,
        channels,
        sample_rate,
    })
}
