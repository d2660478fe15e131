//! Multimedia module for faderkit.
//!
//! Loads audio samples into memory for sampler and drum-machine front ends:
//!
//! ```no_run
//! use faderkit_multimedia::load_sample;
//!
//! let kick = load_sample("samples/kick_01.wav")?;
//! assert!(kick.channels() <= 2);
//! # Ok::<(), faderkit_multimedia::MultimediaError>(())
//! ```
//!
//! ## Supported Formats
//!
//! - WAV
//! - MP3
//! - OGG Vorbis
//! - FLAC
//!
//! Only mono and stereo files are accepted.

mod error;
pub mod sample;

pub use error::{MultimediaError, Result};
pub use sample::{Sample, load_sample, load_sample_bytes};
