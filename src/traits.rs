//! Core traits shared by the sources and the estimator.

use crate::repr::{Chunk, Waveform, next_chunk};

/// Represents an audio source that serves fixed-size chunks by index.
///
/// Sources are stateless with respect to playback: the caller owns the
/// cursor and asks for whichever chunk it wants next.
pub trait AudioSource {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Total number of samples available.
    fn len(&self) -> usize;

    /// Return chunk `index`, clamped to the source's bounds.
    fn chunk(&self, index: usize, chunk_size: usize) -> Chunk;

    /// Whether the source holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Duration in seconds, or zero when the sample rate is zero.
    fn duration_secs(&self) -> f64 {
        match self.sample_rate() {
            0 => 0.0,
            rate => self.len() as f64 / f64::from(rate),
        }
    }

    /// Number of chunks needed to cover the whole source.
    fn chunk_count(&self, chunk_size: usize) -> usize {
        if chunk_size == 0 {
            return 0;
        }
        self.len().div_ceil(chunk_size)
    }
}

impl AudioSource for Waveform {
    fn sample_rate(&self) -> u32 {
        Waveform::sample_rate(self)
    }

    fn len(&self) -> usize {
        Waveform::len(self)
    }

    fn chunk(&self, index: usize, chunk_size: usize) -> Chunk {
        next_chunk(self, index, chunk_size)
    }
}

impl<S: AudioSource + ?Sized> AudioSource for &S {
    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn chunk(&self, index: usize, chunk_size: usize) -> Chunk {
        (**self).chunk(index, chunk_size)
    }
}
