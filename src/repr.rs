//! In-memory representations of the replayed audio: the decoded [`Waveform`]
//! and the fixed-size [`Chunk`]s that are served from it.

use ndarray::{Array1, ArrayView1, s};

/// Default number of samples per chunk, matching one simulated microphone read.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// A decoded mono waveform of signed 16-bit samples.
///
/// The waveform is immutable once built; loading a new file produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Array1<i16>,
    sample_rate: u32,
}

impl Waveform {
    /// Create a waveform from owned samples.
    ///
    /// A zero sample rate is accepted here and rejected when a run is started.
    pub fn new(samples: Array1<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Create a waveform from a plain vector of samples.
    pub fn from_vec(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self::new(Array1::from(samples), sample_rate)
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the raw samples.
    pub fn samples(&self) -> ArrayView1<'_, i16> {
        self.samples.view()
    }

    /// Duration in seconds, or zero when the sample rate is zero.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / f64::from(self.sample_rate)
    }
}

/// A contiguous slice of a waveform, simulating one microphone read.
///
/// Chunk `i` covers samples `[i * chunk_size, (i + 1) * chunk_size)` clamped to
/// the waveform, so the last chunk may be short and chunks past the end are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    index: usize,
    start: usize,
    samples: Array1<i16>,
}

impl Chunk {
    /// An empty chunk at the given index.
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            start: 0,
            samples: Array1::from(Vec::new()),
        }
    }

    /// Chunk index within the waveform.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Offset of the first sample of this chunk within the waveform.
    pub const fn start_sample(&self) -> usize {
        self.start
    }

    /// Number of samples in the chunk.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the chunk's samples.
    pub fn samples(&self) -> ArrayView1<'_, i16> {
        self.samples.view()
    }

    /// The largest sample value and its offset within the chunk.
    ///
    /// Values are compared signed, and the first occurrence wins on ties.
    /// Returns `None` for an empty chunk.
    pub fn peak(&self) -> Option<(usize, i16)> {
        self.samples
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (offset, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((offset, value)),
            })
    }
}

/// Slice chunk `index` out of `waveform`.
///
/// Bounds are clamped, so an index past the end yields an empty chunk rather
/// than an error. The caller owns cursor advancement.
pub fn next_chunk(waveform: &Waveform, index: usize, chunk_size: usize) -> Chunk {
    let len = waveform.len();
    let start = index.saturating_mul(chunk_size).min(len);
    let end = start.saturating_add(chunk_size).min(len);

    Chunk {
        index,
        start,
        samples: waveform.samples.slice(s![start..end]).to_owned(),
    }
}
