//! Loading waveforms and their sidecar annotation files from disk.

use crate::annotations::AnnotatedBeats;
use crate::error::{LoadError, ReplayResult};
use crate::repr::Waveform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read a WAV file into a [`Waveform`].
///
/// Samples are used as-is: no resampling and no channel conversion. Only mono
/// 16-bit integer PCM is accepted; anything else fails with
/// [`LoadError::UnsupportedFormat`].
pub fn load<P: AsRef<Path>>(path: P) -> ReplayResult<Waveform> {
    let path = path.as_ref();
    let reader = hound::WavReader::open(path).map_err(|err| LoadError::from_wav(path, err))?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            details: format!(
                "{}-bit {:?} samples, expected 16-bit integer",
                spec.bits_per_sample, spec.sample_format
            ),
        }
        .into());
    }
    if spec.channels != 1 {
        return Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            details: format!("{} channels, expected mono", spec.channels),
        }
        .into());
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| LoadError::from_wav(path, err))?;

    info!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        samples = samples.len(),
        "loaded waveform"
    );
    Ok(Waveform::from_vec(samples, spec.sample_rate))
}

/// Read an annotation file holding one beat time per non-empty line.
pub fn load_annotations<P: AsRef<Path>>(path: P) -> ReplayResult<AnnotatedBeats> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let beats = AnnotatedBeats::parse(&text)?;
    debug!(path = %path.display(), beats = beats.len(), "loaded annotations");
    Ok(beats)
}

/// The sidecar annotation path for a WAV file: same location and stem, `.txt` extension.
pub fn annotation_path_for<P: AsRef<Path>>(wav_path: P) -> PathBuf {
    wav_path.as_ref().with_extension("txt")
}

/// Load a WAV file together with its sidecar annotations.
pub fn load_with_annotations<P: AsRef<Path>>(
    wav_path: P,
) -> ReplayResult<(Waveform, AnnotatedBeats)> {
    let wav_path = wav_path.as_ref();
    let waveform = load(wav_path)?;
    let annotations = load_annotations(annotation_path_for(wav_path))?;
    Ok((waveform, annotations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, ReplayError};
    use crate::test_support::{TempDir, write_wav};

    #[test]
    fn test_load_round_trips_mono_i16() {
        let dir = TempDir::new("load_mono");
        let path = dir.path().join("clip.wav");
        write_wav(&path, 8000, 1, &[0, 100, -100, i16::MAX, i16::MIN]);

        let waveform = load(&path).unwrap();
        assert_eq!(waveform.sample_rate(), 8000);
        assert_eq!(
            waveform.samples().to_vec(),
            vec![0, 100, -100, i16::MAX, i16::MIN]
        );
    }

    #[test]
    fn test_load_missing_file_is_load_error() {
        let dir = TempDir::new("load_missing");
        let err = load(dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, ReplayError::Load(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_non_wav_is_load_error() {
        let dir = TempDir::new("load_garbage");
        let path = dir.path().join("notes.wav");
        fs::write(&path, b"this is definitely not a RIFF header").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ReplayError::Load(LoadError::Wav { .. })));
    }

    #[test]
    fn test_load_rejects_stereo() {
        let dir = TempDir::new("load_stereo");
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 8000, 2, &[1, 2, 3, 4]);

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Load(LoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_annotation_path_for() {
        assert_eq!(
            annotation_path_for("/data/train1.wav"),
            PathBuf::from("/data/train1.txt")
        );
        assert_eq!(annotation_path_for("clip"), PathBuf::from("clip.txt"));
    }

    #[test]
    fn test_load_annotations_parse_error() {
        let dir = TempDir::new("annotations_bad");
        let path = dir.path().join("beats.txt");
        fs::write(&path, "0.5\n1.0\nnot-a-number\n").unwrap();

        let err = load_annotations(&path).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Parse(ParseError::InvalidTimestamp { line: 3, .. })
        ));
    }

    #[test]
    fn test_load_with_annotations() {
        let dir = TempDir::new("with_annotations");
        let wav = dir.path().join("song.wav");
        write_wav(&wav, 8000, 1, &[0; 16]);
        fs::write(dir.path().join("song.txt"), "0.5\n1.0\n").unwrap();

        let (waveform, annotations) = load_with_annotations(&wav).unwrap();
        assert_eq!(waveform.len(), 16);
        assert_eq!(annotations.times(), &[0.5, 1.0]);
    }

    #[test]
    fn test_load_with_missing_annotations() {
        let dir = TempDir::new("without_annotations");
        let wav = dir.path().join("song.wav");
        write_wav(&wav, 8000, 1, &[0; 16]);

        let err = load_with_annotations(&wav).unwrap_err();
        assert!(matches!(err, ReplayError::Load(LoadError::Io { .. })));
    }
}
