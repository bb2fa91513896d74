//! WAV export
//!
//! Serializes a waveform to a mono 16-bit PCM WAV file. Samples are
//! clamped to [-1, 1] before conversion.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::info;

use crate::error::Result;

/// Write `samples` to `path` as mono 16-bit PCM at `sample_rate`.
pub fn export_wav(samples: &[f64], sample_rate: u32, path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * f64::from(i16::MAX)) as i16)?;
    }
    writer.finalize()?;

    info!(
        "Wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::tone::Synthesizer;
    use hound::WavReader;
    use tempfile::tempdir;

    #[test]
    fn test_export_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let synth = Synthesizer::new(8000);
        let samples = synth.tone(440.0, 0.1, 0.5).unwrap();
        export_wav(&samples, 8000, &path).unwrap();

        let reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);

        let read: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(read.len(), samples.len());
        // Spot-check one sample against the conversion formula
        let expected = (samples[100].clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16;
        assert_eq!(read[100], expected);
    }

    #[test]
    fn test_export_clamps_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clamp.wav");

        export_wav(&[2.0, -2.0], 8000, &path).unwrap();

        let read: Vec<i16> = WavReader::open(&path)
            .unwrap()
            .into_samples()
            .map(|s| s.unwrap())
            .collect();
        assert_eq!(read, vec![i16::MAX, -i16::MAX]);
    }
}
