use crate::config::{LENGTH_ERROR_MARGIN, VALUE_ERROR_MARGIN};
use crate::error::WaveMismatch;
use hound::SampleFormat;
use std::{error::Error, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i32>,
}

impl Waveform {
    /// Length in frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    pub length_margin: usize,
    pub value_margin: i64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            length_margin: LENGTH_ERROR_MARGIN,
            value_margin: VALUE_ERROR_MARGIN,
        }
    }
}

pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<Waveform, Box<dyn Error>> {
    let path = path.as_ref();
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    println!(
        "File info: {}\n  ├ Sample Rate: {} Hz\n  ├ Channels: {}\n  ├ Bits: {}\n  ├ Format: {:?}\n  └ Samples: {}",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format,
        reader.len()
    );

    if spec.sample_format == SampleFormat::Float {
        eprintln!("Received floating-point audio, only integer PCM is compared");
        return Err("Only integer PCM audio is supported".into());
    }

    let samples: Vec<i32> = reader.samples::<i32>().collect::<Result<_, _>>()?;

    Ok(Waveform {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        samples,
    })
}

pub fn compare_samples(
    reference: &[i32],
    port: &[i32],
    tolerance: Tolerance,
) -> Result<usize, WaveMismatch> {
    check_length(reference.len(), port.len(), tolerance.length_margin)?;
    check_values(reference, port, tolerance.value_margin)
}

/// Compare two decoded waveforms, measuring length in frames.
pub fn compare_waveforms(
    reference: &Waveform,
    port: &Waveform,
    tolerance: Tolerance,
) -> Result<usize, WaveMismatch> {
    if reference.channels != port.channels {
        return Err(WaveMismatch::Channels {
            reference: reference.channels,
            port: port.channels,
        });
    }

    check_length(reference.frames(), port.frames(), tolerance.length_margin)?;
    check_values(&reference.samples, &port.samples, tolerance.value_margin)
}

pub fn compare_wav_files<P: AsRef<Path>, Q: AsRef<Path>>(
    reference: P,
    port: Q,
    tolerance: Tolerance,
) -> Result<usize, Box<dyn Error>> {
    let reference = load_wav(reference)?;
    let port = load_wav(port)?;

    if reference.sample_rate != port.sample_rate {
        println!(
            "Sample rates differ ({} Hz vs {} Hz), comparing samples anyway",
            reference.sample_rate, port.sample_rate
        );
    }

    let compared = compare_waveforms(&reference, &port, tolerance)?;
    println!(
        "Waveforms match:\n  ├ Compared: {} samples\n  ├ Length margin: {}\n  └ Value margin: {}",
        compared, tolerance.length_margin, tolerance.value_margin
    );
    Ok(compared)
}

fn check_length(reference: usize, port: usize, margin: usize) -> Result<(), WaveMismatch> {
    let diff = reference.abs_diff(port);
    if diff >= margin {
        return Err(WaveMismatch::Length {
            reference,
            port,
            diff,
            margin,
        });
    }
    Ok(())
}

fn check_values(reference: &[i32], port: &[i32], margin: i64) -> Result<usize, WaveMismatch> {
    let overlap = reference.len().min(port.len());

    for (index, (&a, &b)) in reference.iter().zip(port.iter()).enumerate() {
        let diff = (a as i64 - b as i64).abs();
        if diff >= margin {
            return Err(WaveMismatch::Sample {
                index,
                reference: a,
                port: b,
                diff,
                margin,
            });
        }
    }

    Ok(overlap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::path::PathBuf;

    fn ramp(len: usize) -> Vec<i32> {
        (0..len as i32).map(|i| (i * 37) % 2000 - 1000).collect()
    }

    fn write_wav(dir: &Path, name: &str, channels: u16, samples: &[i16]) -> PathBuf {
        let path = dir.join(name);
        let spec = WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn test_identical_arrays_pass() {
        let a = ramp(500);
        assert_eq!(compare_samples(&a, &a.clone(), Tolerance::default()), Ok(500));
    }

    #[test]
    fn test_length_off_by_one_passes() {
        let a = ramp(500);
        let b = ramp(499);
        assert_eq!(compare_samples(&a, &b, Tolerance::default()), Ok(499));
        assert_eq!(compare_samples(&b, &a, Tolerance::default()), Ok(499));
    }

    #[test]
    fn test_length_off_by_two_fails() {
        let a = ramp(500);
        let b = ramp(498);
        assert_eq!(
            compare_samples(&a, &b, Tolerance::default()),
            Err(WaveMismatch::Length {
                reference: 500,
                port: 498,
                diff: 2,
                margin: 2,
            })
        );
    }

    #[test]
    fn test_sample_off_by_eleven_fails() {
        let a = ramp(100);
        let mut b = a.clone();
        b[42] += 11;

        let err = compare_samples(&a, &b, Tolerance::default()).unwrap_err();
        assert!(matches!(err, WaveMismatch::Sample { index: 42, diff: 11, .. }));
    }

    #[test]
    fn test_value_margin_is_exclusive() {
        let a = ramp(10);
        let mut b = a.clone();

        b[3] -= 9;
        assert!(compare_samples(&a, &b, Tolerance::default()).is_ok());

        b[3] = a[3] - 10;
        assert!(compare_samples(&a, &b, Tolerance::default()).is_err());
    }

    #[test]
    fn test_reports_first_violation() {
        let a = vec![0; 20];
        let mut b = a.clone();
        b[5] = 50;
        b[12] = -50;

        let err = compare_samples(&a, &b, Tolerance::default()).unwrap_err();
        assert!(matches!(err, WaveMismatch::Sample { index: 5, port: 50, .. }));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let a = vec![i32::MIN];
        let b = vec![i32::MAX];
        assert!(compare_samples(&a, &b, Tolerance::default()).is_err());
    }

    #[test]
    fn test_custom_tolerance() {
        let a = ramp(50);
        let b: Vec<i32> = a.iter().map(|s| s + 15).collect();
        let loose = Tolerance {
            length_margin: 2,
            value_margin: 16,
        };
        assert!(compare_samples(&a, &b, Tolerance::default()).is_err());
        assert_eq!(compare_samples(&a, &b, loose), Ok(50));
    }

    #[test]
    fn test_empty_arrays_pass() {
        assert_eq!(compare_samples(&[], &[], Tolerance::default()), Ok(0));
        assert_eq!(compare_samples(&[], &[7], Tolerance::default()), Ok(0));
    }

    #[test]
    fn test_channel_mismatch() {
        let mono = Waveform {
            sample_rate: 8000,
            channels: 1,
            samples: vec![0; 8],
        };
        let stereo = Waveform {
            channels: 2,
            ..mono.clone()
        };
        assert_eq!(
            compare_waveforms(&mono, &stereo, Tolerance::default()),
            Err(WaveMismatch::Channels {
                reference: 1,
                port: 2
            })
        );
    }

    #[test]
    fn test_stereo_length_counts_frames() {
        let reference = Waveform {
            sample_rate: 8000,
            channels: 2,
            samples: vec![0; 20],
        };
        // one frame short, two samples short
        let port = Waveform {
            samples: vec![0; 18],
            ..reference.clone()
        };
        assert_eq!(reference.frames(), 10);
        assert_eq!(compare_waveforms(&reference, &port, Tolerance::default()), Ok(18));
    }

    #[test]
    fn test_wav_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let samples: Vec<i16> = (0..400).map(|i| ((i * 91) % 3000 - 1500) as i16).collect();
        let nudged: Vec<i16> = samples.iter().map(|s| s + 3).collect();

        let reference = write_wav(dir.path(), "test_py.wav", 1, &samples);
        let port = write_wav(dir.path(), "test_c.wav", 1, &nudged[..399]);

        let loaded = load_wav(&reference).unwrap();
        assert_eq!(loaded.sample_rate, 8000);
        assert_eq!(loaded.channels, 1);
        assert_eq!(loaded.samples.len(), 400);
        assert_eq!(loaded.samples[1], samples[1] as i32);

        assert_eq!(
            compare_wav_files(&reference, &port, Tolerance::default()).unwrap(),
            399
        );
    }

    #[test]
    fn test_wav_files_diverging_fail() {
        let dir = tempfile::tempdir().unwrap();
        let samples = vec![100i16; 64];
        let mut broken = samples.clone();
        broken[10] = 200;

        let reference = write_wav(dir.path(), "ref.wav", 1, &samples);
        let port = write_wav(dir.path(), "port.wav", 1, &broken);

        let err = compare_wav_files(&reference, &port, Tolerance::default()).unwrap_err();
        let mismatch = err.downcast_ref::<WaveMismatch>().unwrap();
        assert!(matches!(mismatch, WaveMismatch::Sample { index: 10, .. }));
    }

    #[test]
    fn test_float_wav_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.finalize().unwrap();

        assert!(load_wav(&path).is_err());
    }

    #[test]
    fn test_missing_wav_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_wav(dir.path().join("absent.wav")).is_err());
    }
}
