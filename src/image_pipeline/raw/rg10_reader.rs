//! Reader for headerless RG10 sensor dumps.
//!
//! An RG10 frame is a bare sequence of 16-bit little-endian words, one per
//! photosite, with only the low bits (10 for the reference sensor) carrying
//! signal. Nothing in the stream describes its own geometry, so the expected
//! length comes entirely from the [`FrameConfig`].

use std::io::Read;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, warn};

use crate::image_pipeline::common::config::FrameConfig;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::raw::reader::{RawFrameReader, open_input};
use crate::image_pipeline::raw::types::SensorFrame;

pub struct Rg10Reader;

impl RawFrameReader for Rg10Reader {
    /// Reads exactly `config.raw_frame_len()` bytes and decodes them into a
    /// [`SensorFrame`].
    ///
    /// With `strict_size` set, any other stream length is a
    /// [`PipelineError::SizeMismatch`]. The stream is never read past one
    /// byte beyond the frame, so for an over-long stream `actual` is that
    /// lower bound. Without `strict_size`, a short stream is padded with zero
    /// samples and nothing after the frame is read.
    fn read_frame(&self, input: &mut dyn Read, config: &FrameConfig) -> Result<SensorFrame> {
        let expected = config.raw_frame_len();
        debug!("Reading RG10 frame, expecting {} bytes", expected);

        let mut bytes = Vec::with_capacity(expected);
        (&mut *input).take(expected as u64).read_to_end(&mut bytes)?;

        if config.strict_size {
            let mut extra = Vec::with_capacity(1);
            input.take(1).read_to_end(&mut extra)?;
            let actual = bytes.len() + extra.len();
            if actual != expected {
                return Err(PipelineError::SizeMismatch { expected, actual });
            }
        } else if bytes.len() != expected {
            warn!(
                "Raw frame is {} bytes, expected {}; zero-filling in unchecked mode",
                bytes.len(),
                expected
            );
            bytes.resize(expected, 0);
        }

        let mut samples = vec![0u16; expected / 2];
        LittleEndian::read_u16_into(&bytes, &mut samples);

        debug!(
            "Decoded {} samples ({}x{} sensor grid)",
            samples.len(),
            config.sensor_width(),
            config.sensor_height()
        );

        SensorFrame::new(config.sensor_width(), config.sensor_height(), samples)
    }

    /// Like the provided `read_file`, but a regular file of the wrong length
    /// is rejected from its metadata before any sample is read, so the
    /// reported size is exact.
    fn read_file(&self, path: &Path, config: &FrameConfig) -> Result<SensorFrame> {
        let mut file = open_input(path)?;

        if config.strict_size {
            let metadata = file.metadata()?;
            let expected = config.raw_frame_len();
            if metadata.is_file() && metadata.len() != expected as u64 {
                return Err(PipelineError::SizeMismatch {
                    expected,
                    actual: metadata.len() as usize,
                });
            }
        }

        self.read_frame(&mut file, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn config_2x1(strict: bool) -> FrameConfig {
        FrameConfig::builder().dimensions(2, 1).strict_size(strict).build()
    }

    fn le_bytes(samples: &[u16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_decodes_little_endian_words() {
        let samples: Vec<u16> = vec![1, 2, 3, 1023, 256, 5, 6, 7];
        let mut input = Cursor::new(le_bytes(&samples));

        let frame = Rg10Reader.read_frame(&mut input, &config_2x1(true)).unwrap();

        assert_eq!(frame.sensor_width(), 4);
        assert_eq!(frame.sensor_height(), 2);
        assert_eq!(frame.samples(), samples.as_slice());
    }

    #[test]
    fn test_short_stream_is_size_mismatch() {
        let mut input = Cursor::new(vec![0u8; 15]);

        let err = Rg10Reader.read_frame(&mut input, &config_2x1(true)).unwrap_err();

        assert!(matches!(err, PipelineError::SizeMismatch { expected: 16, actual: 15 }));
    }

    #[test]
    fn test_long_stream_is_size_mismatch() {
        let mut input = Cursor::new(vec![0u8; 20]);

        let err = Rg10Reader.read_frame(&mut input, &config_2x1(true)).unwrap_err();

        assert!(matches!(err, PipelineError::SizeMismatch { expected: 16, actual: 17 }));
    }

    #[test]
    fn test_unchecked_mode_stops_after_frame_on_endless_stream() {
        let mut input = io::repeat(7).take(8 << 30);

        let frame = Rg10Reader.read_frame(&mut input, &config_2x1(false)).unwrap();

        assert_eq!(frame.samples(), &[0x0707; 8]);
        assert_eq!(input.limit(), (8 << 30) - 16);
    }

    #[test]
    fn test_strict_mode_reads_one_byte_past_frame() {
        let mut input = io::repeat(7).take(8 << 30);

        let err = Rg10Reader.read_frame(&mut input, &config_2x1(true)).unwrap_err();

        assert!(matches!(err, PipelineError::SizeMismatch { expected: 16, actual: 17 }));
        assert_eq!(input.limit(), (8 << 30) - 17);
    }

    #[test]
    fn test_oversized_file_reports_exact_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.raw");
        std::fs::write(&path, vec![0u8; 40]).unwrap();

        let err = Rg10Reader.read_file(&path, &config_2x1(true)).unwrap_err();

        assert!(matches!(err, PipelineError::SizeMismatch { expected: 16, actual: 40 }));
    }

    #[test]
    fn test_unchecked_mode_zero_fills_short_stream() {
        let mut input = Cursor::new(le_bytes(&[9, 8, 7]));

        let frame = Rg10Reader.read_frame(&mut input, &config_2x1(false)).unwrap();

        assert_eq!(frame.samples(), &[9, 8, 7, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_unchecked_mode_ignores_trailing_bytes() {
        let mut input = Cursor::new(le_bytes(&[1, 1, 1, 1, 1, 1, 1, 1, 42, 42]));

        let frame = Rg10Reader.read_frame(&mut input, &config_2x1(false)).unwrap();

        assert_eq!(frame.samples(), &[1; 8]);
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.raw");

        let err = Rg10Reader.read_file(&missing, &config_2x1(true)).unwrap_err();

        assert!(matches!(err, PipelineError::ResourceUnavailable(_)));
    }
}
