//! Frame geometry and conversion configuration

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::debayer::BayerPattern;

/// Samples in one 2x2 mosaic block.
pub const SAMPLES_PER_BLOCK: usize = 4;

/// Bytes per stored sensor sample (10 bits held in a 16 bit word).
pub const BYTES_PER_SAMPLE: usize = 2;

/// What to do when every sample of a frame has the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Skip the rescale and leave every sample at its original value
    PassThrough,
    /// Fail with `PipelineError::DegenerateFrame`
    Reject,
}

/// Configuration for RG10 to TGA conversion
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Output width in pixels (mosaic blocks per sensor row pair)
    pub width: usize,
    /// Output height in pixels (mosaic blocks per sensor column pair)
    pub height: usize,
    /// Meaningful bits per input sample
    pub input_bits: u32,
    /// Bits per output color channel
    pub output_bits: u32,
    /// Color layout of each 2x2 mosaic block
    pub pattern: BayerPattern,
    /// Whether to stretch the frame to the full input range before debayering
    pub normalize: bool,
    /// Behavior of the normalizer on a uniform frame
    pub degenerate_policy: DegeneratePolicy,
    /// Whether a raw input of the wrong length is an error (true) or is
    /// zero-filled / truncated to the expected length (false)
    pub strict_size: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            input_bits: 10,
            output_bits: 8,
            pattern: BayerPattern::Rggb,
            normalize: true,
            degenerate_policy: DegeneratePolicy::PassThrough,
            strict_size: true,
        }
    }
}

impl FrameConfig {
    pub fn builder() -> FrameConfigBuilder {
        FrameConfigBuilder::default()
    }

    pub fn sensor_width(&self) -> usize {
        self.width * 2
    }

    pub fn sensor_height(&self) -> usize {
        self.height * 2
    }

    /// Exact byte length of one raw frame.
    pub fn raw_frame_len(&self) -> usize {
        self.width * self.height * SAMPLES_PER_BLOCK * BYTES_PER_SAMPLE
    }

    pub fn input_max(&self) -> u16 {
        ((1u32 << self.input_bits) - 1) as u16
    }

    pub fn output_max(&self) -> u8 {
        ((1u32 << self.output_bits) - 1) as u8
    }

    /// Checks that the geometry and bit depths can be represented end to end.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidGeometry(format!(
                "frame must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }

        if self.width > u16::MAX as usize || self.height > u16::MAX as usize {
            return Err(PipelineError::InvalidGeometry(format!(
                "{}x{} exceeds the TGA limit of {}",
                self.width,
                self.height,
                u16::MAX
            )));
        }

        if !(1..=16).contains(&self.input_bits) {
            return Err(PipelineError::InvalidGeometry(format!(
                "input depth of {} bits is not in 1..=16",
                self.input_bits
            )));
        }

        if !(1..=8).contains(&self.output_bits) {
            return Err(PipelineError::InvalidGeometry(format!(
                "output depth of {} bits is not in 1..=8",
                self.output_bits
            )));
        }

        Ok(())
    }
}

/// Builder for FrameConfig
#[derive(Default)]
pub struct FrameConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    input_bits: Option<u32>,
    output_bits: Option<u32>,
    pattern: Option<BayerPattern>,
    normalize: Option<bool>,
    degenerate_policy: Option<DegeneratePolicy>,
    strict_size: Option<bool>,
}

impl FrameConfigBuilder {
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn input_bits(mut self, bits: u32) -> Self {
        self.input_bits = Some(bits);
        self
    }

    pub fn output_bits(mut self, bits: u32) -> Self {
        self.output_bits = Some(bits);
        self
    }

    pub fn pattern(mut self, pattern: BayerPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn normalize(mut self, enable: bool) -> Self {
        self.normalize = Some(enable);
        self
    }

    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = Some(policy);
        self
    }

    pub fn strict_size(mut self, strict: bool) -> Self {
        self.strict_size = Some(strict);
        self
    }

    pub fn build(self) -> FrameConfig {
        let default = FrameConfig::default();
        FrameConfig {
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            input_bits: self.input_bits.unwrap_or(default.input_bits),
            output_bits: self.output_bits.unwrap_or(default.output_bits),
            pattern: self.pattern.unwrap_or(default.pattern),
            normalize: self.normalize.unwrap_or(default.normalize),
            degenerate_policy: self.degenerate_policy.unwrap_or(default.degenerate_policy),
            strict_size: self.strict_size.unwrap_or(default.strict_size),
        }
    }
}
