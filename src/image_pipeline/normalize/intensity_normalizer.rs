//! Min-max intensity stretch applied to a sensor frame in place.
//!
//! The darkest sample becomes 0 and the brightest becomes the largest value
//! representable at the input bit depth. Results are rounded to the nearest
//! integer with halves going away from zero (`f32::round`). This is a
//! different policy from the truncation used when the debayer reduces bit
//! depth, and the two are kept separate on purpose.

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::image_pipeline::common::config::{DegeneratePolicy, FrameConfig};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::normalize::stats::FrameStatistics;
use crate::image_pipeline::raw::types::SensorFrame;

pub struct IntensityNormalizer;

impl IntensityNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Stretches `frame` to span `0..=config.input_max()`.
    ///
    /// Returns the statistics measured before the stretch. A uniform frame
    /// has no range to stretch: under [`DegeneratePolicy::PassThrough`] it is
    /// left untouched, under [`DegeneratePolicy::Reject`] it is an error.
    pub fn process(&self, frame: &mut SensorFrame, config: &FrameConfig) -> Result<FrameStatistics> {
        let stats = FrameStatistics::compute(frame);
        debug!("Frame statistics: min={}, max={}", stats.min, stats.max);

        if stats.is_uniform() {
            return match config.degenerate_policy {
                DegeneratePolicy::PassThrough => {
                    warn!(
                        "Every sample equals {}, skipping normalization",
                        stats.min
                    );
                    Ok(stats)
                }
                DegeneratePolicy::Reject => Err(PipelineError::DegenerateFrame(stats.min)),
            };
        }

        let input_max = config.input_max();
        let min = stats.min;
        let scale = input_max as f32 / stats.range() as f32;
        let rescale = move |v: &mut u16| {
            *v = (((*v - min) as f32 * scale).round() as u16).min(input_max);
        };

        #[cfg(feature = "rayon")]
        frame.samples_mut().par_iter_mut().for_each(rescale);

        #[cfg(not(feature = "rayon"))]
        frame.samples_mut().iter_mut().for_each(rescale);

        Ok(stats)
    }
}

impl Default for IntensityNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
