#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::common::config::FrameConfig;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::debayer::types::{BLUE, GREEN, RED, RgbImage};
use crate::image_pipeline::raw::types::SensorFrame;

/// Collapses every 2x2 mosaic block into one RGB pixel.
///
/// Red and blue are taken as-is, the two greens are averaged with integer
/// division. All three are then scaled from the input to the output bit depth
/// and truncated toward zero.
pub struct BlockDebayer;

impl BlockDebayer {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, frame: &SensorFrame, config: &FrameConfig) -> Result<RgbImage> {
        let width = config.width;
        let height = config.height;

        if frame.blocks_wide() != width || frame.blocks_high() != height {
            return Err(PipelineError::InvalidGeometry(format!(
                "{}x{} sensor grid does not yield a {}x{} image",
                frame.sensor_width(),
                frame.sensor_height(),
                width,
                height
            )));
        }

        debug!(
            "Debayering {}x{} blocks, pattern={}",
            width,
            height,
            config.pattern.name()
        );

        let layout = config.pattern.layout();
        let factor = config.output_max() as f32 / config.input_max() as f32;
        let mut image = RgbImage::new(width, height);

        let fill_row = |(y, out_row): (usize, &mut [u8])| {
            let rows = [frame.row(2 * y), frame.row(2 * y + 1)];
            let at = |(dx, dy): (usize, usize), x: usize| rows[dy][2 * x + dx] as u32;

            for (x, px) in out_row.chunks_exact_mut(3).enumerate() {
                let green = (at(layout.green_r, x) + at(layout.green_b, x)) / 2;
                px[RED] = scale_sample(at(layout.red, x), factor);
                px[GREEN] = scale_sample(green, factor);
                px[BLUE] = scale_sample(at(layout.blue, x), factor);
            }
        };

        #[cfg(feature = "rayon")]
        image.data.par_chunks_mut(width * 3).enumerate().for_each(fill_row);

        #[cfg(not(feature = "rayon"))]
        image.data.chunks_mut(width * 3).enumerate().for_each(fill_row);

        Ok(image)
    }
}

impl Default for BlockDebayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit-depth reduction: float multiply, then truncate. Saturates at 255.
fn scale_sample(value: u32, factor: f32) -> u8 {
    (value as f32 * factor) as u8
}
