use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::RgbImage;

pub trait ImageWriter {
    fn write_image(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()>;
}
