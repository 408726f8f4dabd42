use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::debayer::types::RgbImage;
use crate::image_pipeline::tga::types::TgaHeader;
use crate::image_pipeline::tga::writer::ImageWriter;

pub struct TgaWriter;

impl ImageWriter for TgaWriter {
    fn write_image(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding TGA image: {}x{}", image.width, image.height);

        let header = TgaHeader::truecolor(image.width, image.height)?;
        if image.data.len() != image.width * image.height * 3 {
            return Err(PipelineError::InvalidGeometry(format!(
                "{} bytes of pixel data for a {}x{} image",
                image.data.len(),
                image.width,
                image.height
            )));
        }

        output.write_all(&header.to_bytes())?;
        output.write_all(&image.data)?;
        output.flush()?;

        debug!("TGA encoding complete");
        Ok(())
    }
}
