use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::{FrameConfig, PipelineError, PipelineTimings, Result},
    debayer::{BlockDebayer, RgbImage},
    normalize::IntensityNormalizer,
    raw::{RawFrameReader, Rg10Reader, SensorFrame},
    tga::{ImageWriter, TgaWriter},
};

/// Source -> normalizer -> debayer -> sink for a single frame.
pub struct Rg10ToTgaPipeline<R: RawFrameReader, W: ImageWriter> {
    reader: R,
    writer: W,
    normalizer: IntensityNormalizer,
    debayer: BlockDebayer,
    config: FrameConfig,
}

impl Rg10ToTgaPipeline<Rg10Reader, TgaWriter> {
    pub fn new(config: FrameConfig) -> Result<Self> {
        Self::with_custom(Rg10Reader, TgaWriter, config)
    }
}

impl<R: RawFrameReader, W: ImageWriter> Rg10ToTgaPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: FrameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            normalizer: IntensityNormalizer::new(),
            debayer: BlockDebayer::new(),
            config,
        })
    }

    fn process(&self, mut frame: SensorFrame, timings: &mut PipelineTimings) -> Result<RgbImage> {
        if self.config.normalize {
            let stats = timings.record("normalize", || {
                let _span = tracing::info_span!("normalize").entered();
                self.normalizer.process(&mut frame, &self.config)
            })?;
            info!(min = stats.min, max = stats.max, "Frame normalized");
        }

        timings.record("debayer", || {
            let _span = tracing::info_span!("debayer", pattern = self.config.pattern.name()).entered();
            self.debayer.process(&frame, &self.config)
        })
    }

    /// Converts one frame read from `input`, writing the TGA file to `output`.
    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input, output).map(|_| ())
    }

    #[instrument(skip_all)]
    pub fn convert_with_timings(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting RG10 to TGA conversion");

        let frame = timings.record("read_input", || {
            let _span = tracing::info_span!("read_input").entered();
            self.reader.read_frame(input, &self.config)
        })?;

        let image = self.process(frame, &mut timings)?;

        timings.record("write_output", || {
            let _span = tracing::info_span!("write_output").entered();
            self.writer.write_image(&image, output)
        })?;

        info!(
            "Conversion complete: {}x{} in {:.3}ms",
            image.width,
            image.height,
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path)
            .map(|_| ())
    }

    /// Reads `input_path`, converts it, and writes the TGA to `output_path`.
    ///
    /// The output file is only created once the image is ready, so a bad
    /// input never leaves an empty output behind.
    #[instrument(skip_all, fields(input = %input_path.as_ref().display(), output = %output_path.as_ref().display()))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();
        let mut timings = PipelineTimings::new();

        info!(
            "Converting file: {} -> {}",
            input_path.display(),
            output_path.display()
        );

        let frame = timings.record("read_input_file", || {
            let _span = tracing::info_span!("read_input_file").entered();
            self.reader.read_file(input_path, &self.config)
        })?;

        let image = self.process(frame, &mut timings)?;

        timings.record("write_output_file", || {
            let _span = tracing::info_span!("write_output_file").entered();
            let file = File::create(output_path).map_err(|e| {
                PipelineError::ResourceUnavailable(format!(
                    "Unable to open file {} for writing: {}",
                    output_path.display(),
                    e
                ))
            })?;
            let mut output = BufWriter::new(file);
            self.writer.write_image(&image, &mut output)?;
            output.flush()?;
            Ok::<_, PipelineError>(())
        })?;

        info!(
            "Wrote {}x{} image in {:.3}ms",
            image.width,
            image.height,
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FrameConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
